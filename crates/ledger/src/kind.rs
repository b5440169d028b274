use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Which counterparty a ledger belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerKind {
    #[default]
    Party,
    Supplier,
    /// Shares the party layout and label; it has no layout of its own.
    General,
}

/// Column layout families. Every [`LedgerKind`] maps to exactly one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutKind {
    Party,
    Supplier,
}

impl LedgerKind {
    pub const ALL: [LedgerKind; 3] = [LedgerKind::Party, LedgerKind::Supplier, LedgerKind::General];

    #[must_use]
    pub const fn layout(self) -> LayoutKind {
        match self {
            LedgerKind::Party => LayoutKind::Party,
            LedgerKind::Supplier => LayoutKind::Supplier,
            LedgerKind::General => LayoutKind::Party,
        }
    }

    /// Human label used in the dialog title.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.layout() {
            LayoutKind::Party => "Party",
            LayoutKind::Supplier => "Supplier",
        }
    }

    /// Dialog title, e.g. `Supplier Ledger: Sharma Roadways`.
    #[must_use]
    pub fn title(self, ledger_name: &str) -> String {
        format!("{} Ledger: {ledger_name}", self.label())
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LedgerKind::Party => "party",
            LedgerKind::Supplier => "supplier",
            LedgerKind::General => "general",
        }
    }
}

impl core::fmt::Display for LedgerKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        LedgerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| LedgerError::UnknownKind(s.trim().to_string()))
    }
}
