use serde::{Deserialize, Serialize};

use crate::{
    CellValue, Column, CurrencyFormatter, LayoutKind, LedgerRow, Money, PartyEntry, SupplierEntry,
};

/// A named list of ledger entries with its headline figures.
///
/// `total_entries` is carried as supplied by the data source and is expected,
/// not required, to match `entries.len()`. See [`LedgerSummary::is_consistent`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary<E> {
    pub name: String,
    pub total_entries: usize,
    pub outstanding: Money,
    pub entries: Vec<E>,
}

impl<E> LedgerSummary<E> {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_entries == self.entries.len()
    }
}

impl<E: LedgerRow> LedgerSummary<E> {
    /// Formatted cells of every entry, in table order.
    #[must_use]
    pub fn rows(&self, formatter: &dyn CurrencyFormatter) -> Vec<Vec<CellValue>> {
        self.entries
            .iter()
            .map(|entry| entry.cells(formatter))
            .collect()
    }
}

/// The dataset behind one dialog, tagged by layout family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerDataset {
    Party(LedgerSummary<PartyEntry>),
    Supplier(LedgerSummary<SupplierEntry>),
}

impl LedgerDataset {
    #[must_use]
    pub fn layout(&self) -> LayoutKind {
        match self {
            LedgerDataset::Party(_) => LayoutKind::Party,
            LedgerDataset::Supplier(_) => LayoutKind::Supplier,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            LedgerDataset::Party(summary) => &summary.name,
            LedgerDataset::Supplier(summary) => &summary.name,
        }
    }

    #[must_use]
    pub fn total_entries(&self) -> usize {
        match self {
            LedgerDataset::Party(summary) => summary.total_entries,
            LedgerDataset::Supplier(summary) => summary.total_entries,
        }
    }

    #[must_use]
    pub fn outstanding(&self) -> Money {
        match self {
            LedgerDataset::Party(summary) => summary.outstanding,
            LedgerDataset::Supplier(summary) => summary.outstanding,
        }
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        match self {
            LedgerDataset::Party(summary) => summary.is_consistent(),
            LedgerDataset::Supplier(summary) => summary.is_consistent(),
        }
    }

    #[must_use]
    pub fn columns(&self) -> &'static [Column] {
        match self {
            LedgerDataset::Party(_) => PartyEntry::COLUMNS,
            LedgerDataset::Supplier(_) => SupplierEntry::COLUMNS,
        }
    }

    #[must_use]
    pub fn rows(&self, formatter: &dyn CurrencyFormatter) -> Vec<Vec<CellValue>> {
        match self {
            LedgerDataset::Party(summary) => summary.rows(formatter),
            LedgerDataset::Supplier(summary) => summary.rows(formatter),
        }
    }
}
