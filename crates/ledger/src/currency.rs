use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{LedgerError, Money};

/// Currency used to display a ledger's amounts.
///
/// Amounts are stored as minor units (see [`Money`]); the currency decides how
/// many decimal digits those minor units represent and how the major part is
/// grouped and decorated on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Inr,
    Eur,
}

/// How the integer part of an amount is split into groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Grouping {
    /// `12,34,567`: the last three digits, then pairs.
    Indian,
    /// `1,234,567`.
    Thousands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SymbolPosition {
    Prefix,
    Suffix,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Eur => "EUR",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Inr => "₹",
            Currency::Eur => "€",
        }
    }

    /// Number of fraction digits carried by the minor units.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Inr | Currency::Eur => 2,
        }
    }

    /// Minor units in one major unit (`10^minor_units`).
    #[must_use]
    pub const fn minor_factor(self) -> i64 {
        10i64.pow(self.minor_units() as u32)
    }

    #[must_use]
    pub const fn grouping(self) -> Grouping {
        match self {
            Currency::Inr => Grouping::Indian,
            Currency::Eur => Grouping::Thousands,
        }
    }

    const fn symbol_position(self) -> SymbolPosition {
        match self {
            Currency::Inr => SymbolPosition::Prefix,
            Currency::Eur => SymbolPosition::Suffix,
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = LedgerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Currency::Inr),
            "EUR" => Ok(Currency::Eur),
            other => Err(LedgerError::UnknownCurrency(other.to_string())),
        }
    }
}

impl FromStr for Currency {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::try_from(s)
    }
}

/// Turns an amount into the string shown in a ledger cell.
///
/// Implementations must be total: every `Money` value yields a string.
/// Closures `Fn(Money) -> String` implement the trait, which keeps tests and
/// embedders free to inject their own convention.
pub trait CurrencyFormatter {
    fn format(&self, amount: Money) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(Money) -> String,
{
    fn format(&self, amount: Money) -> String {
        self(amount)
    }
}

/// Default formatter following the currency's local convention.
///
/// Whole amounts are printed without decimals (`₹8,46,000`); amounts with a
/// fractional part print every minor digit (`₹12.05`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleFormatter {
    currency: Currency,
}

impl LocaleFormatter {
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format(&self, amount: Money) -> String {
        let currency = self.currency;
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.minor().unsigned_abs();
        let factor = currency.minor_factor().unsigned_abs();
        let major = abs / factor;
        let fraction = abs % factor;

        let mut digits = group_digits(major, currency.grouping());
        if fraction != 0 {
            let width = usize::from(currency.minor_units());
            digits.push_str(&format!(".{fraction:0width$}"));
        }

        match currency.symbol_position() {
            SymbolPosition::Prefix => format!("{sign}{}{digits}", currency.symbol()),
            SymbolPosition::Suffix => format!("{sign}{digits}{}", currency.symbol()),
        }
    }
}

fn group_digits(value: u64, grouping: Grouping) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let step = match grouping {
        Grouping::Indian => 2,
        Grouping::Thousands => 3,
    };

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}
