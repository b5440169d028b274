use serde::{Deserialize, Serialize};

use crate::Currency;

/// Signed money amount represented as **integer minor units** (paise, cents).
///
/// Every monetary field of a ledger entry uses this type. The viewer never
/// computes with amounts; it only formats them through a
/// [`CurrencyFormatter`](crate::CurrencyFormatter).
///
/// # Examples
///
/// ```rust
/// use ledger::{Currency, Money};
///
/// let amount = Money::from_major(8_460, Currency::Inr);
/// assert_eq!(amount.minor(), 846_000);
/// assert!(!amount.is_zero());
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Creates a new amount from minor units.
    #[must_use]
    pub const fn new(minor: i64) -> Self {
        Self(minor)
    }

    /// Creates an amount from whole major units (rupees, euros).
    #[must_use]
    pub const fn from_major(major: i64, currency: Currency) -> Self {
        Self(major * currency.minor_factor())
    }

    /// Returns the raw value in minor units.
    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_major_scales_by_minor_units() {
        assert_eq!(Money::from_major(1, Currency::Inr).minor(), 100);
        assert_eq!(Money::from_major(-25, Currency::Eur).minor(), -2500);
        assert_eq!(Money::from_major(0, Currency::Inr), Money::ZERO);
    }

    #[test]
    fn sign_checks() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_negative());
        assert!(Money::new(-1).is_negative());
        assert!(Money::new(i64::MIN).is_negative());
    }
}
