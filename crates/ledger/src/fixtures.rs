use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    Currency, EntryStatus, LayoutKind, LedgerDataset, LedgerKind, LedgerSummary, Money,
    PartyEntry, Result, SupplierEntry,
};

/// The two datasets a dialog can show, one per layout family.
///
/// The built-in [`Fixtures::sample`] data stands in for a real data source;
/// any other source can be injected with [`Fixtures::from_json`] or by
/// building the struct directly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    pub party: LedgerSummary<PartyEntry>,
    pub supplier: LedgerSummary<SupplierEntry>,
}

impl Fixtures {
    /// Built-in sample ledgers, amounts in rupees.
    #[must_use]
    pub fn sample() -> Self {
        let inr = |major| Money::from_major(major, Currency::Inr);
        Self {
            supplier: LedgerSummary {
                name: "Sharma Roadways".to_string(),
                total_entries: 2,
                outstanding: inr(846_000),
                entries: vec![
                    SupplierEntry {
                        date: SUPPLIER_FIRST_TRIP,
                        memo_no: "MEMO-1041".to_string(),
                        trip_details: "Mumbai to Delhi".to_string(),
                        detention: Money::ZERO,
                        extra_weight: Money::ZERO,
                        credit: inr(450_000),
                        payment: Money::ZERO,
                        advance: Money::ZERO,
                        balance: inr(450_000),
                        remarks: "Delivered on time".to_string(),
                    },
                    SupplierEntry {
                        date: SUPPLIER_SECOND_TRIP,
                        memo_no: "MEMO-1057".to_string(),
                        trip_details: "Delhi to Ludhiana".to_string(),
                        detention: Money::ZERO,
                        extra_weight: Money::ZERO,
                        credit: inr(396_000),
                        payment: Money::ZERO,
                        advance: Money::ZERO,
                        balance: inr(846_000),
                        remarks: "Awaiting POD".to_string(),
                    },
                ],
            },
            party: LedgerSummary {
                name: "Gupta Traders".to_string(),
                total_entries: 1,
                outstanding: inr(900_000),
                entries: vec![PartyEntry {
                    date: PARTY_BILL,
                    bill_no: "BILL-2201".to_string(),
                    trip_details: "Mumbai to Ahmedabad".to_string(),
                    bill_amount: inr(900_000),
                    received: Money::ZERO,
                    deductions: Money::ZERO,
                    net_received: Money::ZERO,
                    balance: inr(900_000),
                    status: EntryStatus::Pending,
                }],
            },
        }
    }

    /// Decodes fixtures from a JSON document.
    ///
    /// Amounts are minor units, dates are `YYYY-MM-DD`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Picks the dataset shown for `kind`.
    #[must_use]
    pub fn select(&self, kind: LedgerKind) -> LedgerDataset {
        match kind.layout() {
            LayoutKind::Party => LedgerDataset::Party(self.party.clone()),
            LayoutKind::Supplier => LedgerDataset::Supplier(self.supplier.clone()),
        }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::sample()
    }
}

// Evaluated at compile time, so an invalid date fails the build.
const SUPPLIER_FIRST_TRIP: NaiveDate = sample_date(2024, 1, 10);
const SUPPLIER_SECOND_TRIP: NaiveDate = sample_date(2024, 1, 18);
const PARTY_BILL: NaiveDate = sample_date(2024, 1, 12);

const fn sample_date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}
