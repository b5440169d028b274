use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Money;

/// Settlement state of a party bill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    #[default]
    Pending,
    Partial,
    Paid,
}

impl EntryStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            EntryStatus::Pending => "Pending",
            EntryStatus::Partial => "Partial",
            EntryStatus::Paid => "Paid",
        }
    }
}

/// One trip billed by a supplier (vendor), identified by its memo number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierEntry {
    pub date: NaiveDate,
    pub memo_no: String,
    pub trip_details: String,
    #[serde(default)]
    pub detention: Money,
    #[serde(default)]
    pub extra_weight: Money,
    #[serde(default)]
    pub credit: Money,
    #[serde(default)]
    pub payment: Money,
    #[serde(default)]
    pub advance: Money,
    pub balance: Money,
    #[serde(default)]
    pub remarks: String,
}

/// One bill raised to a party (customer), identified by its bill number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyEntry {
    pub date: NaiveDate,
    pub bill_no: String,
    pub trip_details: String,
    pub bill_amount: Money,
    #[serde(default)]
    pub received: Money,
    #[serde(default)]
    pub deductions: Money,
    #[serde(default)]
    pub net_received: Money,
    pub balance: Money,
    #[serde(default)]
    pub status: EntryStatus,
}
