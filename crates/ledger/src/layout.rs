//! Column layouts and row formatting for each ledger layout family.
//!
//! Every entry type owns its column set and its row formatter through
//! [`LedgerRow`], so a renderer never branches on the ledger kind per cell.
use chrono::NaiveDate;

use crate::{CurrencyFormatter, EntryStatus, Money, PartyEntry, SupplierEntry};

/// Text shown for amounts that are not displayed.
pub const PLACEHOLDER: &str = "-";

const DATE_FORMAT: &str = "%d %b %Y";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

/// A table column: header label, preferred width in cells and alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub title: &'static str,
    pub width: u16,
    pub align: Align,
}

impl Column {
    const fn text(title: &'static str, width: u16) -> Self {
        Self {
            title,
            width,
            align: Align::Left,
        }
    }

    const fn amount(title: &'static str) -> Self {
        Self {
            title,
            width: 12,
            align: Align::Right,
        }
    }

    const fn badge(title: &'static str) -> Self {
        Self {
            title,
            width: 10,
            align: Align::Center,
        }
    }
}

/// Renderer-independent content of a single cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    /// An amount already passed through the currency formatter.
    Amount(String),
    /// Rendered as [`PLACEHOLDER`].
    Placeholder,
    /// Rendered as a pill-shaped badge.
    Badge(EntryStatus),
}

impl CellValue {
    /// Plain text of the cell, without any styling.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            CellValue::Text(text) | CellValue::Amount(text) => text,
            CellValue::Placeholder => PLACEHOLDER,
            CellValue::Badge(status) => status.label(),
        }
    }

    fn date(date: NaiveDate) -> Self {
        CellValue::Text(date.format(DATE_FORMAT).to_string())
    }

    fn amount(amount: Money, formatter: &dyn CurrencyFormatter) -> Self {
        CellValue::Amount(formatter.format(amount))
    }

    /// Zero amounts are shown as a placeholder instead of a formatted zero.
    fn optional_amount(amount: Money, formatter: &dyn CurrencyFormatter) -> Self {
        if amount.is_zero() {
            CellValue::Placeholder
        } else {
            Self::amount(amount, formatter)
        }
    }
}

/// An entry type that knows how it is laid out in the ledger table.
pub trait LedgerRow {
    const COLUMNS: &'static [Column];

    /// One cell per entry of [`Self::COLUMNS`], in the same order.
    fn cells(&self, formatter: &dyn CurrencyFormatter) -> Vec<CellValue>;
}

impl LedgerRow for SupplierEntry {
    const COLUMNS: &'static [Column] = &[
        Column::text("Date", 11),
        Column::text("Memo No", 9),
        Column::text("Trip Details", 20),
        Column::amount("Detention"),
        Column::amount("Extra WT"),
        Column::amount("Credit"),
        Column::amount("Payment"),
        Column::amount("Advance"),
        Column::amount("Balance"),
        Column::text("Remarks", 18),
    ];

    // Detention, extra weight and advance are carried by the entry but never
    // shown in this table.
    fn cells(&self, formatter: &dyn CurrencyFormatter) -> Vec<CellValue> {
        vec![
            CellValue::date(self.date),
            CellValue::Text(self.memo_no.clone()),
            CellValue::Text(self.trip_details.clone()),
            CellValue::Placeholder,
            CellValue::Placeholder,
            CellValue::optional_amount(self.credit, formatter),
            CellValue::optional_amount(self.payment, formatter),
            CellValue::Placeholder,
            CellValue::amount(self.balance, formatter),
            CellValue::Text(self.remarks.clone()),
        ]
    }
}

impl LedgerRow for PartyEntry {
    const COLUMNS: &'static [Column] = &[
        Column::text("Date", 11),
        Column::text("Bill No", 9),
        Column::text("Trip Details", 20),
        Column::amount("Bill Amount"),
        Column::amount("Received"),
        Column::amount("Deductions"),
        Column::amount("Net Received"),
        Column::amount("Balance"),
        Column::badge("Status"),
    ];

    fn cells(&self, formatter: &dyn CurrencyFormatter) -> Vec<CellValue> {
        vec![
            CellValue::date(self.date),
            CellValue::Text(self.bill_no.clone()),
            CellValue::Text(self.trip_details.clone()),
            CellValue::amount(self.bill_amount, formatter),
            CellValue::amount(self.received, formatter),
            CellValue::amount(self.deductions, formatter),
            CellValue::amount(self.net_received, formatter),
            CellValue::amount(self.balance, formatter),
            CellValue::Badge(self.status),
        ]
    }
}
