//! Domain model for the ledger detail viewer.
//!
//! The crate knows nothing about terminals: it owns the ledger entries, the
//! per-kind column layouts, money formatting and the sample fixtures. The
//! `ledger_tui` binary turns the [`CellValue`]s produced here into widgets.

pub use currency::{Currency, CurrencyFormatter, Grouping, LocaleFormatter};
pub use entry::{EntryStatus, PartyEntry, SupplierEntry};
pub use error::LedgerError;
pub use fixtures::Fixtures;
pub use kind::{LayoutKind, LedgerKind};
pub use layout::{Align, CellValue, Column, LedgerRow, PLACEHOLDER};
pub use money::Money;
pub use summary::{LedgerDataset, LedgerSummary};

mod currency;
mod entry;
mod error;
mod fixtures;
mod kind;
mod layout;
mod money;
mod summary;

pub type Result<T> = std::result::Result<T, LedgerError>;
