pub mod closed;
pub mod ledger_detail;
