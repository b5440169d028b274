//! Errors raised by the ledger model.
//!
//! - [`UnknownKind`] when a ledger kind string is not `party`, `supplier` or `general`.
//! - [`UnknownCurrency`] when a currency code is not supported.
//! - [`Fixture`] when a fixture document cannot be decoded.
//!
//!  [`UnknownKind`]: LedgerError::UnknownKind
//!  [`UnknownCurrency`]: LedgerError::UnknownCurrency
//!  [`Fixture`]: LedgerError::Fixture
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("unknown ledger kind: \"{0}\"")]
    UnknownKind(String),
    #[error("unsupported currency: \"{0}\"")]
    UnknownCurrency(String),
    #[error("invalid fixture: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl PartialEq for LedgerError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::UnknownKind(a), Self::UnknownKind(b)) => a == b,
            (Self::UnknownCurrency(a), Self::UnknownCurrency(b)) => a == b,
            (Self::Fixture(a), Self::Fixture(b)) => a.to_string() == b.to_string(),
            (Self::Io(a), Self::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}
