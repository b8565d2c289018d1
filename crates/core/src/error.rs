//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// `InsufficientFunds` is the only failure a well-formed debit or transfer can
/// produce. The remaining variants cover rejected input and shared-state faults.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A debit would have driven a balance below zero. Nothing was mutated.
    #[error("Dinero Insuficiente")]
    InsufficientFunds,

    /// An amount was rejected (negative, or unparseable external input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A directory lookup found nothing.
    #[error("not found")]
    NotFound,

    /// Shared state could not be accessed (e.g. a poisoned lock).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl LedgerError {
    pub fn insufficient_funds() -> Self {
        Self::InsufficientFunds
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, Self::InsufficientFunds)
    }
}
