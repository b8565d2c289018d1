//! `ledger-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod amount;
pub mod entity;
pub mod error;
pub mod id;

pub use amount::{ensure_non_negative, parse_amount, plain_string, whole_units};
pub use entity::Entity;
pub use error::{LedgerError, LedgerResult};
pub use id::{AccountId, BankId};
pub use rust_decimal::Decimal;
