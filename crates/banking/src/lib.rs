//! Banking module: accounts, banks and atomic transfers.
//!
//! Pure domain logic only: no IO, no HTTP, no persistence concerns. Balances are
//! exact decimals and a debit never drives a balance below zero.

pub mod account;
pub mod bank;
pub mod directory;
pub mod handle;

pub use account::Account;
pub use bank::Bank;
pub use directory::BankDirectory;
pub use handle::SharedAccount;
