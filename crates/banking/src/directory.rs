//! In-memory bank directory.
//!
//! Accounts only store the [`BankId`] of the bank that registered them; the
//! directory turns that back-reference into the bank itself.

use std::collections::HashMap;
use std::sync::RwLock;

use rust_decimal::Decimal;

use ledger_core::{BankId, LedgerError, LedgerResult};

use crate::bank::Bank;
use crate::handle::SharedAccount;

#[derive(Debug, Default)]
pub struct BankDirectory {
    banks: RwLock<HashMap<BankId, Bank>>,
}

impl BankDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bank`, replacing any bank with the same id.
    pub fn register(&self, bank: Bank) -> LedgerResult<BankId> {
        let id = bank.id_typed();
        let mut banks = self
            .banks
            .write()
            .map_err(|_| LedgerError::conflict("directory lock poisoned"))?;
        banks.insert(id, bank);
        Ok(id)
    }

    pub fn with_bank<R>(&self, id: BankId, f: impl FnOnce(&Bank) -> R) -> LedgerResult<R> {
        let banks = self
            .banks
            .read()
            .map_err(|_| LedgerError::conflict("directory lock poisoned"))?;
        banks.get(&id).map(f).ok_or_else(LedgerError::not_found)
    }

    pub fn with_bank_mut<R>(&self, id: BankId, f: impl FnOnce(&mut Bank) -> R) -> LedgerResult<R> {
        let mut banks = self
            .banks
            .write()
            .map_err(|_| LedgerError::conflict("directory lock poisoned"))?;
        banks.get_mut(&id).map(f).ok_or_else(LedgerError::not_found)
    }

    pub fn bank_name(&self, id: BankId) -> LedgerResult<String> {
        self.with_bank(id, |bank| bank.name().to_string())
    }

    /// Name of the bank `account` is registered with.
    pub fn bank_of(&self, account: &SharedAccount) -> LedgerResult<String> {
        let id = account.bank()?.ok_or_else(LedgerError::not_found)?;
        self.bank_name(id)
    }

    /// Transfer through a registered bank. Only a read lock is held on the
    /// directory; the accounts serialize the transfer themselves.
    pub fn transfer(
        &self,
        bank: BankId,
        from: &SharedAccount,
        to: &SharedAccount,
        amount: Decimal,
    ) -> LedgerResult<()> {
        self.with_bank(bank, |bank| bank.transfer(from, to, amount))?
    }

    pub fn len(&self) -> LedgerResult<usize> {
        self.banks
            .read()
            .map(|banks| banks.len())
            .map_err(|_| LedgerError::conflict("directory lock poisoned"))
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.len()? == 0)
    }
}
