//! Shared account handles.
//!
//! A bank's account list and outside callers hold the same account through a
//! [`SharedAccount`]. Every multi-account operation locks in ascending
//! `(AccountId, address)` order so opposite-direction transfers cannot deadlock.

use std::sync::{Arc, Mutex, MutexGuard};

use rust_decimal::Decimal;

use ledger_core::{AccountId, BankId, LedgerError, LedgerResult, ensure_non_negative};

use crate::account::Account;

/// Lock-ordering key: account id first, allocation address as tie-break for
/// distinct accounts that were built with the same id.
pub(crate) type OrderKey = (AccountId, usize);

/// Cloneable handle to one account. Clones share the same underlying balance.
#[derive(Debug, Clone)]
pub struct SharedAccount {
    id: AccountId,
    inner: Arc<Mutex<Account>>,
}

impl SharedAccount {
    pub fn new(account: Account) -> Self {
        Self {
            id: account.id_typed(),
            inner: Arc::new(Mutex::new(account)),
        }
    }

    pub fn id(&self) -> AccountId {
        self.id
    }

    /// Whether both handles point at the same account (identity, not value).
    pub fn same_account(&self, other: &SharedAccount) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn order_key(&self) -> OrderKey {
        (self.id, Arc::as_ptr(&self.inner) as usize)
    }

    pub(crate) fn lock(&self) -> LedgerResult<MutexGuard<'_, Account>> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::conflict(format!("account {} lock poisoned", self.id)))
    }

    pub fn credit(&self, amount: Decimal) -> LedgerResult<()> {
        self.lock()?.credit(amount)
    }

    pub fn debit(&self, amount: Decimal) -> LedgerResult<()> {
        self.lock()?.debit(amount)
    }

    pub fn balance(&self) -> LedgerResult<Decimal> {
        Ok(self.lock()?.balance())
    }

    pub fn owner(&self) -> LedgerResult<String> {
        Ok(self.lock()?.owner().to_string())
    }

    pub fn set_owner(&self, owner: impl Into<String>) -> LedgerResult<()> {
        self.lock()?.set_owner(owner);
        Ok(())
    }

    pub fn bank(&self) -> LedgerResult<Option<BankId>> {
        Ok(self.lock()?.bank())
    }

    /// Point-in-time copy of the account.
    pub fn snapshot(&self) -> LedgerResult<Account> {
        Ok(self.lock()?.clone())
    }

    pub(crate) fn attach_to(&self, bank: BankId) -> LedgerResult<()> {
        self.lock()?.attach_to(bank);
        Ok(())
    }
}

impl From<Account> for SharedAccount {
    fn from(account: Account) -> Self {
        Self::new(account)
    }
}

/// Lock two distinct accounts in key order; guards come back as `(from, to)`.
fn lock_pair<'a>(
    from: &'a SharedAccount,
    to: &'a SharedAccount,
) -> LedgerResult<(MutexGuard<'a, Account>, MutexGuard<'a, Account>)> {
    if from.order_key() <= to.order_key() {
        let source = from.lock()?;
        let target = to.lock()?;
        Ok((source, target))
    } else {
        let target = to.lock()?;
        let source = from.lock()?;
        Ok((source, target))
    }
}

/// Debit `from` then credit `to` while holding both locks.
///
/// Either both balances change or neither does.
pub(crate) fn move_funds(from: &SharedAccount, to: &SharedAccount, amount: Decimal) -> LedgerResult<()> {
    let amount = ensure_non_negative(amount)?;
    if from.same_account(to) {
        let account = from.lock()?;
        if !account.can_debit(amount) {
            return Err(LedgerError::insufficient_funds());
        }
        return Ok(());
    }

    let (mut source, mut target) = lock_pair(from, to)?;
    if target.balance().checked_add(amount).is_none() {
        return Err(LedgerError::validation("credit overflows the target balance"));
    }
    source.debit(amount)?;
    target.credit(amount)
}
