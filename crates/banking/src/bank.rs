use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, warn};

use ledger_core::{BankId, Entity, LedgerError, LedgerResult};

use crate::account::Account;
use crate::handle::{self, OrderKey, SharedAccount};

/// A named registry of accounts that can move funds between any two accounts.
///
/// The account list keeps insertion order and permits duplicates. Registration
/// only affects the listing and each account's back-reference; `transfer`
/// accepts accounts from anywhere.
#[derive(Debug, Clone)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<SharedAccount>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(BankId::new(), name)
    }

    pub fn with_id(id: BankId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn accounts(&self) -> &[SharedAccount] {
        &self.accounts
    }

    /// Append `account` and point its back-reference at this bank.
    pub fn add_account(&mut self, account: SharedAccount) -> LedgerResult<()> {
        account.attach_to(self.id)?;
        self.accounts.push(account);
        Ok(())
    }

    /// Wrap, register and return a new account.
    pub fn open_account(&mut self, account: Account) -> LedgerResult<SharedAccount> {
        let handle = SharedAccount::new(account);
        self.add_account(handle.clone())?;
        Ok(handle)
    }

    /// First registered account whose owner is `owner`.
    pub fn find_by_owner(&self, owner: &str) -> LedgerResult<Option<SharedAccount>> {
        for account in &self.accounts {
            if account.owner()? == owner {
                return Ok(Some(account.clone()));
            }
        }
        Ok(None)
    }

    /// Sum of registered balances, read under one consistent lock set.
    ///
    /// An account listed twice is counted twice.
    pub fn total_holdings(&self) -> LedgerResult<Decimal> {
        let mut listed: BTreeMap<OrderKey, (&SharedAccount, u32)> = BTreeMap::new();
        for account in &self.accounts {
            listed.entry(account.order_key()).or_insert((account, 0)).1 += 1;
        }

        let guards = listed
            .values()
            .map(|(account, times)| account.lock().map(|guard| (guard, *times)))
            .collect::<LedgerResult<Vec<_>>>()?;

        guards.iter().try_fold(Decimal::ZERO, |total, (guard, times)| {
            guard
                .balance()
                .checked_mul(Decimal::from(*times))
                .and_then(|subtotal| total.checked_add(subtotal))
                .ok_or_else(|| LedgerError::validation("holdings overflow"))
        })
    }

    /// Debit `from` and credit `to` by `amount` as one step.
    ///
    /// On `InsufficientFunds` neither balance changes and the credit is never
    /// attempted.
    pub fn transfer(&self, from: &SharedAccount, to: &SharedAccount, amount: Decimal) -> LedgerResult<()> {
        match handle::move_funds(from, to, amount) {
            Ok(()) => {
                debug!(bank = %self.id, from = %from.id(), to = %to.id(), %amount, "transfer applied");
                Ok(())
            }
            Err(e) => {
                warn!(bank = %self.id, from = %from.id(), to = %to.id(), %amount, error = %e, "transfer rejected");
                Err(e)
            }
        }
    }
}

impl Entity for Bank {
    type Id = BankId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
