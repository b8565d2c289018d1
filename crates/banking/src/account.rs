use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledger_core::{AccountId, BankId, Entity, LedgerError, LedgerResult, ensure_non_negative, whole_units};

/// A named holder of an exact-decimal balance.
///
/// Equality is by value: two accounts are equal when `owner` and `balance` are
/// equal, whatever their ids or bank back-references. Balances compare
/// numerically, so `3000` equals `3000.00`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Decimal,
    /// Non-owning back-reference, set when a bank registers the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bank: Option<BankId>,
}

impl Account {
    pub fn new(owner: impl Into<String>, balance: Decimal) -> Self {
        Self::with_id(AccountId::new(), owner, balance)
    }

    pub fn with_id(id: AccountId, owner: impl Into<String>, balance: Decimal) -> Self {
        Self {
            id,
            owner: owner.into(),
            balance,
            bank: None,
        }
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Reassign the owner label. Not part of any transfer; fixtures only.
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance truncated toward zero.
    pub fn balance_units(&self) -> i128 {
        whole_units(self.balance)
    }

    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    pub(crate) fn attach_to(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Whether `debit(amount)` would pass the solvency check.
    pub fn can_debit(&self, amount: Decimal) -> bool {
        amount >= Decimal::ZERO
            && self
                .balance
                .checked_sub(amount)
                .is_some_and(|rest| rest >= Decimal::ZERO)
    }

    /// Add `amount` to the balance.
    pub fn credit(&mut self, amount: Decimal) -> LedgerResult<()> {
        let amount = ensure_non_negative(amount)?;
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::validation("credit overflows the balance"))?;
        Ok(())
    }

    /// Subtract `amount` from the balance.
    ///
    /// Fails with `InsufficientFunds` if the result would be negative; the balance
    /// is left untouched in that case.
    pub fn debit(&mut self, amount: Decimal) -> LedgerResult<()> {
        let amount = ensure_non_negative(amount)?;
        let rest = self
            .balance
            .checked_sub(amount)
            .ok_or_else(LedgerError::insufficient_funds)?;
        if rest < Decimal::ZERO {
            return Err(LedgerError::insufficient_funds());
        }
        self.balance = rest;
        Ok(())
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
