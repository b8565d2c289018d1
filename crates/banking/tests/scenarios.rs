//! End-to-end account and bank scenarios through the public API.

use ledger_banking::{Account, Bank, BankDirectory, SharedAccount};
use ledger_core::{Decimal, LedgerError, parse_amount, plain_string};
use rust_decimal_macros::dec;

fn sharon() -> Account {
    Account::new("Sharon", parse_amount("1000.1234").unwrap())
}

#[test]
fn owner_and_balance_are_readable() {
    let account = Account::new("Sharon", parse_amount("1000.12234").unwrap());
    assert_eq!(account.owner(), "Sharon");
    assert_eq!(account.balance(), dec!(1000.12234));
    assert!(account.balance() > Decimal::ZERO);
}

#[test]
fn debit_leaves_exact_remainder() {
    let mut account = sharon();
    account.debit(Decimal::from(100)).unwrap();
    assert_eq!(account.balance_units(), 900);
    assert_eq!(plain_string(account.balance()), "900.1234");
}

#[test]
fn credit_adds_exact_amount() {
    let mut account = sharon();
    account.credit(Decimal::from(100)).unwrap();
    assert_eq!(account.balance_units(), 1100);
    assert_eq!(plain_string(account.balance()), "1100.1234");
}

#[test]
fn overdraft_reports_insufficient_funds() {
    let mut account = sharon();
    let err = account.debit(parse_amount("1500.00").unwrap()).unwrap_err();
    assert!(err.is_insufficient_funds());
    assert_eq!(err.to_string(), "Dinero Insuficiente");
    assert_eq!(plain_string(account.balance()), "1000.1234");
}

#[test]
fn equal_owner_and_balance_means_equal_accounts() {
    let a = Account::new("John Lennon", dec!(8999.87));
    let b = Account::new("John Lennon", dec!(8999.87));
    assert_eq!(a, b);
    assert_ne!(a, Account::new("John Legend", dec!(8999.87)));
}

#[test]
fn transfer_without_registration() {
    let rubi = SharedAccount::new(Account::new("Rubí", dec!(2500)));
    let andres = SharedAccount::new(Account::new("Andrés", dec!(1500.8989)));
    let mut bank = Bank::new("Banco");
    bank.set_name("Banco del Estado");

    bank.transfer(&andres, &rubi, dec!(500)).unwrap();
    assert_eq!(plain_string(andres.balance().unwrap()), "1000.8989");
    assert_eq!(plain_string(rubi.balance().unwrap()), "3000");
}

#[test]
fn bank_and_account_relations() {
    let rubi = SharedAccount::new(Account::new("Rubí", dec!(2500)));
    let andres = SharedAccount::new(Account::new("Andrés", dec!(1500.8989)));
    let mut bank = Bank::new("Banco");
    bank.add_account(rubi.clone()).unwrap();
    bank.add_account(andres.clone()).unwrap();
    bank.set_name("Banco del Estado");
    bank.transfer(&andres, &rubi, dec!(500)).unwrap();

    assert_eq!(plain_string(andres.balance().unwrap()), "1000.8989");
    assert_eq!(plain_string(rubi.balance().unwrap()), "3000");
    assert_eq!(bank.accounts().len(), 2);

    let found = bank.find_by_owner("Rubí").unwrap().unwrap();
    assert_eq!(found.owner().unwrap(), "Rubí");
    assert!(
        bank.accounts()
            .iter()
            .any(|account| account.owner().unwrap() == "Rubí")
    );

    let directory = BankDirectory::new();
    directory.register(bank).unwrap();
    assert_eq!(directory.bank_of(&rubi).unwrap(), "Banco del Estado");
}

#[test]
fn failed_transfer_is_a_no_op() {
    let mut bank = Bank::new("Banco del Estado");
    let rubi = bank.open_account(Account::new("Rubí", dec!(2500))).unwrap();
    let andres = bank.open_account(Account::new("Andrés", dec!(1500.8989))).unwrap();

    let err = bank.transfer(&andres, &rubi, dec!(2000)).unwrap_err();
    assert_eq!(err, LedgerError::InsufficientFunds);
    assert_eq!(andres.balance().unwrap(), dec!(1500.8989));
    assert_eq!(rubi.balance().unwrap(), dec!(2500));
    assert_eq!(bank.total_holdings().unwrap(), dec!(4000.8989));
}
