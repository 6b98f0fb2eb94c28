use std::collections::HashMap;

use crate::{
    common::{
        error::{BankError, InputError},
        money::Money,
    },
    domain::account::Account,
};

/// Registry of every account and every phone balance for one run.
///
/// The ledger is the only place accounts are created or removed. Balances
/// change only through [`Account::deposit`] and [`Account::withdraw`], which
/// keeps every balance non-negative.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<String, Account>,
    phone_balances: HashMap<String, Money>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accounts(&self) -> &HashMap<String, Account> {
        &self.accounts
    }

    pub fn phone_balances(&self) -> &HashMap<String, Money> {
        &self.phone_balances
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn contains_account(&self, account_number: &str) -> bool {
        self.accounts.contains_key(account_number)
    }

    /// Direct lookup. A missing id is `KeyNotFound`, not an `InputError`.
    pub fn account(&self, account_number: &str) -> Result<&Account, BankError> {
        self.accounts
            .get(account_number)
            .ok_or_else(|| BankError::KeyNotFound(account_number.to_string()))
    }

    pub fn account_mut(&mut self, account_number: &str) -> Result<&mut Account, BankError> {
        self.accounts
            .get_mut(account_number)
            .ok_or_else(|| BankError::KeyNotFound(account_number.to_string()))
    }

    pub fn phone_balance(&self, phone_number: &str) -> Result<Money, BankError> {
        self.phone_balances
            .get(phone_number)
            .copied()
            .ok_or_else(|| BankError::KeyNotFound(phone_number.to_string()))
    }

    pub fn create_account(&mut self, account_number: &str, name: &str) -> Result<(), InputError> {
        if self.accounts.contains_key(account_number) {
            return Err(InputError::AccountExists);
        }
        self.accounts.insert(
            account_number.to_string(),
            Account::new(account_number, name),
        );
        tracing::debug!(account = account_number, "account created");
        Ok(())
    }

    /// Removes the account. Any remaining balance is discarded with it.
    pub fn delete_account(&mut self, account_number: &str) -> Result<(), InputError> {
        let removed = self
            .accounts
            .remove(account_number)
            .ok_or(InputError::AccountMissing)?;
        if removed.balance().is_positive() {
            tracing::debug!(
                account = account_number,
                balance = %removed.balance(),
                "deleted account still held funds"
            );
        }
        Ok(())
    }

    /// Moves `amount` from `from` to `to` as a withdraw followed by a deposit.
    ///
    /// Either both balances change or neither does. A transfer from an
    /// account to itself goes through the same two steps and leaves the
    /// balance where it was.
    pub fn transfer(&mut self, from: &str, to: &str, amount: Money) -> Result<(), BankError> {
        if !self.accounts.contains_key(from) || !self.accounts.contains_key(to) {
            return Err(InputError::TransferAccountMissing.into());
        }
        if !amount.is_positive() {
            return Err(InputError::NonPositiveTransfer.into());
        }

        self.account_mut(from)?.withdraw(amount)?;
        let deposited = self.account_mut(to)?.deposit(amount);
        if let Err(err) = deposited {
            // Put the funds back; they were just taken out so this cannot overflow.
            self.account_mut(from)?.deposit(amount)?;
            return Err(err.into());
        }

        tracing::debug!(from, to, amount = %amount, "transfer applied");
        Ok(())
    }

    /// Adds `amount` to the phone's balance, opening it at zero if needed.
    /// Returns the new balance.
    pub fn top_up_phone(&mut self, phone_number: &str, amount: Money) -> Result<Money, InputError> {
        if !amount.is_positive() {
            return Err(InputError::NonPositiveTopUp);
        }
        let balance = self
            .phone_balances
            .entry(phone_number.to_string())
            .or_insert_with(Money::zero);
        *balance = balance
            .checked_add(amount)
            .ok_or(InputError::AmountOverflow)?;
        Ok(*balance)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::common::error::{ErrorKind, TransferError};

    fn money(v: i64) -> Money {
        Money::from_units(v)
    }

    // Two accounts, A1/Alice and B1/Bob, both empty.
    fn two_accounts() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create_account("A1", "Alice").unwrap();
        ledger.create_account("B1", "Bob").unwrap();
        ledger
    }

    fn balance(ledger: &Ledger, id: &str) -> Money {
        ledger.account(id).unwrap().balance()
    }

    #[test]
    fn new_ledger_is_empty() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert!(ledger.phone_balances().is_empty());
    }

    #[test]
    fn create_account_starts_at_zero() {
        let ledger = two_accounts();
        assert_eq!(ledger.len(), 2);
        assert_eq!(balance(&ledger, "A1"), Money::zero());
        assert_eq!(ledger.account("B1").unwrap().name, "Bob");
    }

    #[test]
    fn create_account_rejects_duplicate_id() {
        let mut ledger = two_accounts();
        let err = ledger.create_account("A1", "Someone Else").unwrap_err();
        assert_eq!(err, InputError::AccountExists);
        assert_eq!(ledger.account("A1").unwrap().name, "Alice");
    }

    #[test]
    fn every_key_matches_its_account_number() {
        let ledger = two_accounts();
        for (key, acc) in ledger.accounts() {
            assert_eq!(key, &acc.account_number);
        }
    }

    #[test]
    fn delete_account_removes_it() {
        let mut ledger = two_accounts();
        ledger.delete_account("B1").unwrap();
        assert!(!ledger.contains_account("B1"));
        assert_eq!(
            ledger.account("B1").unwrap_err(),
            BankError::KeyNotFound("B1".into())
        );
    }

    #[test]
    fn delete_account_with_funds_is_permitted() {
        let mut ledger = two_accounts();
        ledger.account_mut("A1").unwrap().deposit(money(10)).unwrap();
        ledger.delete_account("A1").unwrap();
        assert!(!ledger.contains_account("A1"));
    }

    #[test]
    fn delete_missing_account_is_an_input_error() {
        let mut ledger = two_accounts();
        assert_eq!(
            ledger.delete_account("C2").unwrap_err(),
            InputError::AccountMissing
        );
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn transfer_moves_funds() {
        let mut ledger = two_accounts();
        ledger.account_mut("A1").unwrap().deposit(money(100)).unwrap();

        ledger.transfer("A1", "B1", money(40)).unwrap();

        assert_eq!(balance(&ledger, "A1"), money(60));
        assert_eq!(balance(&ledger, "B1"), money(40));
    }

    #[test]
    fn transfer_with_unknown_account_is_an_input_error() {
        let mut ledger = two_accounts();
        let to_missing = ledger.transfer("A1", "C1", money(10)).unwrap_err();
        let from_missing = ledger.transfer("C1", "A1", money(10)).unwrap_err();
        assert_eq!(
            to_missing,
            BankError::Input(InputError::TransferAccountMissing)
        );
        assert_eq!(
            from_missing,
            BankError::Input(InputError::TransferAccountMissing)
        );
    }

    #[test]
    fn transfer_checks_accounts_before_amount() {
        let mut ledger = two_accounts();
        let err = ledger.transfer("A1", "C1", money(-5)).unwrap_err();
        assert_eq!(err, BankError::Input(InputError::TransferAccountMissing));
    }

    #[test]
    fn transfer_negative_amount_is_an_input_error() {
        let mut ledger = two_accounts();
        let err = ledger.transfer("A1", "B1", money(-5)).unwrap_err();
        assert_eq!(err, BankError::Input(InputError::NonPositiveTransfer));
    }

    #[test]
    fn transfer_without_funds_changes_nothing() {
        let mut ledger = two_accounts();
        ledger.account_mut("A1").unwrap().deposit(money(20)).unwrap();

        let err = ledger.transfer("A1", "B1", money(100)).unwrap_err();

        assert_eq!(err, BankError::Transfer(TransferError::InsufficientFunds));
        assert_eq!(balance(&ledger, "A1"), money(20));
        assert_eq!(balance(&ledger, "B1"), Money::zero());
    }

    #[test]
    fn transfer_to_self_leaves_balance_unchanged() {
        let mut ledger = two_accounts();
        ledger.account_mut("A1").unwrap().deposit(money(50)).unwrap();

        ledger.transfer("A1", "A1", money(20)).unwrap();
        assert_eq!(balance(&ledger, "A1"), money(50));

        let err = ledger.transfer("A1", "A1", money(80)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transfer);
        assert_eq!(
            ledger.transfer("Z9", "Z9", money(1)).unwrap_err().kind(),
            ErrorKind::Input
        );
        assert_eq!(
            ledger.transfer("A1", "A1", Money::zero()).unwrap_err().kind(),
            ErrorKind::Input
        );
    }

    #[test]
    fn transfer_rolls_back_when_destination_overflows() {
        let mut ledger = two_accounts();
        ledger.account_mut("A1").unwrap().deposit(money(10)).unwrap();
        ledger
            .account_mut("B1")
            .unwrap()
            .deposit(Money::from_minor_units(i64::MAX))
            .unwrap();

        let err = ledger.transfer("A1", "B1", money(5)).unwrap_err();

        assert_eq!(err, BankError::Input(InputError::AmountOverflow));
        assert_eq!(balance(&ledger, "A1"), money(10));
        assert_eq!(balance(&ledger, "B1"), Money::from_minor_units(i64::MAX));
    }

    #[test]
    fn top_up_accumulates() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.top_up_phone("9841234567", money(25)).unwrap(), money(25));
        assert_eq!(ledger.top_up_phone("9841234567", money(10)).unwrap(), money(35));
        assert_eq!(ledger.phone_balance("9841234567").unwrap(), money(35));
    }

    #[test]
    fn top_up_is_not_linked_to_accounts() {
        let mut ledger = two_accounts();
        ledger.top_up_phone("A1", money(5)).unwrap();
        assert_eq!(balance(&ledger, "A1"), Money::zero());
    }

    #[test]
    fn top_up_negative_is_an_input_error() {
        let mut ledger = Ledger::new();
        let err = ledger.top_up_phone("9841234567", money(-10)).unwrap_err();
        assert_eq!(err, InputError::NonPositiveTopUp);
        assert!(ledger.phone_balances().is_empty());
    }

    #[test]
    fn direct_lookup_of_missing_ids_is_key_not_found() {
        let mut ledger = two_accounts();
        assert_eq!(ledger.account("Z9").unwrap_err().kind(), ErrorKind::KeyNotFound);
        assert_eq!(
            ledger.account_mut("Z9").unwrap_err().kind(),
            ErrorKind::KeyNotFound
        );
        assert_eq!(
            ledger.phone_balance("000").unwrap_err().kind(),
            ErrorKind::KeyNotFound
        );
    }

    proptest! {
        #[test]
        fn failed_transfer_has_no_partial_effect(start in 0i64..100_000, extra in 1i64..100_000) {
            let mut ledger = two_accounts();
            if start > 0 {
                ledger.account_mut("A1").unwrap().deposit(Money::from_minor_units(start)).unwrap();
            }

            let err = ledger
                .transfer("A1", "B1", Money::from_minor_units(start + extra))
                .unwrap_err();

            prop_assert_eq!(err.kind(), ErrorKind::Transfer);
            prop_assert_eq!(balance(&ledger, "A1"), Money::from_minor_units(start));
            prop_assert_eq!(balance(&ledger, "B1"), Money::zero());
        }

        #[test]
        fn top_up_rejects_non_positive(amount in -100_000i64..=0) {
            let mut ledger = Ledger::new();
            let err = ledger.top_up_phone("555", Money::from_minor_units(amount)).unwrap_err();
            prop_assert_eq!(err, InputError::NonPositiveTopUp);
            prop_assert!(ledger.phone_balances().is_empty());
        }
    }
}
