use crate::common::{
    error::{BankError, InputError, TransferError},
    money::Money,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_number: String,
    /// Account holder's display name.
    pub name: String,
    /// Never negative. Only `deposit` and `withdraw` change it.
    balance: Money,
}

impl Account {
    pub fn new(account_number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            name: name.into(),
            balance: Money::zero(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn deposit(&mut self, amount: Money) -> Result<(), InputError> {
        if !amount.is_positive() {
            return Err(InputError::NonPositiveDeposit);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(InputError::AmountOverflow)?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> Result<(), BankError> {
        if !amount.is_positive() {
            return Err(InputError::NonPositiveWithdrawal.into());
        }
        if amount > self.balance {
            return Err(TransferError::InsufficientFunds.into());
        }
        // amount <= balance, so this cannot go below zero
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(TransferError::InsufficientFunds)?;
        Ok(())
    }
}
