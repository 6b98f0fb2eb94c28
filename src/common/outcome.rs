use std::fmt;

use crate::common::money::Money;

/// What a successful action reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    AccountCreated,
    Deposited { balance: Money },
    Withdrawn { balance: Money },
    /// `balance` is the source account's balance after the transfer.
    Transferred { balance: Money },
    PhoneToppedUp { balance: Money },
    AccountDeleted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::AccountCreated => write!(f, "Account created."),
            Outcome::Deposited { balance } => write!(f, "Deposited. New balance: {balance}"),
            Outcome::Withdrawn { balance } => write!(f, "Withdrawn. New balance: {balance}"),
            Outcome::Transferred { balance } => write!(f, "Transferred. New balance: {balance}"),
            Outcome::PhoneToppedUp { balance } => {
                write!(f, "Phone top-up finished. New phone balance: {balance}")
            }
            Outcome::AccountDeleted => write!(f, "Account deleted."),
        }
    }
}
