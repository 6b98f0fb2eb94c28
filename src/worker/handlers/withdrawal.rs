use crate::{
    common::{error::BankError, money::Money, outcome::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, account_number: &str, amount: Money) -> Result<Outcome, BankError> {
    // direct lookup: an unknown account is KeyNotFound, not an InputError
    let acc = ledger.account_mut(account_number)?;
    acc.withdraw(amount)?;
    Ok(Outcome::Withdrawn {
        balance: acc.balance(),
    })
}
