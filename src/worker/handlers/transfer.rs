use crate::{
    common::{error::BankError, money::Money, outcome::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, from: &str, to: &str, amount: Money) -> Result<Outcome, BankError> {
    ledger.transfer(from, to, amount)?;
    Ok(Outcome::Transferred {
        balance: ledger.account(from)?.balance(),
    })
}
