use crate::{
    common::{error::BankError, outcome::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, account_number: &str) -> Result<Outcome, BankError> {
    ledger.delete_account(account_number)?;
    Ok(Outcome::AccountDeleted)
}
