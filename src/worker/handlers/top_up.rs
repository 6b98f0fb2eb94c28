use crate::{
    common::{error::BankError, money::Money, outcome::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, phone_number: &str, amount: Money) -> Result<Outcome, BankError> {
    let balance = ledger.top_up_phone(phone_number, amount)?;
    Ok(Outcome::PhoneToppedUp { balance })
}
