use crate::{
    common::{error::BankError, outcome::Outcome},
    domain::ledger::Ledger,
};

pub fn handle(ledger: &mut Ledger, account_number: &str, name: &str) -> Result<Outcome, BankError> {
    ledger.create_account(account_number, name)?;
    Ok(Outcome::AccountCreated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{error::InputError, money::Money};

    #[test]
    fn creates_empty_account() {
        let mut ledger = Ledger::new();
        assert_eq!(
            handle(&mut ledger, "A1", "Alice").unwrap(),
            Outcome::AccountCreated
        );
        assert_eq!(ledger.account("A1").unwrap().balance(), Money::zero());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut ledger = Ledger::new();
        handle(&mut ledger, "A1", "Alice").unwrap();
        let err = handle(&mut ledger, "A1", "Bob").unwrap_err();
        assert_eq!(err, BankError::Input(InputError::AccountExists));
        assert_eq!(ledger.len(), 1);
    }
}
