use crate::{
    common::{action::Action, error::BankError, outcome::Outcome},
    domain::ledger::Ledger,
    worker::handlers::{create_account, delete_account, deposit, top_up, transfer, withdrawal},
};

/// Routes validated actions to their handlers and keeps a tally of how many
/// succeeded and how many were rejected.
#[derive(Debug, Default)]
pub struct Processor {
    applied: u64,
    rejected: u64,
}

impl Processor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn applied(&self) -> u64 {
        self.applied
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    pub fn process(&mut self, ledger: &mut Ledger, action: Action) -> Result<Outcome, BankError> {
        let kind = action.kind();
        let result = match action {
            Action::CreateAccount {
                account_number,
                name,
            } => create_account::handle(ledger, &account_number, &name),
            Action::Deposit {
                account_number,
                amount,
            } => deposit::handle(ledger, &account_number, amount),
            Action::Withdraw {
                account_number,
                amount,
            } => withdrawal::handle(ledger, &account_number, amount),
            Action::Transfer { from, to, amount } => transfer::handle(ledger, &from, &to, amount),
            Action::TopUpPhone {
                phone_number,
                amount,
            } => top_up::handle(ledger, &phone_number, amount),
            Action::DeleteAccount { account_number } => {
                delete_account::handle(ledger, &account_number)
            }
        };

        match &result {
            Ok(outcome) => {
                self.applied += 1;
                tracing::info!(action = %kind, %outcome, "action applied");
            }
            Err(err) => {
                self.rejected += 1;
                tracing::warn!(action = %kind, kind = ?err.kind(), error = %err, "action rejected");
            }
        }
        result
    }
}
