use std::io::{self, BufRead, Write};

use crate::{
    common::{
        action::{Action, ActionKind, ActionRequest},
        error::{AppError, BankError},
    },
    domain::ledger::Ledger,
    worker::processor::Processor,
};

const EXIT_KEY: &str = "0";
const FAREWELL: &str = "Thank you for using the bank! Please come visit us again.";

#[derive(Debug, Clone, Copy)]
enum Field {
    Account,
    Secondary,
    Amount,
}

/// What each menu option asks for, in order.
fn prompts(kind: ActionKind) -> &'static [(Field, &'static str)] {
    match kind {
        ActionKind::CreateAccount => &[
            (Field::Account, "Enter new account number: "),
            (Field::Secondary, "Enter account holder's name: "),
        ],
        ActionKind::Deposit => &[
            (Field::Account, "Enter account number: "),
            (Field::Amount, "Enter deposit amount: "),
        ],
        ActionKind::Withdraw => &[
            (Field::Account, "Enter account number: "),
            (Field::Amount, "Enter withdraw amount: "),
        ],
        ActionKind::Transfer => &[
            (Field::Account, "From account: "),
            (Field::Secondary, "To account: "),
            (Field::Amount, "Amount to transfer: "),
        ],
        ActionKind::TopUpPhone => &[
            (Field::Secondary, "Phone number: "),
            (Field::Amount, "Top-up amount: "),
        ],
        ActionKind::DeleteAccount => &[(Field::Account, "Please enter account number to delete: ")],
    }
}

/// Text menu front end.
///
/// Generic over its input and output so a whole session can be scripted
/// from a byte buffer. Domain errors are printed and the menu comes back;
/// only I/O failures end the session early. End of input behaves like `0`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, ledger: &mut Ledger, processor: &mut Processor) -> Result<(), AppError> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                break;
            };
            let choice = choice.trim();

            if choice == EXIT_KEY {
                break;
            }
            match ActionKind::from_menu_key(choice) {
                Some(kind) => {
                    if !self.run_action(kind, ledger, processor)? {
                        break;
                    }
                }
                None => writeln!(self.output, "That's not a valid option. Please try again.")?,
            }
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        for kind in ActionKind::ALL {
            writeln!(self.output, "{}. {}", kind.menu_key(), kind.label())?;
        }
        writeln!(self.output, "{EXIT_KEY}. Exit")
    }

    /// Collects the fields for `kind` and runs it. Returns `false` if the
    /// input ran out part way through.
    fn run_action(
        &mut self,
        kind: ActionKind,
        ledger: &mut Ledger,
        processor: &mut Processor,
    ) -> Result<bool, AppError> {
        let mut request = ActionRequest::default();
        for &(field, label) in prompts(kind) {
            let Some(value) = self.prompt(label)? else {
                writeln!(self.output)?;
                return Ok(false);
            };
            match field {
                Field::Account => request.account = value,
                Field::Secondary => request.secondary = value,
                Field::Amount => request.amount = value,
            }
        }

        let result = Action::parse(kind, &request)
            .map_err(BankError::from)
            .and_then(|action| processor.process(ledger, action));
        match result {
            Ok(outcome) => writeln!(self.output, "{outcome}")?,
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(true)
    }

    /// `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
