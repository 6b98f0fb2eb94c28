use std::io::{self, BufRead, Write};

use crate::{
    common::{
        action::{Action, ActionKind, ActionRequest},
        error::{AppError, BankError},
    },
    domain::ledger::Ledger,
    worker::processor::Processor,
};

/// Caption shown on each operation's button.
pub fn button_label(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::CreateAccount => "Create",
        ActionKind::Deposit => "Deposit",
        ActionKind::Withdraw => "Withdraw",
        ActionKind::Transfer => "Transfer",
        ActionKind::TopUpPhone => "Top-up",
        ActionKind::DeleteAccount => "Delete",
    }
}

/// Captions of the three entry fields, in display order.
pub const FIELD_LABELS: [&str; 3] = ["Account Number:", "Name/Phone/To Acc:", "Amount:"];

/// The form model: three entry fields, one button per operation and a
/// status label. The terminal session below and the `gui` binary both
/// drive it.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub account: String,
    /// Name, phone number or destination account, depending on the button.
    pub secondary: String,
    pub amount: String,
    status: String,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// The entry fields in the same order as [`FIELD_LABELS`].
    pub fn fields_mut(&mut self) -> [&mut String; 3] {
        [&mut self.account, &mut self.secondary, &mut self.amount]
    }

    pub fn request(&self) -> ActionRequest {
        ActionRequest {
            account: self.account.clone(),
            secondary: self.secondary.clone(),
            amount: self.amount.clone(),
        }
    }

    /// Runs the button's operation against the current field values and
    /// puts the outcome or the error text in the status label.
    pub fn press(&mut self, button: ActionKind, ledger: &mut Ledger, processor: &mut Processor) -> &str {
        let result = Action::parse(button, &self.request())
            .map_err(BankError::from)
            .and_then(|action| processor.process(ledger, action));
        self.status = match result {
            Ok(outcome) => outcome.to_string(),
            Err(err) => err.to_string(),
        };
        &self.status
    }

    /// Empties the entry fields; the status label keeps its text.
    pub fn clear(&mut self) {
        self.account.clear();
        self.secondary.clear();
        self.amount.clear();
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let values = [&self.account, &self.secondary, &self.amount];
        for (label, value) in FIELD_LABELS.iter().zip(values) {
            writeln!(out, "{label:<20}{value}")?;
        }
        let buttons: Vec<String> = ActionKind::ALL
            .iter()
            .map(|&kind| format!("[{}]", button_label(kind)))
            .collect();
        writeln!(out, "{}", buttons.join(" "))?;
        writeln!(out, "Status: {}", self.status)
    }
}

/// Line-driven terminal rendering of [`Form`].
///
/// Commands: `account <v>`, `secondary <v>` (aliases `name`, `phone`, `to`),
/// `amount <v>`, `press <button>` or the bare button name, `clear`, `show`,
/// `quit`. The form is redrawn after every command.
pub struct FormSession<R, W> {
    input: R,
    output: W,
    form: Form,
}

impl<R: BufRead, W: Write> FormSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            form: Form::new(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, ledger: &mut Ledger, processor: &mut Processor) -> Result<(), AppError> {
        self.form.render(&mut self.output)?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }
            let line = line.trim();
            let (command, value) = line
                .split_once(char::is_whitespace)
                .map(|(c, v)| (c, v.trim()))
                .unwrap_or((line, ""));

            match command.to_ascii_lowercase().as_str() {
                "quit" | "exit" => break,
                "" | "show" => {}
                "account" => self.form.account = value.to_string(),
                "secondary" | "name" | "phone" | "to" => self.form.secondary = value.to_string(),
                "amount" => self.form.amount = value.to_string(),
                "clear" => self.form.clear(),
                "press" => self.press(value, ledger, processor),
                other => self.press(other, ledger, processor),
            }
            self.form.render(&mut self.output)?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn press(&mut self, button: &str, ledger: &mut Ledger, processor: &mut Processor) {
        match button.parse::<ActionKind>() {
            Ok(kind) => {
                self.form.press(kind, ledger, processor);
            }
            Err(_) => self.form.status = format!("Unknown command: {button}"),
        }
    }
}
