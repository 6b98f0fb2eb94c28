use std::{
    ffi::OsString,
    fs::File,
    io::{stdin, stdout, BufWriter, Read, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::{console::Console, form::FormSession, reader, writer},
    observability,
    worker::processor::Processor,
};

#[derive(Parser, Debug)]
#[command(name = "bank_sim", version, about = "In-memory banking simulator")]
pub struct Cli {
    /// Log filter directive such as `info` or `bank_sim=debug`; overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Front end to run. Defaults to the text menu.
    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Numbered text menu.
    Menu,
    /// Form with account, name/phone/to-account and amount fields.
    Form,
    /// Replay a CSV of actions (`action,account,secondary,amount`) and print a report.
    Script {
        path: PathBuf,
        #[arg(long, value_enum, default_value_t = Report::Accounts)]
        report: Report,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    Accounts,
    Phones,
}

pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    observability::init(cli.log.as_deref());

    // One ledger per run, lent to whichever front end was picked.
    let mut ledger = Ledger::new();
    let mut processor = Processor::new();

    match cli.mode.unwrap_or(Mode::Menu) {
        Mode::Menu => {
            Console::new(stdin().lock(), stdout().lock()).run(&mut ledger, &mut processor)?;
        }
        Mode::Form => {
            FormSession::new(stdin().lock(), stdout().lock()).run(&mut ledger, &mut processor)?;
        }
        Mode::Script { path, report } => {
            let file = File::open(&path)?;
            run_script(file, &mut ledger, &mut processor)?;

            let stdout = stdout();
            let writer = BufWriter::new(stdout.lock());
            write_report(writer, &ledger, report)?;
        }
    }

    tracing::info!(
        applied = processor.applied(),
        rejected = processor.rejected(),
        "session finished"
    );
    Ok(())
}

/// Runs every row of an action script against `ledger`.
///
/// Rejected actions are logged and skipped, the same way the menu reports an
/// error and carries on. A row that cannot be read at all stops the run.
pub fn run_script<R: Read>(
    input: R,
    ledger: &mut Ledger,
    processor: &mut Processor,
) -> Result<(), AppError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    for (i, row) in reader::read_actions(&mut rdr).enumerate() {
        match row.map_err(AppError::Parse)? {
            Ok(action) => {
                // Rejections are logged and counted by the processor; the
                // script moves on to the next row like the menu does.
                if let Err(err) = processor.process(ledger, action) {
                    tracing::debug!(row = i + 1, kind = ?err.kind(), "skipping rejected row");
                }
            }
            Err(err) => tracing::warn!(row = i + 1, error = %err, "script row rejected"),
        }
    }
    Ok(())
}

pub fn write_report<W: Write>(writer: W, ledger: &Ledger, report: Report) -> Result<(), csv::Error> {
    match report {
        Report::Accounts => writer::write_accounts(writer, ledger.accounts()),
        Report::Phones => writer::write_phone_balances(writer, ledger.phone_balances()),
    }
}
