use crate::common::action::{Action, ActionKind, ActionRequest};
use crate::common::error::InputError;
use std::io::Read;

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the script headers. Columns an
/// action does not use may be left empty.
struct CsvRow {
    action: String,
    #[serde(default)]
    account: String,
    #[serde(default)]
    secondary: String,
    #[serde(default)]
    amount: String,
}

/// One script row after reading: either the action to run, or the reason the
/// row's fields were rejected before reaching the ledger.
pub type ScriptRow = Result<Action, InputError>;

/// Reads action rows from a CSV reader.
///
/// Supported headers: `action,account,secondary,amount`. The action name is
/// matched case-insensitively (see [`ActionKind`]'s `FromStr`). An unknown
/// action or an unreadable row is a hard error naming the row; an
/// amount that does not parse is a per-row [`InputError`] so the caller can
/// report it and carry on, like the interactive front ends do.
///
/// # Examples
///
/// ```
/// use bank_sim::io::reader::read_actions;
/// use bank_sim::common::action::Action;
/// use csv::ReaderBuilder;
///
/// let data = "action,account,secondary,amount\n\
/// create,A1,Alice,\n\
/// deposit,A1,,100\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let rows: Vec<_> = read_actions(&mut rdr).collect();
///
/// assert!(matches!(rows[0], Ok(Ok(Action::CreateAccount { .. }))));
/// assert!(matches!(rows[1], Ok(Ok(Action::Deposit { .. }))));
/// ```
pub fn read_actions<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<ScriptRow, String>> + '_ {
    rdr.deserialize::<CsvRow>().enumerate().map(|(i, res)| {
        let row = res.map_err(|e| format!("row {}: {e}", i + 1))?;
        let kind: ActionKind = row
            .action
            .parse()
            .map_err(|e| format!("row {}: {e}", i + 1))?;
        let request = ActionRequest {
            account: row.account,
            secondary: row.secondary,
            amount: row.amount,
        };
        Ok(Action::parse(kind, &request))
    })
}
