use std::{collections::HashMap, io::Write};

use crate::{common::money::Money, domain::account::Account};

#[derive(serde::Serialize)]
/// Output row for the accounts report: `account,name,balance`.
struct AccountRow<'a> {
    account: &'a str,
    name: &'a str,
    balance: String,
}

#[derive(serde::Serialize)]
/// Output row for the phone report: `phone,balance`.
struct PhoneRow<'a> {
    phone: &'a str,
    balance: String,
}

/// Writes every account to a CSV writer.
///
/// The output always starts with the header row `account,name,balance`. Accounts are
/// sorted by account number so the report is deterministic. Balances use
/// exactly two decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_sim::io::writer::write_accounts;
/// use bank_sim::domain::ledger::Ledger;
///
/// let mut ledger = Ledger::new();
/// ledger.create_account("B1", "Bob").unwrap();
/// ledger.create_account("A1", "Alice").unwrap();
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, ledger.accounts()).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "account,name,balance\nA1,Alice,0.00\nB1,Bob,0.00\n");
/// ```
pub fn write_accounts<W: Write>(
    writer: W,
    accounts: &HashMap<String, Account>,
) -> Result<(), csv::Error> {
    // header written by hand so an empty ledger still gets one
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["account", "name", "balance"])?;

    let mut sorted: Vec<&Account> = accounts.values().collect();
    sorted.sort_unstable_by(|a, b| a.account_number.cmp(&b.account_number));

    for acc in sorted {
        wtr.serialize(AccountRow {
            account: &acc.account_number,
            name: &acc.name,
            balance: acc.balance().to_string_2dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes every phone balance to a CSV writer, sorted by phone number, with
/// the header `phone,balance`.
pub fn write_phone_balances<W: Write>(
    writer: W,
    phones: &HashMap<String, Money>,
) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(["phone", "balance"])?;

    let mut sorted: Vec<(&String, &Money)> = phones.iter().collect();
    sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

    for (phone, balance) in sorted {
        wtr.serialize(PhoneRow {
            phone,
            balance: balance.to_string_2dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
