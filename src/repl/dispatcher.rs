//! Command dispatch and result rendering.
//!
//! Maps parsed commands onto AddressBook/Record operations and turns every
//! outcome, including core errors, into one-line user-facing text. The core
//! itself never prints or logs.

use super::command::Command;
use crate::book::AddressBook;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// What the caller should do after a command has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and keep reading commands
    Reply(String),
    /// Print the text and terminate the session
    Exit(String),
}

const HELP: &str = "\
Commands:
  hello                                  greeting
  add <name> <phone>                     add a contact or another phone
  change <name> <old_phone> <new_phone>  replace a phone
  phone <name>                           show a contact
  all                                    list all contacts
  add-birthday <name> <DD.MM.YYYY>       set a birthday
  show-birthday <name>                   show a birthday
  birthdays                              upcoming birthdays
  help                                   this list
  close | exit                           quit";

/// Execute one command against the book.
///
/// `today` is the dispatcher's clock read, passed down so the birthday query
/// stays a pure function; `window_days` comes from configuration.
pub fn execute(
    book: &mut AddressBook,
    command: Command,
    today: NaiveDate,
    window_days: i64,
) -> Outcome {
    debug!(?command, "dispatching");

    let result = match command {
        Command::Hello => return Outcome::Reply("How can I help you?".to_string()),
        Command::Help => return Outcome::Reply(HELP.to_string()),
        Command::Exit => return Outcome::Exit("Good bye!".to_string()),

        Command::Add { name, phone } => add(book, &name, &phone),
        Command::Change {
            name,
            old_phone,
            new_phone,
        } => change(book, &name, &old_phone, &new_phone),
        Command::Phone { name } => phone(book, &name),
        Command::All => Ok(all(book)),
        Command::AddBirthday { name, date } => add_birthday(book, &name, &date),
        Command::ShowBirthday { name } => show_birthday(book, &name),
        Command::Birthdays => Ok(birthdays(book, today, window_days)),
    };

    match result {
        Ok(reply) => Outcome::Reply(reply),
        Err(err) => {
            debug!(%err, "command failed");
            Outcome::Reply(err.to_string())
        }
    }
}

/// `add`: create-or-fetch the record and append the phone.
fn add(book: &mut AddressBook, name: &str, raw_phone: &str) -> BookResult<String> {
    match book.find_mut(name) {
        Some(record) => {
            record.add_phone(raw_phone)?;
            Ok(format!("Phone added to {}.", name))
        }
        None => {
            let mut record = Record::new(name)?;
            record.add_phone(raw_phone)?;
            book.add_record(record);
            Ok("Contact added.".to_string())
        }
    }
}

fn change(book: &mut AddressBook, name: &str, old_phone: &str, new_phone: &str) -> BookResult<String> {
    let record = book
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old_phone, new_phone)?;
    Ok("Contact updated.".to_string())
}

fn phone(book: &AddressBook, name: &str) -> BookResult<String> {
    let record = book
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    Ok(record.to_string())
}

fn all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts stored.".to_string();
    }
    book.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn add_birthday(book: &mut AddressBook, name: &str, raw_date: &str) -> BookResult<String> {
    book.add_birthday(name, raw_date)?;
    Ok("Birthday added.".to_string())
}

fn show_birthday(book: &AddressBook, name: &str) -> BookResult<String> {
    Ok(book.show_birthday(name)?.to_string())
}

fn birthdays(book: &AddressBook, today: NaiveDate, window_days: i64) -> String {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }
    upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
