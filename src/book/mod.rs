//! AddressBook: the keyed collection of contact records.
//!
//! Records are stored under their name's string value. The map is ordered by
//! key so iteration (and therefore the `all` listing) is deterministic.

pub mod upcoming;

pub use upcoming::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};

use crate::domain::Birthday;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// In-memory register of contacts, keyed by name.
///
/// Created empty at process start and never persisted. Single-threaded use
/// is assumed; a multi-threaded host must wrap the whole book in one lock so
/// lookup+mutate operations like [`AddressBook::add_birthday`] stay atomic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Insert a record under its name, overwriting any existing entry.
    ///
    /// Overwriting is silent (no merge); the replaced record is returned so
    /// the caller can tell the two cases apart.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        self.records
            .insert(record.name().as_str().to_string(), record)
    }

    /// Exact-key lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-key lookup with mutable access.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the entry for `name` if present.
    ///
    /// Absence is not an error: deleting a missing name is a no-op and
    /// returns `None`.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(name)
    }

    /// Parse `raw_date` and set it as the birthday of the named contact.
    ///
    /// # Errors
    ///
    /// - `BookError::ContactNotFound` if the name is absent (checked first;
    ///   no record is created)
    /// - `BookError::Validation` if `raw_date` is not a valid `DD.MM.YYYY`
    ///   date
    pub fn add_birthday(&mut self, name: &str, raw_date: &str) -> BookResult<()> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        let birthday = Birthday::new(raw_date)?;
        record.set_birthday(birthday);
        Ok(())
    }

    /// The stored birthday of the named contact.
    ///
    /// # Errors
    ///
    /// - `BookError::ContactNotFound` if the name is absent
    /// - `BookError::NoBirthday` if the contact has no birthday set
    pub fn show_birthday(&self, name: &str) -> BookResult<&Birthday> {
        let record = self
            .find(name)
            .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;

        record
            .birthday()
            .ok_or_else(|| BookError::NoBirthday(name.to_string()))
    }

    /// Contacts whose birthday falls within the next 7 days.
    ///
    /// Entries carry the congratulation date: this year's occurrence of the
    /// birthday, shifted off weekends to the following Monday. `today` is an
    /// explicit parameter so the query is a pure function of the contact set
    /// and the date.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Like [`AddressBook::upcoming_birthdays`] with a caller-chosen window.
    ///
    /// The window includes today and excludes day `window_days`. Results are
    /// sorted by congratulation date, then name.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        let mut entries: Vec<UpcomingBirthday> = self
            .records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let date = upcoming::congratulation_date(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                })
            })
            .collect();

        entries.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        entries
    }

    /// Upcoming birthdays formatted as `"<name>: <YYYY.MM.DD>"` lines.
    pub fn birthdays(&self, today: NaiveDate) -> Vec<String> {
        self.upcoming_birthdays(today)
            .iter()
            .map(ToString::to_string)
            .collect()
    }
}
