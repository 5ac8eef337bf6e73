//! Record model representing one contact in the register.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: an immutable name, an ordered list of phones, and an
/// optional birthday.
///
/// The name is fixed at construction time because it is the key under which
/// the record is stored. Phones keep insertion order and may repeat; the
/// birthday is a single slot with last-write-wins semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with an empty phone list and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// The stored phones, in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The stored birthday, if one has been set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// Order is preserved and duplicates are allowed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the value is not a valid
    /// 10-digit phone; the phone list is unchanged in that case.
    pub fn add_phone(&mut self, raw: impl Into<String>) -> Result<(), ValidationError> {
        let phone = Phone::new(raw)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first stored phone equal to `value`.
    ///
    /// Absence is not an error: removing a phone that isn't there is a no-op.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(idx) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(idx);
        }
    }

    /// Replace the first phone equal to `old_value` with `new_value`.
    ///
    /// The replacement keeps its position in the list. The operation is
    /// atomic: if `new_value` fails validation, the list is unchanged.
    ///
    /// # Errors
    ///
    /// - `BookError::PhoneNotFound` if no stored phone equals `old_value`
    /// - `BookError::Validation` if `new_value` is not a valid phone
    pub fn edit_phone(&mut self, old_value: &str, new_value: &str) -> BookResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p.as_str() == old_value)
            .ok_or_else(|| BookError::PhoneNotFound(old_value.to_string()))?;

        let replacement = Phone::new(new_value)?;
        self.phones[idx] = replacement;
        Ok(())
    }

    /// Find the first stored phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Set the birthday, replacing any existing one.
    ///
    /// Takes an already-validated [`Birthday`]; the fallible step is
    /// [`Birthday::new`].
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }
}

// Display support - rendering for the `phone` and `all` commands
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_new() {
        let record = Record::new("John").unwrap();
        assert_eq!(record.name().as_str(), "John");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_rejects_empty_name() {
        assert_eq!(Record::new(""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_preserves_order_and_duplicates() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();
        record.add_phone("5556667788").unwrap();
        record.add_phone("1112223344").unwrap();

        let values: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(values, ["1112223344", "5556667788", "1112223344"]);
    }

    #[test]
    fn test_add_phone_invalid_leaves_list_unchanged() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();

        assert!(record.add_phone("123").is_err());
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();
        record.add_phone("5556667788").unwrap();
        record.add_phone("1112223344").unwrap();

        record.remove_phone("1112223344");

        let values: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(values, ["5556667788", "1112223344"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();

        record.remove_phone("9999999999");
        record.remove_phone("9999999999"); // idempotent
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_in_place() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();
        record.add_phone("5556667788").unwrap();
        record.add_phone("1112223344").unwrap();

        record.edit_phone("1112223344", "9998887766").unwrap();

        let values: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(values, ["9998887766", "5556667788", "1112223344"]);
    }

    #[test]
    fn test_edit_phone_missing_old_value() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();

        let err = record.edit_phone("0000000000", "9998887766").unwrap_err();
        assert_eq!(err, BookError::PhoneNotFound("0000000000".to_string()));
    }

    #[test]
    fn test_edit_phone_invalid_new_value_is_atomic() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();

        let err = record.edit_phone("1112223344", "12345").unwrap_err();
        assert!(matches!(err, BookError::Validation(_)));

        let values: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
        assert_eq!(values, ["1112223344"]);
    }

    #[test]
    fn test_find_phone() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();

        assert_eq!(
            record.find_phone("1112223344").map(Phone::as_str),
            Some("1112223344")
        );
        assert!(record.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_set_birthday_last_write_wins() {
        let mut record = Record::new("John").unwrap();
        record.set_birthday(Birthday::new("01.01.1990").unwrap());
        record.set_birthday(Birthday::new("02.02.1992").unwrap());

        assert_eq!(record.birthday().unwrap().to_string(), "02.02.1992");
    }

    #[test]
    fn test_record_display() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();
        record.add_phone("5556667788").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1112223344; 5556667788"
        );
    }

    #[test]
    fn test_record_serialization_round_trip() {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1112223344").unwrap();
        record.set_birthday(Birthday::new("24.08.1991").unwrap());

        let json = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
