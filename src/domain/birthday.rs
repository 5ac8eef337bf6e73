//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual pattern a birthday must match before date parsing.
///
/// Chrono's `%d.%m.%Y` accepts single-digit days and months, so the shape
/// is pinned down separately: two-digit day, two-digit month, four-digit
/// year, dot-separated.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date shape regex"));

/// Date format used for parsing and rendering birthdays.
const DATE_FORMAT: &str = "%d.%m.%Y";

/// A type-safe wrapper for contact birthdays.
///
/// A birthday is a naive calendar date parsed from the fixed `DD.MM.YYYY`
/// pattern. Construction fails unless the input both matches the pattern and
/// represents a real Gregorian date, so every stored birthday is valid.
///
/// # Example
///
/// ```
/// use contact_register::domain::Birthday;
///
/// let birthday = Birthday::new("24.08.1991").unwrap();
/// assert_eq!(birthday.to_string(), "24.08.1991");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Create a new Birthday from a `DD.MM.YYYY` string.
    ///
    /// # Validation Rules
    ///
    /// - Must match `DD.MM.YYYY` exactly (two-digit day and month,
    ///   four-digit year, dot-separated)
    /// - Must represent a real calendar date (`29.02.2024` is accepted,
    ///   `29.02.2023` is not)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is malformed
    /// or not a real date.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();

        if !DATE_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        let date = NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(raw))?;

        Ok(Self(date))
    }

    /// Get the underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// This birthday's occurrence in the given year.
    ///
    /// A `29.02` birthday is observed on Feb 28 in common years.
    pub fn occurrence_in_year(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.0.month(), self.0.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
        })
    }
}

// Serde support - serialize as DD.MM.YYYY string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
