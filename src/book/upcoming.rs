//! Upcoming-birthday query types and date-shifting rules.

use crate::domain::Birthday;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Serialize, Serializer};
use std::fmt;

/// Width of the standard upcoming-birthday window, in days.
///
/// The window includes today and excludes day 7.
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Date format used when rendering congratulation dates.
const OUTPUT_FORMAT: &str = "%Y.%m.%d";

/// One entry in the upcoming-birthday listing.
///
/// `date` is the congratulation date: the birthday's occurrence this year,
/// shifted to the following Monday when it lands on a weekend. It can
/// therefore fall outside the query window and, near year-end, in the next
/// year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// The contact's name
    pub name: String,

    /// The congratulation date (weekend-shifted occurrence)
    #[serde(serialize_with = "serialize_congratulation_date")]
    pub date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date rendered as `YYYY.MM.DD`.
    pub fn date_string(&self) -> String {
        self.date.format(OUTPUT_FORMAT).to_string()
    }
}

/// Serializer helper rendering the congratulation date as `YYYY.MM.DD`.
fn serialize_congratulation_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(OUTPUT_FORMAT).to_string())
}

// Display support - rendering for the `birthdays` command
impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.date.format(OUTPUT_FORMAT))
    }
}

/// Congratulation date for a birthday, if it falls inside the window.
///
/// Takes this year's occurrence of the birthday (Feb 29 observed on Feb 28
/// in common years), keeps it only when `0 <= occurrence - today <
/// window_days`, then shifts Saturday occurrences by two days and Sunday
/// occurrences by one so the result is always a weekday. The shift uses
/// calendar date addition, so an occurrence on the last Saturday of a month
/// (or the year) rolls into the next month (or year) correctly.
pub(crate) fn congratulation_date(
    birthday: &Birthday,
    today: NaiveDate,
    window_days: i64,
) -> Option<NaiveDate> {
    let occurrence = birthday.occurrence_in_year(today.year());

    let delta = (occurrence - today).num_days();
    if delta < 0 || delta >= window_days {
        return None;
    }

    Some(match occurrence.weekday() {
        Weekday::Sat => occurrence + Duration::days(2),
        Weekday::Sun => occurrence + Duration::days(1),
        _ => occurrence,
    })
}
