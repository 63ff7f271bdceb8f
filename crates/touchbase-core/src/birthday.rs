//! Birthday parsing and proximity.
//!
//! Birthdays are stored as `"MM-DD"` or `"YYYY-MM-DD"` strings; the string
//! length selects the parse format. A year, when present, is kept only for
//! display. Recurrence always uses month/day in the year of "today".

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EngineError;

/// Returned when a contact has no birthday: far enough out that it never
/// lands in the imminent window.
pub const NO_BIRTHDAY_SENTINEL: i64 = 999;

/// A recurring month/day anniversary, with an optional birth year.
///
/// Serializes to the exact wire strings it parses from: `"MM-DD"` without a
/// year, `"YYYY-MM-DD"` with one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Birthday {
    month: u32,
    day: u32,
    year: Option<i32>,
}

impl Birthday {
    /// Create from a month (1-12) and day valid for that month.
    ///
    /// Feb 29 is accepted; see [`Birthday::on_year`] for how it resolves in
    /// non-leap years.
    pub fn new(month: u32, day: u32) -> Result<Self, EngineError> {
        // Validate against a leap year so Feb 29 passes.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(EngineError::InvalidBirthday {
                value: format!("{month:02}-{day:02}"),
            });
        }
        Ok(Self {
            month,
            day,
            year: None,
        })
    }

    /// Parse `"MM-DD"` (5 chars) or `"YYYY-MM-DD"` (10 chars), zero-padded.
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let invalid = || EngineError::InvalidBirthday {
            value: s.to_string(),
        };

        let (year, month_day) = match s.len() {
            5 => (None, s),
            10 => {
                let year: i32 = s
                    .get(..4)
                    .and_then(|y| y.parse().ok())
                    .ok_or_else(invalid)?;
                if s.as_bytes()[4] != b'-' {
                    return Err(invalid());
                }
                (Some(year), s.get(5..).ok_or_else(invalid)?)
            }
            _ => return Err(invalid()),
        };

        let (month, day) = month_day.split_once('-').ok_or_else(invalid)?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        let day: u32 = day.parse().map_err(|_| invalid())?;

        let mut birthday = Self::new(month, day).map_err(|_| invalid())?;
        birthday.year = year;
        Ok(birthday)
    }

    /// Month, 1-12.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Day of month, 1-31.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Birth year, if the stored string carried one. Ignored by recurrence.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// The date this birthday falls on in `year`.
    ///
    /// Feb 29 in a non-leap year resolves to Mar 1.
    pub fn on_year(&self, year: i32) -> NaiveDate {
        match NaiveDate::from_ymd_opt(year, self.month, self.day) {
            Some(date) => date,
            None => NaiveDate::from_ymd_opt(year, 3, 1).expect("Mar 1 exists in every year"),
        }
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.year {
            Some(year) => write!(f, "{:04}-{:02}-{:02}", year, self.month, self.day),
            None => write!(f, "{:02}-{:02}", self.month, self.day),
        }
    }
}

impl FromStr for Birthday {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

/// Days until the next occurrence of `birthday`, counted in whole calendar
/// days from the start of `today`'s day.
///
/// Returns [`NO_BIRTHDAY_SENTINEL`] when `birthday` is `None`. A birthday
/// that already passed this year rolls forward by a fixed 365 days, so a
/// roll that crosses a leap day lands one day short of the actual
/// anniversary. Callers treat the result as approximate at that horizon.
pub fn days_until_birthday(birthday: Option<&Birthday>, today: DateTime<Utc>) -> i64 {
    let Some(birthday) = birthday else {
        return NO_BIRTHDAY_SENTINEL;
    };

    let today = today.date_naive();
    let mut next = birthday.on_year(today.year());
    if next < today {
        // Fixed roll, not calendar-aware.
        next = next + Duration::days(365);
    }
    (next - today).num_days()
}
