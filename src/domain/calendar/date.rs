//! Calendar day value object.
//!
//! A `CalendarDate` is a day with no time component. Its wire and storage
//! form is the zero-padded `YYYY-MM-DD` string, which sorts the same way as
//! the dates themselves.

use chrono::{Datelike, Days as ChronoDays, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const FIELD: &str = "date";

/// A calendar day between 0001-01-01 and 9999-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// - `OutOfRange` if the year is outside 1..=9999
    /// - `InvalidFormat` if the day does not exist (e.g. February 30)
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(ValidationError::out_of_range(
                "year",
                Self::MIN_YEAR as i64,
                Self::MAX_YEAR as i64,
                year as i64,
            ));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    FIELD,
                    format!("{:04}-{:02}-{:02} is not a calendar day", year, month, day),
                )
            })
    }

    /// Wraps a chrono date, checking the supported year range.
    pub fn from_naive(date: NaiveDate) -> Result<Self, ValidationError> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }

    /// Parses a strict, zero-padded `YYYY-MM-DD` string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let bytes = input.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

        if !well_formed {
            return Err(ValidationError::invalid_format(
                FIELD,
                format!("expected YYYY-MM-DD, got '{}'", input),
            ));
        }

        // All slices are ASCII digits at this point.
        let number = |range: std::ops::Range<usize>| -> u32 {
            input[range]
                .bytes()
                .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
        };

        Self::from_ymd(number(0..4) as i32, number(5..7), number(8..10))
    }

    /// Today in the local time zone.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Returns the inner chrono date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Shifts the date by `days`; negative values move backwards.
    ///
    /// Returns `None` when the result falls outside 0001-01-01..=9999-12-31.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let magnitude = ChronoDays::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        }?;
        Self::from_naive(shifted).ok()
    }

    /// The following calendar day, `None` after 9999-12-31.
    pub fn next_day(self) -> Option<Self> {
        self.checked_add_days(1)
    }

    /// The preceding calendar day, `None` before 0001-01-01.
    pub fn previous_day(self) -> Option<Self> {
        self.checked_add_days(-1)
    }

    /// Whole days from `self` to `later` (negative if `later` is earlier).
    pub fn days_until(self, later: CalendarDate) -> i64 {
        later.0.signed_duration_since(self.0).num_days()
    }

    /// US display form, `MM/DD/YYYY`.
    pub fn to_display(&self) -> String {
        format!("{:02}/{:02}/{:04}", self.0.month(), self.0.day(), self.0.year())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
