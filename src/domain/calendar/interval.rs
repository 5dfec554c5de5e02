//! Half-open booking intervals.
//!
//! Storage keeps the **exclusive** end (the day after the last occupied
//! day). Date pickers show the **inclusive** end. Conversion between the two
//! happens through [`to_inclusive_end`] and [`to_exclusive_end`] only.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FusedIterator;
use thiserror::Error;

use super::CalendarDate;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Raised when an interval cannot be built from the given days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidRangeError {
    /// The interval would not cover at least one day.
    #[error("end date {end} must be after start date {start}")]
    EndNotAfterStart {
        start: CalendarDate,
        end: CalendarDate,
    },

    /// The picked last day has no storable exclusive end.
    #[error("last day {last_day} is past the latest bookable day 9999-12-30")]
    PastLatestDay { last_day: CalendarDate },
}

impl From<InvalidRangeError> for DomainError {
    fn from(err: InvalidRangeError) -> Self {
        let error = DomainError::new(ErrorCode::InvalidRange, err.to_string());
        match err {
            InvalidRangeError::EndNotAfterStart { start, end } => error
                .with_detail("start", start.to_string())
                .with_detail("end", end.to_string()),
            InvalidRangeError::PastLatestDay { last_day } => {
                error.with_detail("last_day", last_day.to_string())
            }
        }
    }
}

/// The last occupied day for a stored exclusive end.
///
/// `None` for 0001-01-01, which cannot end an interval.
pub fn to_inclusive_end(end: CalendarDate) -> Option<CalendarDate> {
    end.previous_day()
}

/// The stored exclusive end for a picker's inclusive end.
///
/// `None` for 9999-12-31, whose successor is not representable.
pub fn to_exclusive_end(inclusive_end: CalendarDate) -> Option<CalendarDate> {
    inclusive_end.next_day()
}

/// A date range `[start, end)` covering at least one day.
///
/// # Invariants
///
/// - `start < end`, enforced by every constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval", into = "RawInterval")]
pub struct BookingInterval {
    start: CalendarDate,
    end: CalendarDate,
}

impl BookingInterval {
    /// Creates an interval from a start and an exclusive end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, InvalidRangeError> {
        if end <= start {
            return Err(InvalidRangeError::EndNotAfterStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval from a picker's inclusive end.
    pub fn from_inclusive(
        start: CalendarDate,
        inclusive_end: CalendarDate,
    ) -> Result<Self, InvalidRangeError> {
        let end = to_exclusive_end(inclusive_end).ok_or(InvalidRangeError::PastLatestDay {
            last_day: inclusive_end,
        })?;
        Self::new(start, end)
    }

    /// A one-day interval.
    pub fn single_day(day: CalendarDate) -> Result<Self, InvalidRangeError> {
        Self::from_inclusive(day, day)
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// The exclusive end, as stored.
    pub fn end(&self) -> CalendarDate {
        self.end
    }

    /// The last occupied day, as shown in pickers.
    pub fn inclusive_end(&self) -> CalendarDate {
        // end > start, so the predecessor always exists.
        to_inclusive_end(self.end).unwrap_or(self.start)
    }

    /// Number of days covered. Always at least 1.
    pub fn num_days(&self) -> u64 {
        self.start.days_until(self.end) as u64
    }

    /// True iff `start <= day < end`.
    pub fn contains_day(&self, day: CalendarDate) -> bool {
        self.start <= day && day < self.end
    }

    /// True if the two intervals share at least one day.
    pub fn overlaps(&self, other: &BookingInterval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The days both intervals cover, if any.
    pub fn intersection(&self, other: &BookingInterval) -> Option<BookingInterval> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        BookingInterval::new(start, end).ok()
    }

    /// Iterates the covered days in order. Each call starts over.
    pub fn days(&self) -> Days {
        Days {
            next: self.start,
            end: self.end,
        }
    }
}

impl fmt::Display for BookingInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[derive(Serialize, Deserialize)]
struct RawInterval {
    start: CalendarDate,
    end: CalendarDate,
}

impl TryFrom<RawInterval> for BookingInterval {
    type Error = InvalidRangeError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        BookingInterval::new(raw.start, raw.end)
    }
}

impl From<BookingInterval> for RawInterval {
    fn from(interval: BookingInterval) -> Self {
        RawInterval {
            start: interval.start,
            end: interval.end,
        }
    }
}

/// Lazy iterator over the days of a [`BookingInterval`].
#[derive(Debug, Clone)]
pub struct Days {
    next: CalendarDate,
    end: CalendarDate,
}

impl Iterator for Days {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let day = self.next;
        self.next = day.next_day().unwrap_or(self.end);
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.days_until(self.end).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}
