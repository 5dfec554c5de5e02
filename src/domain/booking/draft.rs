//! Booking drafts: the form state behind the "Book" and admin entry dialogs.
//!
//! A draft always carries the **inclusive** end the picker shows. It is
//! turned into a stored interval exactly once, in [`BookingDraft::interval`].

use crate::domain::calendar::{BookingInterval, CalendarDate, InvalidRangeError};

use super::{Booking, BookingError};

const BLOCKED_PREFIX: &str = "Blocked: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    /// Free-text label; wins over `people` when non-blank.
    pub label: String,
    /// Names picked from the member list.
    pub people: Vec<String>,
    pub start: CalendarDate,
    pub end_inclusive: CalendarDate,
    pub notes: String,
    pub is_blocked: bool,
}

impl BookingDraft {
    /// A one-day draft starting on `day`.
    pub fn starting_on(day: CalendarDate) -> Self {
        Self {
            label: String::new(),
            people: Vec::new(),
            start: day,
            end_inclusive: day,
            notes: String::new(),
            is_blocked: false,
        }
    }

    /// A one-day draft for today, the dialog default.
    pub fn for_today() -> Self {
        Self::starting_on(CalendarDate::today())
    }

    /// Prefills the edit dialog from a stored booking.
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            label: booking.label.clone(),
            people: Vec::new(),
            start: booking.interval.start(),
            end_inclusive: booking.interval.inclusive_end(),
            notes: booking.notes.clone().unwrap_or_default(),
            is_blocked: booking.is_blocked,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_people<I, S>(mut self, people: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.people = people.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the last occupied day (inclusive).
    pub fn ending_on(mut self, end_inclusive: CalendarDate) -> Self {
        self.end_inclusive = end_inclusive;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn blocked(mut self, is_blocked: bool) -> Self {
        self.is_blocked = is_blocked;
        self
    }

    /// The label that will be stored.
    ///
    /// Uses the trimmed label, or else the named people joined with ", ".
    /// Blocked entries carry a "Blocked: " prefix.
    pub fn resolved_label(&self) -> Result<String, BookingError> {
        let label = self.label.trim();
        let label = if label.is_empty() {
            self.people
                .iter()
                .map(|p| p.trim())
                .filter(|p| !p.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            label.to_string()
        };

        if label.is_empty() {
            return Err(BookingError::MissingLabel);
        }

        Ok(if self.is_blocked {
            ensure_blocked_prefix(&label)
        } else {
            label
        })
    }

    /// The stored interval, converting the inclusive end.
    pub fn interval(&self) -> Result<BookingInterval, InvalidRangeError> {
        BookingInterval::from_inclusive(self.start, self.end_inclusive)
    }

    /// Trimmed notes, `None` when blank.
    pub fn resolved_notes(&self) -> Option<String> {
        let notes = self.notes.trim();
        (!notes.is_empty()).then(|| notes.to_string())
    }
}

/// Prefixes "Blocked: " unless the label already starts with "blocked".
pub fn ensure_blocked_prefix(label: &str) -> String {
    let label = label.trim();
    if label.is_empty() || label.to_lowercase().starts_with("blocked") {
        label.to_string()
    } else {
        format!("{}{}", BLOCKED_PREFIX, label)
    }
}
