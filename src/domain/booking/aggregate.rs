//! Booking aggregate.
//!
//! A booking occupies the half-open range `[start, end)`. The record store
//! owns bookings; the application works on snapshots read through it.

use serde::{Deserialize, Serialize};

use crate::domain::calendar::{BookingInterval, CalendarDate};
use crate::domain::foundation::BookingId;

use super::{expand, BookingDraft, BookingError, Occurrences};

/// Booking aggregate.
///
/// # Invariants
///
/// - `label` is non-blank
/// - `interval` covers at least one day (guaranteed by `BookingInterval`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,

    /// Display name; may name several people.
    pub label: String,

    #[serde(flatten)]
    pub interval: BookingInterval,

    pub notes: Option<String>,

    /// Display name (or id) of whoever created the entry.
    pub created_by: Option<String>,

    /// An administrative block rather than a guest stay.
    pub is_blocked: bool,
}

impl Booking {
    /// Creates a booking from a submitted draft.
    pub fn create(draft: &BookingDraft, created_by: impl Into<String>) -> Result<Self, BookingError> {
        let label = draft.resolved_label()?;
        let interval = draft.interval()?;
        Ok(Self {
            id: BookingId::new(),
            label,
            interval,
            notes: draft.resolved_notes(),
            created_by: Some(created_by.into()),
            is_blocked: draft.is_blocked,
        })
    }

    /// Rebuilds a booking from already-validated stored parts.
    pub fn restore(
        id: BookingId,
        label: impl Into<String>,
        interval: BookingInterval,
        notes: Option<String>,
        created_by: Option<String>,
        is_blocked: bool,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            interval,
            notes,
            created_by,
            is_blocked,
        }
    }

    /// Replaces dates, label, notes and the blocked flag from an edit draft.
    ///
    /// Nothing changes if the draft is invalid.
    pub fn apply_edit(&mut self, draft: &BookingDraft) -> Result<(), BookingError> {
        let label = draft.resolved_label()?;
        let interval = draft.interval()?;
        self.label = label;
        self.interval = interval;
        self.notes = draft.resolved_notes();
        self.is_blocked = draft.is_blocked;
        Ok(())
    }

    pub fn start(&self) -> CalendarDate {
        self.interval.start()
    }

    /// Exclusive end, as stored.
    pub fn end(&self) -> CalendarDate {
        self.interval.end()
    }

    pub fn contains_day(&self, day: CalendarDate) -> bool {
        self.interval.contains_day(day)
    }

    /// Per-day occurrences for calendar rendering.
    pub fn occurrences(&self) -> Occurrences<'_> {
        expand(self)
    }
}
