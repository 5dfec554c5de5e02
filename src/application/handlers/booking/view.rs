//! Read model for displaying a booking.

use serde::Serialize;

use crate::domain::booking::Booking;
use crate::domain::calendar::CalendarDate;
use crate::domain::foundation::BookingId;

/// A booking as shown to people: the last occupied day instead of the
/// stored exclusive end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingView {
    pub id: BookingId,
    pub label: String,
    pub start: CalendarDate,
    pub end_inclusive: CalendarDate,
    pub nights: u64,
    pub notes: Option<String>,
    pub created_by: Option<String>,
    pub is_blocked: bool,
}

impl From<&Booking> for BookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            label: booking.label.clone(),
            start: booking.start(),
            end_inclusive: booking.interval.inclusive_end(),
            nights: booking.interval.num_days(),
            notes: booking.notes.clone(),
            created_by: booking.created_by.clone(),
            is_blocked: booking.is_blocked,
        }
    }
}

impl BookingView {
    /// "01/16/2026 - 01/18/2026", or a single date for one-day entries.
    pub fn date_range_display(&self) -> String {
        if self.start == self.end_inclusive {
            self.start.to_display()
        } else {
            format!("{} - {}", self.start.to_display(), self.end_inclusive.to_display())
        }
    }
}
