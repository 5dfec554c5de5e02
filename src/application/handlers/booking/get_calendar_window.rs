//! GetCalendarWindowHandler - Per-day markers for the visible month grid.

use std::sync::Arc;

use crate::domain::booking::{occurrences_in_window, Booking, BookingError, DayOccurrence};
use crate::domain::calendar::{BookingInterval, CalendarDate};
use crate::domain::foundation::SessionContext;
use crate::ports::BookingRepository;

#[derive(Debug, Clone, Copy)]
pub struct GetCalendarWindowQuery {
    /// Visible days, half-open like a booking.
    pub window: BookingInterval,
}

/// Snapshot of the bookings touching a window.
///
/// Occurrences borrow from the snapshot and are expanded on demand.
#[derive(Debug, Clone)]
pub struct CalendarWindow {
    pub window: BookingInterval,
    pub bookings: Vec<Booking>,
}

impl CalendarWindow {
    /// One marker per booking per visible day, booking by booking.
    pub fn occurrences(&self) -> impl Iterator<Item = DayOccurrence<'_>> + '_ {
        occurrences_in_window(&self.bookings, self.window)
    }

    /// Markers drawn on a single cell.
    pub fn markers_on(&self, day: CalendarDate) -> Vec<DayOccurrence<'_>> {
        self.occurrences().filter(|o| o.day == day).collect()
    }
}

pub struct GetCalendarWindowHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl GetCalendarWindowHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        _ctx: &SessionContext,
        query: GetCalendarWindowQuery,
    ) -> Result<CalendarWindow, BookingError> {
        let bookings = self
            .bookings
            .list()
            .await?
            .into_iter()
            .filter(|b| b.interval.overlaps(&query.window))
            .collect();

        Ok(CalendarWindow {
            window: query.window,
            bookings,
        })
    }
}
