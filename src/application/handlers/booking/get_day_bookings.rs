//! GetDayBookingsHandler - Who is booked on a day.
//!
//! Backs the day dialog opened by clicking a calendar cell.

use std::sync::Arc;

use crate::domain::booking::{bookings_for_day, BookingError};
use crate::domain::calendar::CalendarDate;
use crate::domain::foundation::SessionContext;
use crate::ports::BookingRepository;

use super::BookingView;

#[derive(Debug, Clone, Copy)]
pub struct GetDayBookingsQuery {
    pub day: CalendarDate,
}

pub struct GetDayBookingsHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl GetDayBookingsHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Bookings covering the day, sorted by label. Empty when nobody is there.
    pub async fn handle(
        &self,
        _ctx: &SessionContext,
        query: GetDayBookingsQuery,
    ) -> Result<Vec<BookingView>, BookingError> {
        let snapshot = self.bookings.list().await?;
        Ok(bookings_for_day(&snapshot, query.day)
            .into_iter()
            .map(BookingView::from)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingRepository;
    use crate::application::handlers::testing::{date, member_ctx};
    use crate::domain::booking::Booking;
    use crate::domain::calendar::BookingInterval;
    use crate::domain::foundation::BookingId;

    fn booking(label: &str, start: &str, end: &str) -> Booking {
        Booking::restore(
            BookingId::new(),
            label,
            BookingInterval::new(date(start), date(end)).unwrap(),
            None,
            None,
            false,
        )
    }

    fn handler() -> GetDayBookingsHandler {
        GetDayBookingsHandler::new(Arc::new(InMemoryBookingRepository::with_bookings(vec![
            booking("Zack", "2026-02-07", "2026-02-10"),
            booking("Family", "2026-02-06", "2026-02-09"),
        ])))
    }

    #[tokio::test]
    async fn returns_sorted_views() {
        let views = handler()
            .handle(&member_ctx(), GetDayBookingsQuery { day: date("2026-02-08") })
            .await
            .unwrap();

        let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Family", "Zack"]);
        assert_eq!(views[0].end_inclusive, date("2026-02-08"));
    }

    #[tokio::test]
    async fn empty_day_is_empty() {
        let views = handler()
            .handle(&member_ctx(), GetDayBookingsQuery { day: date("2026-03-15") })
            .await
            .unwrap();
        assert!(views.is_empty());
    }

    #[tokio::test]
    async fn sees_bookings_added_after_construction() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = GetDayBookingsHandler::new(repo.clone());
        let day = date("2026-01-17");

        assert!(handler
            .handle(&member_ctx(), GetDayBookingsQuery { day })
            .await
            .unwrap()
            .is_empty());

        repo.insert(&booking("Zack", "2026-01-16", "2026-01-19")).await.unwrap();

        let views = handler
            .handle(&member_ctx(), GetDayBookingsQuery { day })
            .await
            .unwrap();
        assert_eq!(views.len(), 1);
    }
}
