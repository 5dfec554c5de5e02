//! ListBookingsHandler - Every booking, for the admin table.

use std::sync::Arc;

use crate::domain::booking::BookingError;
use crate::domain::foundation::SessionContext;
use crate::ports::BookingRepository;

use super::BookingView;

#[derive(Debug, Clone, Default)]
pub struct ListBookingsQuery {
    /// Only administrative blocks.
    pub blocked_only: bool,
}

pub struct ListBookingsHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl ListBookingsHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    /// Bookings ordered by start date.
    pub async fn handle(
        &self,
        _ctx: &SessionContext,
        query: ListBookingsQuery,
    ) -> Result<Vec<BookingView>, BookingError> {
        let bookings = self.bookings.list().await?;
        Ok(bookings
            .iter()
            .filter(|b| !query.blocked_only || b.is_blocked)
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

    fn booking(label: &str, start: &str, end: &str, blocked: bool) -> Booking {
        Booking::restore(
            BookingId::new(),
            label,
            BookingInterval::new(date(start), date(end)).unwrap(),
            None,
            None,
            blocked,
        )
    }

    fn repo() -> Arc<InMemoryBookingRepository> {
        Arc::new(InMemoryBookingRepository::with_bookings(vec![
            booking("Blocked: Maintenance", "2026-02-20", "2026-02-23", true),
            booking("Zack", "2026-01-16", "2026-01-19", false),
            booking("Family", "2026-02-06", "2026-02-09", false),
        ]))
    }

    #[tokio::test]
    async fn lists_all_by_start() {
        let handler = ListBookingsHandler::new(repo());
        let views = handler
            .handle(&member_ctx(), ListBookingsQuery::default())
            .await
            .unwrap();

        let labels: Vec<&str> = views.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["Zack", "Family", "Blocked: Maintenance"]);
        assert_eq!(views[0].end_inclusive, date("2026-01-18"));
    }

    #[tokio::test]
    async fn can_filter_to_blocks() {
        let handler = ListBookingsHandler::new(repo());
        let views = handler
            .handle(&member_ctx(), ListBookingsQuery { blocked_only: true })
            .await
            .unwrap();

        assert_eq!(views.len(), 1);
        assert!(views[0].is_blocked);
    }
}
