//! CreateBookingHandler - Command handler for new bookings.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingDraft, BookingError};
use crate::domain::foundation::SessionContext;
use crate::ports::BookingRepository;

/// Command to create a booking from the "Book" dialog.
#[derive(Debug, Clone)]
pub struct CreateBookingCommand {
    pub draft: BookingDraft,
}

/// Handler for creating bookings.
///
/// Any approved member may book. Only admins may block dates. Overlaps
/// with existing bookings are allowed.
pub struct CreateBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl CreateBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: CreateBookingCommand,
    ) -> Result<Booking, BookingError> {
        if cmd.draft.is_blocked {
            ctx.require_admin("block dates")?;
        }

        let booking = Booking::create(&cmd.draft, ctx.display_name())?;
        self.bookings.insert(&booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            interval = %booking.interval,
            is_blocked = booking.is_blocked,
            user_id = %ctx.user_id(),
            "Booking created"
        );
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryBookingRepository;
    use crate::application::handlers::testing::{admin_ctx, date, member_ctx};
    use crate::domain::foundation::{BookingId, DomainError};
    use async_trait::async_trait;

    // ════════════════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════════════════

    struct FailingBookingRepository;

    #[async_trait]
    impl BookingRepository for FailingBookingRepository {
        async fn list(&self) -> Result<Vec<Booking>, DomainError> {
            Ok(vec![])
        }

        async fn find_by_id(&self, _id: &BookingId) -> Result<Option<Booking>, DomainError> {
            Ok(None)
        }

        async fn insert(&self, _booking: &Booking) -> Result<(), DomainError> {
            Err(DomainError::database("insert failed: connection reset"))
        }

        async fn update(&self, _booking: &Booking) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &BookingId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Tests
    // ════════════════════════════════════════════════════════════════════════════

    fn draft() -> BookingDraft {
        BookingDraft::starting_on(date("2026-01-16"))
            .ending_on(date("2026-01-18"))
            .with_label("Zack")
    }

    #[tokio::test]
    async fn member_creates_booking_with_exclusive_end() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo.clone());

        let booking = handler
            .handle(&member_ctx(), CreateBookingCommand { draft: draft() })
            .await
            .unwrap();

        assert_eq!(booking.end(), date("2026-01-19"));
        assert_eq!(booking.created_by.as_deref(), Some("Jeff"));
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn overlapping_bookings_are_allowed() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo.clone());

        for _ in 0..2 {
            handler
                .handle(&member_ctx(), CreateBookingCommand { draft: draft() })
                .await
                .unwrap();
        }
        assert_eq!(repo.count().await, 2);
    }

    #[tokio::test]
    async fn member_cannot_block_dates() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo.clone());

        let result = handler
            .handle(
                &member_ctx(),
                CreateBookingCommand {
                    draft: draft().blocked(true),
                },
            )
            .await;

        assert!(matches!(result, Err(BookingError::Forbidden(_))));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn admin_blocks_dates_with_prefix() {
        let handler = CreateBookingHandler::new(Arc::new(InMemoryBookingRepository::new()));

        let booking = handler
            .handle(
                &admin_ctx(),
                CreateBookingCommand {
                    draft: draft().with_label("Maintenance").blocked(true),
                },
            )
            .await
            .unwrap();

        assert_eq!(booking.label, "Blocked: Maintenance");
        assert!(booking.is_blocked);
    }

    #[tokio::test]
    async fn invalid_range_is_not_stored() {
        let repo = Arc::new(InMemoryBookingRepository::new());
        let handler = CreateBookingHandler::new(repo.clone());

        let result = handler
            .handle(
                &member_ctx(),
                CreateBookingCommand {
                    draft: draft().ending_on(date("2026-01-15")),
                },
            )
            .await;

        assert!(matches!(result, Err(BookingError::InvalidRange(_))));
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn store_failure_is_surfaced() {
        let handler = CreateBookingHandler::new(Arc::new(FailingBookingRepository));

        let err = handler
            .handle(&member_ctx(), CreateBookingCommand { draft: draft() })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("connection reset"));
    }
}
