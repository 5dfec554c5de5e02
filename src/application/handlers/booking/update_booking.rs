//! UpdateBookingHandler - Admin edits of an existing booking.

use std::sync::Arc;

use crate::domain::booking::{Booking, BookingDraft, BookingError};
use crate::domain::foundation::{BookingId, SessionContext};
use crate::ports::BookingRepository;

/// Command to replace a booking's dates, label, notes and blocked flag.
///
/// The draft carries the inclusive end shown in the edit dialog.
#[derive(Debug, Clone)]
pub struct UpdateBookingCommand {
    pub booking_id: BookingId,
    pub draft: BookingDraft,
}

pub struct UpdateBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl UpdateBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: UpdateBookingCommand,
    ) -> Result<Booking, BookingError> {
        ctx.require_admin("edit bookings")?;

        let mut booking = self
            .bookings
            .find_by_id(&cmd.booking_id)
            .await?
            .ok_or_else(|| BookingError::not_found(cmd.booking_id))?;

        booking.apply_edit(&cmd.draft)?;
        self.bookings.update(&booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            interval = %booking.interval,
            user_id = %ctx.user_id(),
            "Booking updated"
        );
        Ok(booking)
    }
}
