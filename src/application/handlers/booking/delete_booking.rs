//! DeleteBookingHandler - Admin removal of a booking.

use std::sync::Arc;

use crate::domain::booking::BookingError;
use crate::domain::foundation::{BookingId, ErrorCode, SessionContext};
use crate::ports::BookingRepository;

#[derive(Debug, Clone)]
pub struct DeleteBookingCommand {
    pub booking_id: BookingId,
}

pub struct DeleteBookingHandler {
    bookings: Arc<dyn BookingRepository>,
}

impl DeleteBookingHandler {
    pub fn new(bookings: Arc<dyn BookingRepository>) -> Self {
        Self { bookings }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: DeleteBookingCommand,
    ) -> Result<(), BookingError> {
        ctx.require_admin("delete bookings")?;

        self.bookings
            .delete(&cmd.booking_id)
            .await
            .map_err(|err| match err.code {
                ErrorCode::BookingNotFound => BookingError::not_found(cmd.booking_id),
                _ => err.into(),
            })?;

        tracing::info!(booking_id = %cmd.booking_id, user_id = %ctx.user_id(), "Booking deleted");
        Ok(())
    }
}
