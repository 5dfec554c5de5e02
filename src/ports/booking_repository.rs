//! Booking repository port.
//!
//! The record store is the single source of truth for bookings. Every
//! query in the application layer reads a fresh snapshot through this
//! port; nothing is cached.
//!
//! # Example
//!
//! ```ignore
//! async fn who_is_here(
//!     repo: &dyn BookingRepository,
//!     day: CalendarDate,
//! ) -> Result<Vec<String>, DomainError> {
//!     let bookings = repo.list().await?;
//!     Ok(bookings_for_day(&bookings, day)
//!         .into_iter()
//!         .map(|b| b.label.clone())
//!         .collect())
//! }
//! ```

use async_trait::async_trait;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError};

/// Repository port for Booking persistence.
///
/// Implementations must hand back only well-formed bookings. A stored row
/// whose end is not after its start is reported as `CorruptRecord`.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// All bookings, ordered by start date ascending.
    async fn list(&self) -> Result<Vec<Booking>, DomainError>;

    /// Find a booking by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError>;

    /// Store a new booking.
    async fn insert(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Replace an existing booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the booking doesn't exist
    async fn update(&self, booking: &Booking) -> Result<(), DomainError>;

    /// Delete a booking.
    ///
    /// # Errors
    ///
    /// - `BookingNotFound` if the booking doesn't exist
    async fn delete(&self, id: &BookingId) -> Result<(), DomainError>;
}
