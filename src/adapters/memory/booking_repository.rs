//! In-memory booking repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::booking::Booking;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode};
use crate::ports::BookingRepository;

/// Bookings kept in insertion order behind a shared lock.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing bookings.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Arc::new(RwLock::new(bookings)),
        }
    }

    pub async fn count(&self) -> usize {
        self.bookings.read().await.len()
    }
}

fn not_found(id: &BookingId) -> DomainError {
    DomainError::new(ErrorCode::BookingNotFound, format!("Booking {} not found", id))
        .with_detail("booking_id", id.to_string())
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn list(&self) -> Result<Vec<Booking>, DomainError> {
        let mut bookings = self.bookings.read().await.clone();
        bookings.sort_by_key(|b| b.start());
        Ok(bookings)
    }

    async fn find_by_id(&self, id: &BookingId) -> Result<Option<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings.iter().find(|b| &b.id == id).cloned())
    }

    async fn insert(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut bookings = self.bookings.write().await;
        if bookings.iter().any(|b| b.id == booking.id) {
            return Err(DomainError::new(
                ErrorCode::AlreadyExists,
                format!("Booking {} already exists", booking.id),
            ));
        }
        bookings.push(booking.clone());
        Ok(())
    }

    async fn update(&self, booking: &Booking) -> Result<(), DomainError> {
        let mut bookings = self.bookings.write().await;
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or_else(|| not_found(&booking.id))?;
        *slot = booking.clone();
        Ok(())
    }

    async fn delete(&self, id: &BookingId) -> Result<(), DomainError> {
        let mut bookings = self.bookings.write().await;
        let before = bookings.len();
        bookings.retain(|b| &b.id != id);
        if bookings.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
