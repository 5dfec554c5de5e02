//! Booking-specific error types.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | MissingLabel | Draft has neither a label nor any named people |
//! | InvalidRange | End date is not after the start date, or the last day has no storable end |
//! | NotFound | No booking with that id |
//! | Forbidden | Actor may not perform the action |
//! | Store | Record store call failed |

use thiserror::Error;

use crate::domain::calendar::InvalidRangeError;
use crate::domain::foundation::{BookingId, DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("A label or at least one name is required")]
    MissingLabel,

    #[error(transparent)]
    InvalidRange(#[from] InvalidRangeError),

    #[error("Booking {0} not found")]
    NotFound(BookingId),

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(DomainError),
}

impl BookingError {
    pub fn not_found(id: BookingId) -> Self {
        BookingError::NotFound(id)
    }

    pub fn forbidden(reason: impl Into<String>) -> Self {
        BookingError::Forbidden(reason.into())
    }
}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => BookingError::Forbidden(err.message),
            _ => BookingError::Store(err),
        }
    }
}

impl From<BookingError> for DomainError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::MissingLabel => DomainError::validation("label", err.to_string()),
            BookingError::InvalidRange(range) => range.into(),
            BookingError::NotFound(id) => {
                DomainError::new(ErrorCode::BookingNotFound, err.to_string())
                    .with_detail("booking_id", id.to_string())
            }
            BookingError::Forbidden(reason) => DomainError::forbidden(reason),
            BookingError::Store(inner) => inner,
        }
    }
}
