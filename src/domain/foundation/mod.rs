//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, errors and the session context
//! that form the vocabulary of the calendar domain.

mod auth;
mod email;
mod errors;
mod ids;
mod session;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthSession, AuthenticatedUser};
pub use email::{is_valid_email, normalize_email};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AccessRequestId, BookingId, UserId};
pub use session::{SessionContext, UserRole};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
