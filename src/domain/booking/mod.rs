//! Booking module - stays and date blocks on the shared calendar.
//!
//! - `Booking` aggregate and the `BookingDraft` form it is built from
//! - Per-day occurrence expansion for the month grid
//! - The day query listing who is booked on a date
//!
//! Overlapping bookings are allowed; the calendar shows everyone.

mod aggregate;
mod day_query;
mod draft;
mod errors;
mod occurrence;

pub use aggregate::Booking;
pub use day_query::bookings_for_day;
pub use draft::{ensure_blocked_prefix, BookingDraft};
pub use errors::BookingError;
pub use occurrence::{expand, expand_within, occurrences_in_window, DayOccurrence, Occurrences};
