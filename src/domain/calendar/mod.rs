//! Calendar primitives: days and half-open day ranges.
//!
//! Everything here is pure and synchronous. Booking-level projections
//! (per-day occurrences, who is here on a given day) live in
//! `domain::booking`.

mod date;
mod interval;

pub use date::CalendarDate;
pub use interval::{to_exclusive_end, to_inclusive_end, BookingInterval, Days, InvalidRangeError};
