//! Who is booked on a given day.

use crate::domain::calendar::CalendarDate;

use super::Booking;

/// Bookings whose interval contains `day`, sorted by label.
///
/// Labels compare case-insensitively. The sort is stable, so bookings with
/// equal labels keep their input order. An empty result means nobody is
/// booked that day.
pub fn bookings_for_day(bookings: &[Booking], day: CalendarDate) -> Vec<&Booking> {
    let mut active: Vec<&Booking> = bookings
        .iter()
        .filter(|booking| booking.contains_day(day))
        .collect();
    active.sort_by_cached_key(|booking| booking.label.to_lowercase());
    active
}
