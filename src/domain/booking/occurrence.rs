//! Per-day occurrences of bookings.
//!
//! The month grid draws one marker per booking per day, so a three-night
//! stay shows up on three cells. Occurrences are derived on demand from a
//! booking and never stored. Expansion is lazy: clipping to the visible
//! window means a long booking only yields the days on screen.

use std::iter::FusedIterator;

use crate::domain::calendar::{BookingInterval, CalendarDate, Days};
use crate::domain::foundation::BookingId;

use super::Booking;

/// One day of one booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOccurrence<'a> {
    pub day: CalendarDate,
    pub booking_id: BookingId,
    pub label: &'a str,
    pub is_blocked: bool,
}

/// Lazy, restartable sequence of a booking's occurrences.
///
/// Cloning gives an independent iterator from the current position;
/// calling [`expand`] again starts from the first day.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    booking: &'a Booking,
    days: Option<Days>,
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = DayOccurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.days.as_mut()?.next()?;
        Some(DayOccurrence {
            day,
            booking_id: self.booking.id,
            label: &self.booking.label,
            is_blocked: self.booking.is_blocked,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.days {
            Some(days) => days.size_hint(),
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Occurrences<'_> {}

impl FusedIterator for Occurrences<'_> {}

/// One occurrence per day in `[start, end)`.
pub fn expand(booking: &Booking) -> Occurrences<'_> {
    Occurrences {
        booking,
        days: Some(booking.interval.days()),
    }
}

/// Occurrences restricted to the days inside `window`.
pub fn expand_within<'a>(booking: &'a Booking, window: &BookingInterval) -> Occurrences<'a> {
    Occurrences {
        booking,
        days: booking.interval.intersection(window).map(|i| i.days()),
    }
}

/// All occurrences of `bookings` inside `window`, booking by booking.
pub fn occurrences_in_window<'a>(
    bookings: &'a [Booking],
    window: BookingInterval,
) -> impl Iterator<Item = DayOccurrence<'a>> + 'a {
    bookings
        .iter()
        .flat_map(move |booking| expand_within(booking, &window))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap()
    }

    fn booking(label: &str, start: &str, end: &str) -> Booking {
        Booking::restore(
            BookingId::new(),
            label,
            BookingInterval::new(date(start), date(end)).unwrap(),
            None,
            None,
            false,
        )
    }

    #[test]
    fn expands_each_day_excluding_end() {
        let zack = booking("Zack", "2026-01-16", "2026-01-19");
        let days: Vec<String> = expand(&zack).map(|o| o.day.to_string()).collect();
        assert_eq!(days, vec!["2026-01-16", "2026-01-17", "2026-01-18"]);
    }

    #[test]
    fn single_day_booking_yields_one_occurrence() {
        let b = booking("Jeff", "2026-03-01", "2026-03-02");
        let all: Vec<_> = expand(&b).collect();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].day, date("2026-03-01"));
        assert_eq!(all[0].booking_id, b.id);
        assert_eq!(all[0].label, "Jeff");
    }

    #[test]
    fn expansion_is_restartable() {
        let b = booking("Cousins", "2026-02-08", "2026-02-12");
        let first: Vec<_> = expand(&b).collect();
        let second: Vec<_> = b.occurrences().collect();
        assert_eq!(first, second);
        assert_eq!(expand(&b).len(), 4);
    }

    #[test]
    fn occurrences_carry_blocked_flag() {
        let mut b = booking("Blocked: Maintenance", "2026-02-20", "2026-02-23");
        b.is_blocked = true;
        assert!(expand(&b).all(|o| o.is_blocked));
    }

    #[test]
    fn expand_within_clips_to_window() {
        let long = booking("Season", "2026-01-01", "2026-12-31");
        let february = BookingInterval::new(date("2026-02-01"), date("2026-03-01")).unwrap();
        let clipped: Vec<_> = expand_within(&long, &february).collect();
        assert_eq!(clipped.len(), 28);
        assert_eq!(clipped[0].day, date("2026-02-01"));
        assert_eq!(clipped[27].day, date("2026-02-28"));
    }

    #[test]
    fn expand_within_outside_window_is_empty() {
        let b = booking("Zack", "2026-01-16", "2026-01-19");
        let february = BookingInterval::new(date("2026-02-01"), date("2026-03-01")).unwrap();
        assert_eq!(expand_within(&b, &february).count(), 0);
        assert_eq!(expand_within(&b, &february).len(), 0);
    }

    #[test]
    fn window_collects_across_bookings() {
        let bookings = vec![
            booking("Family", "2026-02-06", "2026-02-09"),
            booking("Cousins", "2026-02-08", "2026-02-12"),
            booking("Zack", "2026-01-16", "2026-01-19"),
        ];
        let window = BookingInterval::new(date("2026-02-07"), date("2026-02-10")).unwrap();
        let labels: Vec<(String, &str)> = occurrences_in_window(&bookings, window)
            .map(|o| (o.day.to_string(), o.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("2026-02-07".to_string(), "Family"),
                ("2026-02-08".to_string(), "Family"),
                ("2026-02-08".to_string(), "Cousins"),
                ("2026-02-09".to_string(), "Cousins"),
            ]
        );
    }
}
