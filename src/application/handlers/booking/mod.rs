//! Booking handlers.
//!
//! ## Commands
//! - Create a booking (any member; blocks are admin only)
//! - Update or delete a booking (admin only)
//!
//! ## Queries
//! - List bookings
//! - Who is booked on a day
//! - Markers for the visible calendar window

mod create_booking;
mod delete_booking;
mod get_calendar_window;
mod get_day_bookings;
mod list_bookings;
mod update_booking;
mod view;

pub use view::BookingView;

// Commands
pub use create_booking::{CreateBookingCommand, CreateBookingHandler};
pub use delete_booking::{DeleteBookingCommand, DeleteBookingHandler};
pub use update_booking::{UpdateBookingCommand, UpdateBookingHandler};

// Queries
pub use get_calendar_window::{CalendarWindow, GetCalendarWindowHandler, GetCalendarWindowQuery};
pub use get_day_bookings::{GetDayBookingsHandler, GetDayBookingsQuery};
pub use list_bookings::{ListBookingsHandler, ListBookingsQuery};
