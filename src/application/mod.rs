//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands change the record store; queries read a fresh snapshot from it.

pub mod handlers;

pub use handlers::auth::{AccessGate, ResolveAccessGateHandler};
pub use handlers::booking::{BookingView, GetDayBookingsHandler, GetDayBookingsQuery};
