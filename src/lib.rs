//! Lakehouse Calendar - shared vacation-home booking calendar.
//!
//! Members see who is staying at the house on any day, book stays, and
//! admins approve new members and block dates. The core is the half-open
//! booking interval (`[start, end)` with an exclusive end day) and the
//! pure projections built on it.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
