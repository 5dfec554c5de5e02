//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, errors, timestamps, auth, session context)
//! - `calendar` - Calendar days and the half-open booking interval
//! - `booking` - Booking aggregate, drafts, per-day expansion and the day query
//! - `access` - Registration requests and their review lifecycle
//! - `user` - Member profiles and avatar uploads

pub mod access;
pub mod booking;
pub mod calendar;
pub mod foundation;
pub mod user;
