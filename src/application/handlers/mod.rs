//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Every
//! handler that acts for a member takes an explicit `SessionContext`.

pub mod access;
pub mod auth;
pub mod booking;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;
