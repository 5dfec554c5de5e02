//! Hosted backend adapters.
//!
//! One [`SupabaseClient`] is shared by every adapter so that the session
//! created at sign-in authorizes later record store and storage calls.
//!
//! - `SupabaseBookingRepository` - `bookings` table
//! - `SupabaseAccessRequestRepository` - `access_requests` table
//! - `SupabaseProfileRepository` - `profiles` table
//! - `SupabaseIdentityProvider` - one-time-code sign-in
//! - `SupabaseFileStore` - avatar bucket

mod access_request_repository;
mod booking_repository;
mod client;
mod file_store;
mod identity_provider;
mod profile_repository;
mod rows;

pub use access_request_repository::SupabaseAccessRequestRepository;
pub use booking_repository::SupabaseBookingRepository;
pub use client::{SupabaseClient, SupabaseConfig};
pub use file_store::SupabaseFileStore;
pub use identity_provider::SupabaseIdentityProvider;
pub use profile_repository::SupabaseProfileRepository;
