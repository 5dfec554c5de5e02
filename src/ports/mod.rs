//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Record Store Ports
//!
//! - `BookingRepository` - Bookings, listed by start date
//! - `AccessRequestRepository` - Registration requests, newest first
//! - `ProfileRepository` - Member profiles and their active flag
//!
//! ## Service Ports
//!
//! - `IdentityProvider` - One-time code sign-in and the current session
//! - `FileStore` - Avatar image uploads and public URLs

mod access_request_repository;
mod booking_repository;
mod file_store;
mod identity_provider;
mod profile_repository;

pub use access_request_repository::AccessRequestRepository;
pub use booking_repository::BookingRepository;
pub use file_store::FileStore;
pub use identity_provider::IdentityProvider;
pub use profile_repository::ProfileRepository;
