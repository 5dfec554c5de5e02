//! In-memory adapters.
//!
//! Back every port with process-local state. Used by tests and by the
//! binary's demo mode.

mod access_request_repository;
mod booking_repository;
mod demo;
mod file_store;
mod identity_provider;
mod profile_repository;

pub use access_request_repository::InMemoryAccessRequestRepository;
pub use booking_repository::InMemoryBookingRepository;
pub use demo::DemoBackend;
pub use file_store::{InMemoryFileStore, StoredObject};
pub use identity_provider::MockIdentityProvider;
pub use profile_repository::InMemoryProfileRepository;
