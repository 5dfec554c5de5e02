//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `memory` - Process-local state for tests and demo mode
//! - `supabase` - Hosted record store, identity and file storage

pub mod memory;
pub mod supabase;

pub use memory::DemoBackend;
