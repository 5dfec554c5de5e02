//! User module - member profiles and avatars.
//!
//! A profile's `is_active` flag is the gate to the calendar. Admins flip it
//! directly or indirectly by approving an access request.

mod avatar;
mod errors;
mod profile;

pub use avatar::{AvatarUpload, DEFAULT_MAX_AVATAR_BYTES};
pub use errors::ProfileError;
pub use profile::{clean_name, display_name, Profile};
