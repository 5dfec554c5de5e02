//! User handlers.
//!
//! ## Commands
//! - Activate or deactivate a user (admin)
//! - Update own name
//! - Upload own avatar
//!
//! ## Queries
//! - List users (admin)
//! - Get own profile

mod get_profile;
mod list_users;
mod set_user_active;
mod settings;
mod update_profile;
mod upload_avatar;

pub use settings::ProfileSettings;

// Commands
pub use set_user_active::{SetUserActiveCommand, SetUserActiveHandler};
pub use update_profile::{UpdateProfileCommand, UpdateProfileHandler};
pub use upload_avatar::{UploadAvatarCommand, UploadAvatarHandler};

// Queries
pub use get_profile::GetProfileHandler;
pub use list_users::ListUsersHandler;
