//! Profile repository port.
//!
//! Profiles are created by the identity provider when an account is made;
//! this port only reads and updates them.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::Profile;

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Returns `None` if the user has no profile row yet.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError>;

    /// All profiles, for the admin user list.
    async fn list(&self) -> Result<Vec<Profile>, DomainError>;

    /// Sets both names. `None` clears a name.
    ///
    /// # Errors
    ///
    /// - `ProfileNotFound` if the profile doesn't exist
    async fn update_names(
        &self,
        id: &UserId,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<(), DomainError>;

    async fn set_avatar_url(&self, id: &UserId, avatar_url: &str) -> Result<(), DomainError>;

    async fn set_active(&self, id: &UserId, is_active: bool) -> Result<(), DomainError>;

    /// Activates every profile with `email`, returning how many matched.
    async fn activate_by_email(&self, email: &str) -> Result<usize, DomainError>;
}
