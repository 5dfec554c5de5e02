//! UpdateProfileHandler - Members edit their own name.

use std::sync::Arc;

use crate::domain::foundation::SessionContext;
use crate::domain::user::{clean_name, Profile, ProfileError};
use crate::ports::ProfileRepository;

use super::ProfileSettings;

#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    pub first_name: String,
    pub last_name: String,
}

pub struct UpdateProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
    settings: ProfileSettings,
}

impl UpdateProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>, settings: ProfileSettings) -> Self {
        Self { profiles, settings }
    }

    /// Stores trimmed names (blank clears) and returns the updated profile.
    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError> {
        if self.settings.demo_mode {
            return Err(ProfileError::DemoMode("Profile editing"));
        }

        self.profiles
            .update_names(
                ctx.user_id(),
                clean_name(&cmd.first_name),
                clean_name(&cmd.last_name),
            )
            .await?;

        tracing::info!(user_id = %ctx.user_id(), "Profile updated");

        self.profiles
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| ProfileError::not_found(ctx.user_id().clone()))
    }
}
