//! GetProfileHandler - The signed-in user's own profile.

use std::sync::Arc;

use crate::domain::foundation::SessionContext;
use crate::domain::user::{Profile, ProfileError};
use crate::ports::ProfileRepository;

pub struct GetProfileHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl GetProfileHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, ctx: &SessionContext) -> Result<Profile, ProfileError> {
        self.profiles
            .find_by_id(ctx.user_id())
            .await?
            .ok_or_else(|| ProfileError::not_found(ctx.user_id().clone()))
    }
}
