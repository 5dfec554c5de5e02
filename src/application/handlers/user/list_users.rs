//! ListUsersHandler - Admin view of every member.

use std::sync::Arc;

use crate::domain::foundation::SessionContext;
use crate::domain::user::{Profile, ProfileError};
use crate::ports::ProfileRepository;

pub struct ListUsersHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl ListUsersHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(&self, ctx: &SessionContext) -> Result<Vec<Profile>, ProfileError> {
        ctx.require_admin("list users")?;
        Ok(self.profiles.list().await?)
    }
}
