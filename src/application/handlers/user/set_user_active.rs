//! SetUserActiveHandler - Admin activation and deactivation.
//!
//! Deactivating a user removes their calendar access at the next
//! gate check.

use std::sync::Arc;

use crate::domain::foundation::{ErrorCode, SessionContext, UserId};
use crate::domain::user::ProfileError;
use crate::ports::ProfileRepository;

#[derive(Debug, Clone)]
pub struct SetUserActiveCommand {
    pub user_id: UserId,
    pub is_active: bool,
}

pub struct SetUserActiveHandler {
    profiles: Arc<dyn ProfileRepository>,
}

impl SetUserActiveHandler {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: SetUserActiveCommand,
    ) -> Result<(), ProfileError> {
        ctx.require_admin("change user access")?;

        self.profiles
            .set_active(&cmd.user_id, cmd.is_active)
            .await
            .map_err(|err| match err.code {
                ErrorCode::ProfileNotFound => ProfileError::not_found(cmd.user_id.clone()),
                _ => err.into(),
            })?;

        if cmd.is_active {
            tracing::info!(user_id = %cmd.user_id, changed_by = %ctx.user_id(), "User activated");
        } else {
            tracing::info!(user_id = %cmd.user_id, changed_by = %ctx.user_id(), "User deactivated");
        }
        Ok(())
    }
}
