//! UploadAvatarHandler - Members replace their profile picture.
//!
//! The image is uploaded first, then the public URL is written to the
//! profile. A failed profile write leaves an orphaned object in storage.

use std::sync::Arc;

use crate::domain::foundation::{SessionContext, Timestamp};
use crate::domain::user::{AvatarUpload, ProfileError};
use crate::ports::{FileStore, ProfileRepository};

use super::ProfileSettings;

#[derive(Debug, Clone)]
pub struct UploadAvatarCommand {
    pub upload: AvatarUpload,
}

pub struct UploadAvatarHandler {
    profiles: Arc<dyn ProfileRepository>,
    files: Arc<dyn FileStore>,
    settings: ProfileSettings,
}

impl UploadAvatarHandler {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        files: Arc<dyn FileStore>,
        settings: ProfileSettings,
    ) -> Self {
        Self {
            profiles,
            files,
            settings,
        }
    }

    /// Returns the new public avatar URL.
    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: UploadAvatarCommand,
    ) -> Result<String, ProfileError> {
        if self.settings.demo_mode {
            return Err(ProfileError::DemoMode("Avatar uploads"));
        }

        let upload = cmd.upload;
        if let Err(err) = upload.validate(self.settings.max_avatar_bytes) {
            tracing::warn!(
                user_id = %ctx.user_id(),
                content_type = %upload.content_type,
                size = upload.size(),
                "Avatar rejected"
            );
            return Err(err);
        }

        let path = upload.storage_path(ctx.user_id(), Timestamp::now());
        self.files
            .upload(&path, upload.bytes, &upload.content_type)
            .await?;

        let url = self.files.public_url(&path);
        self.profiles.set_avatar_url(ctx.user_id(), &url).await?;

        tracing::info!(user_id = %ctx.user_id(), path = %path, "Avatar uploaded");
        Ok(url)
    }
}
