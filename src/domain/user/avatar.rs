//! Avatar upload checks and storage paths.

use crate::domain::foundation::{Timestamp, UserId};

use super::ProfileError;

/// Default size limit: 5 MiB.
pub const DEFAULT_MAX_AVATAR_BYTES: u64 = 5 * 1024 * 1024;

const DEFAULT_EXTENSION: &str = "jpg";

/// An image picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl AvatarUpload {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Checks the content type is an image and the size is within `max_bytes`.
    pub fn validate(&self, max_bytes: u64) -> Result<(), ProfileError> {
        if !self.content_type.starts_with("image/") {
            return Err(ProfileError::NotAnImage(self.content_type.clone()));
        }
        if self.size() > max_bytes {
            return Err(ProfileError::TooLarge {
                size: self.size(),
                max: max_bytes,
            });
        }
        Ok(())
    }

    /// Lowercased extension from the file name, `jpg` when there is none.
    pub fn extension(&self) -> String {
        match self.file_name.rsplit_once('.') {
            Some((_, ext)) if !ext.trim().is_empty() => ext.trim().to_lowercase(),
            _ => DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Object path `{user_id}/{unix_millis}.{ext}` inside the avatar bucket.
    pub fn storage_path(&self, user_id: &UserId, at: Timestamp) -> String {
        format!("{}/{}.{}", user_id, at.as_unix_millis(), self.extension())
    }
}
