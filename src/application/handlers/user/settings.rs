//! Profile settings handed to the profile handlers.

use crate::domain::user::DEFAULT_MAX_AVATAR_BYTES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileSettings {
    /// Profile edits and avatar uploads are refused.
    pub demo_mode: bool,
    pub max_avatar_bytes: u64,
}

impl Default for ProfileSettings {
    fn default() -> Self {
        Self {
            demo_mode: false,
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
        }
    }
}
