//! Profile error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("Profile {0} not found")]
    NotFound(UserId),

    /// Edits are switched off by the `demo_mode` feature flag.
    #[error("{0} is disabled in demo mode.")]
    DemoMode(&'static str),

    #[error("Please choose an image file.")]
    NotAnImage(String),

    #[error("Please choose an image under {}MB.", .max / (1024 * 1024))]
    TooLarge { size: u64, max: u64 },

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(DomainError),
}

impl ProfileError {
    pub fn not_found(id: UserId) -> Self {
        ProfileError::NotFound(id)
    }
}

impl From<DomainError> for ProfileError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => ProfileError::Forbidden(err.message),
            _ => ProfileError::Store(err),
        }
    }
}

impl From<ProfileError> for DomainError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(ref id) => {
                let id = id.to_string();
                DomainError::new(ErrorCode::ProfileNotFound, err.to_string())
                    .with_detail("user_id", id)
            }
            ProfileError::DemoMode(_) => DomainError::new(ErrorCode::FeatureDisabled, err.to_string()),
            ProfileError::NotAnImage(ref content_type) => {
                let content_type = content_type.clone();
                DomainError::validation("avatar", err.to_string())
                    .with_detail("content_type", content_type)
            }
            ProfileError::TooLarge { size, .. } => {
                DomainError::validation("avatar", err.to_string()).with_detail("size", size.to_string())
            }
            ProfileError::Forbidden(reason) => DomainError::forbidden(reason),
            ProfileError::Store(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_what_members_see() {
        assert_eq!(
            ProfileError::DemoMode("Profile editing").to_string(),
            "Profile editing is disabled in demo mode."
        );
        assert_eq!(
            ProfileError::TooLarge { size: 6_000_000, max: 5 * 1024 * 1024 }.to_string(),
            "Please choose an image under 5MB."
        );
    }

    #[test]
    fn demo_mode_maps_to_feature_disabled() {
        let domain: DomainError = ProfileError::DemoMode("Avatar uploads").into();
        assert_eq!(domain.code, ErrorCode::FeatureDisabled);
    }

    #[test]
    fn not_found_carries_user_id() {
        let id = UserId::new("user-9").unwrap();
        let domain: DomainError = ProfileError::not_found(id).into();
        assert_eq!(domain.code, ErrorCode::ProfileNotFound);
        assert_eq!(domain.details.get("user_id"), Some(&"user-9".to_string()));
    }
}
