//! ResolveAccessGateHandler - Decides what a visitor may see.
//!
//! Runs once per screen. The resulting `SessionContext` is what every
//! other handler receives.

use std::sync::Arc;
use thiserror::Error;

use crate::domain::foundation::{AuthError, DomainError, SessionContext};
use crate::ports::{IdentityProvider, ProfileRepository};

/// Where the visitor stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessGate {
    /// No session: show the sign-in page.
    SignedOut,
    /// Signed in, but no active profile yet: show the pending approval page.
    PendingApproval { email: String },
    /// Approved and active.
    Ready(SessionContext),
}

impl AccessGate {
    pub fn session(&self) -> Option<&SessionContext> {
        match self {
            AccessGate::Ready(ctx) => Some(ctx),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessGateError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] DomainError),
}

pub struct ResolveAccessGateHandler {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileRepository>,
}

impl ResolveAccessGateHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { identity, profiles }
    }

    pub async fn handle(&self) -> Result<AccessGate, AccessGateError> {
        let Some(session) = self.identity.current_session().await? else {
            return Ok(AccessGate::SignedOut);
        };

        let profile = self.profiles.find_by_id(&session.user.id).await?;
        match profile {
            Some(profile) if profile.is_active => Ok(AccessGate::Ready(profile.session_context(session.user))),
            _ => {
                tracing::debug!(user_id = %session.user.id, "Awaiting approval");
                Ok(AccessGate::PendingApproval {
                    email: session.user.email,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryProfileRepository, MockIdentityProvider};
    use crate::application::handlers::testing::user;
    use crate::domain::foundation::{UserId, UserRole};
    use crate::domain::user::Profile;

    fn amy_profile() -> Profile {
        Profile::new(UserId::new("u-amy").unwrap(), "amy@example.com").with_names("Amy", "Lee")
    }

    fn handler(identity: MockIdentityProvider, profiles: Vec<Profile>) -> ResolveAccessGateHandler {
        ResolveAccessGateHandler::new(
            Arc::new(identity),
            Arc::new(InMemoryProfileRepository::with_profiles(profiles)),
        )
    }

    #[tokio::test]
    async fn no_session_is_signed_out() {
        let gate = handler(MockIdentityProvider::new(), vec![]).handle().await.unwrap();
        assert_eq!(gate, AccessGate::SignedOut);
        assert!(gate.session().is_none());
    }

    #[tokio::test]
    async fn inactive_profile_is_pending() {
        let identity = MockIdentityProvider::new().signed_in_as(user("u-amy", "amy@example.com"));
        let gate = handler(identity, vec![amy_profile()]).handle().await.unwrap();
        assert_eq!(
            gate,
            AccessGate::PendingApproval {
                email: "amy@example.com".to_string()
            }
        );
    }

    #[tokio::test]
    async fn missing_profile_is_pending() {
        let identity = MockIdentityProvider::new().signed_in_as(user("u-amy", "amy@example.com"));
        let gate = handler(identity, vec![]).handle().await.unwrap();
        assert!(matches!(gate, AccessGate::PendingApproval { .. }));
    }

    #[tokio::test]
    async fn active_profile_is_ready_with_role() {
        let identity = MockIdentityProvider::new().signed_in_as(user("u-amy", "amy@example.com"));
        let profile = amy_profile().with_role(UserRole::Admin).activated();

        let gate = handler(identity, vec![profile]).handle().await.unwrap();

        let ctx = gate.session().unwrap();
        assert!(ctx.is_admin());
        assert_eq!(ctx.display_name(), "Amy Lee");
    }

    #[tokio::test]
    async fn provider_failure_is_surfaced() {
        let identity = MockIdentityProvider::new()
            .with_error(AuthError::service_unavailable("connection refused"));
        let result = handler(identity, vec![]).handle().await;
        assert!(matches!(result, Err(AccessGateError::Auth(AuthError::ServiceUnavailable(_)))));
    }
}
