//! Identity provider port.
//!
//! Sign-in is passwordless: the provider emails a one-time code and
//! exchanges it for a session. Accounts are never created through this
//! port; new people go through an access request instead.
//!
//! # Contract
//!
//! Implementations must:
//! - Translate provider failures into `AuthError` variants
//! - Remember the verified session so `current_session` returns it
//! - Forget it on `sign_out`

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthSession};

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The signed-in session, if any. Expired sessions are not returned.
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError>;

    /// Emails a one-time code. Unknown emails fail with `SignInUnavailable`.
    async fn send_sign_in_code(&self, email: &str) -> Result<(), AuthError>;

    /// Exchanges the emailed code for a session.
    async fn verify_sign_in_code(&self, email: &str, code: &str) -> Result<AuthSession, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn IdentityProvider) {}
    }
}
