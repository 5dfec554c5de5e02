//! RequestSignInCodeHandler - Emails a one-time code.

use std::sync::Arc;

use crate::domain::foundation::{normalize_email, AuthError};
use crate::ports::IdentityProvider;

#[derive(Debug, Clone)]
pub struct RequestSignInCodeCommand {
    pub email: String,
}

pub struct RequestSignInCodeHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl RequestSignInCodeHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    /// Returns the normalized email the code was sent to.
    pub async fn handle(&self, cmd: RequestSignInCodeCommand) -> Result<String, AuthError> {
        let email = normalize_email(&cmd.email).map_err(|_| AuthError::InvalidEmail)?;

        if let Err(err) = self.identity.send_sign_in_code(&email).await {
            tracing::warn!(email = %email, error = %err, "Sign-in code not sent");
            return Err(err);
        }

        tracing::info!(email = %email, "Sign-in code sent");
        Ok(email)
    }
}
