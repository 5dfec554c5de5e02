//! VerifySignInCodeHandler - Exchanges the emailed code for a session.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, AuthSession};
use crate::ports::IdentityProvider;

#[derive(Debug, Clone)]
pub struct VerifySignInCodeCommand {
    pub email: String,
    pub code: String,
}

pub struct VerifySignInCodeHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl VerifySignInCodeHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, cmd: VerifySignInCodeCommand) -> Result<AuthSession, AuthError> {
        let email = cmd.email.trim().to_lowercase();
        let code = cmd.code.trim();
        if email.is_empty() {
            return Err(AuthError::InvalidEmail);
        }
        if code.is_empty() {
            return Err(AuthError::MissingCode);
        }

        match self.identity.verify_sign_in_code(&email, code).await {
            Ok(session) => {
                tracing::info!(user_id = %session.user.id, "Signed in");
                Ok(session)
            }
            Err(err) => {
                tracing::warn!(email = %email, error = %err, "Sign-in code rejected");
                Err(err)
            }
        }
    }
}
