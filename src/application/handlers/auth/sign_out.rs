//! SignOutHandler - Ends the current session.

use std::sync::Arc;

use crate::domain::foundation::AuthError;
use crate::ports::IdentityProvider;

pub struct SignOutHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl SignOutHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self) -> Result<(), AuthError> {
        self.identity.sign_out().await?;
        tracing::info!("Signed out");
        Ok(())
    }
}
