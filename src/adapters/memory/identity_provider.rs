//! Mock identity provider for tests and local runs.
//!
//! Known accounts are registered up front. Every code sent is the same
//! fixed value, so tests can sign in without reading email.
//!
//! ```ignore
//! let identity = MockIdentityProvider::new()
//!     .with_account(AuthenticatedUser::new(UserId::new("u1")?, "amy@example.com"));
//! identity.send_sign_in_code("amy@example.com").await?;
//! let session = identity
//!     .verify_sign_in_code("amy@example.com", MockIdentityProvider::DEFAULT_CODE)
//!     .await?;
//! ```

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser};
use crate::ports::IdentityProvider;

#[derive(Debug)]
pub struct MockIdentityProvider {
    /// Accounts by lowercase email.
    accounts: RwLock<HashMap<String, AuthenticatedUser>>,
    /// Emails with an outstanding code.
    pending_codes: RwLock<HashSet<String>>,
    code: String,
    session: RwLock<Option<AuthSession>>,
    /// Returned by every call when set.
    force_error: RwLock<Option<AuthError>>,
}

impl MockIdentityProvider {
    pub const DEFAULT_CODE: &'static str = "123456";

    pub fn new() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            pending_codes: RwLock::new(HashSet::new()),
            code: Self::DEFAULT_CODE.to_string(),
            session: RwLock::new(None),
            force_error: RwLock::new(None),
        }
    }

    /// Registers an account that may sign in.
    pub fn with_account(mut self, user: AuthenticatedUser) -> Self {
        self.accounts
            .get_mut()
            .insert(user.email.to_lowercase(), user);
        self
    }

    /// Uses `code` instead of the default for every sign-in.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Starts out signed in as `user`.
    pub fn signed_in_as(mut self, user: AuthenticatedUser) -> Self {
        *self.session.get_mut() = Some(session_for(user));
        self
    }

    /// Forces all calls to return `error`.
    pub fn with_error(mut self, error: AuthError) -> Self {
        *self.force_error.get_mut() = Some(error);
        self
    }

    pub async fn clear_error(&self) {
        *self.force_error.write().await = None;
    }

    async fn check_forced(&self) -> Result<(), AuthError> {
        match self.force_error.read().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn session_for(user: AuthenticatedUser) -> AuthSession {
    let token = format!("mock-token-{}", user.id);
    AuthSession::new(user, token)
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        self.check_forced().await?;
        let session = self.session.read().await.clone();
        Ok(session.filter(|s| !s.is_expired()))
    }

    async fn send_sign_in_code(&self, email: &str) -> Result<(), AuthError> {
        self.check_forced().await?;
        let email = email.to_lowercase();
        if !self.accounts.read().await.contains_key(&email) {
            return Err(AuthError::SignInUnavailable);
        }
        self.pending_codes.write().await.insert(email);
        Ok(())
    }

    async fn verify_sign_in_code(&self, email: &str, code: &str) -> Result<AuthSession, AuthError> {
        self.check_forced().await?;
        let email = email.to_lowercase();
        if !self.pending_codes.read().await.contains(&email) {
            return Err(AuthError::CodeExpired);
        }
        if code != self.code {
            return Err(AuthError::InvalidCode);
        }
        let user = self
            .accounts
            .read()
            .await
            .get(&email)
            .cloned()
            .ok_or(AuthError::SignInUnavailable)?;

        self.pending_codes.write().await.remove(&email);
        let session = session_for(user);
        *self.session.write().await = Some(session.clone());
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.check_forced().await?;
        *self.session.write().await = None;
        Ok(())
    }
}
