//! Authentication types for the domain layer.
//!
//! These types describe a signed-in user and the ways signing in can fail.
//! They have **no provider dependencies** - the hosted identity adapter (or
//! the in-memory mock) populates them via the `IdentityProvider` port.

use secrecy::SecretString;
use thiserror::Error;

use super::{Timestamp, UserId};

/// Signed-in user as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// Email the one-time code was sent to.
    pub email: String,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// A live session issued after a one-time code was verified.
///
/// The access token never appears in `Debug` output.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: AuthenticatedUser,
    pub access_token: SecretString,
    pub expires_at: Option<Timestamp>,
}

impl AuthSession {
    pub fn new(user: AuthenticatedUser, access_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: SecretString::new(access_token.into()),
            expires_at: None,
        }
    }

    /// Builder: record when the provider says the token expires.
    pub fn with_expiry(mut self, expires_at: Timestamp) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Returns true if the provider-reported expiry has passed.
    pub fn is_expired(&self) -> bool {
        self.expires_at
            .map(|at| at.is_before(&Timestamp::now()))
            .unwrap_or(false)
    }
}

/// Authentication errors from the identity provider.
///
/// Domain-centric: adapters translate provider messages into these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Sign-in code is required")]
    MissingCode,

    #[error("Too many sign-in attempts")]
    RateLimited,

    #[error("Sign-in code is invalid")]
    InvalidCode,

    #[error("Sign-in code has expired")]
    CodeExpired,

    /// The email has no account and accounts are never created on sign-in.
    #[error("Sign-in is not available for this email")]
    SignInUnavailable,

    #[error("Provider did not return a session")]
    NoSession,

    #[error("Not signed in")]
    NotSignedIn,

    /// Anything else the provider reported.
    #[error("Auth provider error: {0}")]
    Provider(String),

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Classifies a raw provider error message.
    ///
    /// Matching is case-insensitive and keyword based; unknown messages
    /// become `Provider`.
    pub fn from_provider_message(message: &str) -> Self {
        let m = message.to_lowercase();
        let mentions_code = m.contains("token") || m.contains("otp") || m.contains("code");

        if m.contains("rate limit") {
            AuthError::RateLimited
        } else if m.contains("invalid") && mentions_code {
            AuthError::InvalidCode
        } else if m.contains("expired") && mentions_code {
            AuthError::CodeExpired
        } else if m.contains("user not found")
            || m.contains("signups not allowed")
            || (m.contains("signup") && m.contains("disabled"))
        {
            AuthError::SignInUnavailable
        } else {
            AuthError::Provider(message.to_string())
        }
    }

    /// Message suitable to show the person signing in.
    pub fn friendly_message(&self) -> &'static str {
        match self {
            AuthError::InvalidEmail => "Please enter a valid email address.",
            AuthError::MissingCode => "Enter the code from your email.",
            AuthError::RateLimited => "Too many attempts. Please wait a moment and try again.",
            AuthError::InvalidCode => "That code did not work. Try again or request a new code.",
            AuthError::CodeExpired => "That code has expired. Request a new code and try again.",
            AuthError::SignInUnavailable => {
                "Sign-in is not available for this email. Request access first."
            }
            AuthError::NoSession => {
                "Sign-in could not be completed. Request a new code and try again."
            }
            AuthError::NotSignedIn => "You must be signed in.",
            AuthError::Provider(_) | AuthError::ServiceUnavailable(_) => {
                "Something went wrong. Please try again."
            }
        }
    }

    /// Returns true if this is a transient error that may succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            AuthError::ServiceUnavailable(_) | AuthError::RateLimited
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn test_user() -> AuthenticatedUser {
        AuthenticatedUser::new(UserId::new("user-123").unwrap(), "zack@example.com")
    }

    #[test]
    fn session_keeps_token_secret_in_debug() {
        let session = AuthSession::new(test_user(), "super-secret-token");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret-token"));
        assert_eq!(session.access_token.expose_secret(), "super-secret-token");
    }

    #[test]
    fn session_without_expiry_never_expires() {
        assert!(!AuthSession::new(test_user(), "t").is_expired());
    }

    #[test]
    fn session_with_past_expiry_is_expired() {
        let past = Timestamp::from_datetime(chrono::Utc::now() - chrono::Duration::hours(1));
        let session = AuthSession::new(test_user(), "t").with_expiry(past);
        assert!(session.is_expired());
    }

    #[test]
    fn classifies_rate_limit() {
        assert_eq!(
            AuthError::from_provider_message("Email rate limit exceeded"),
            AuthError::RateLimited
        );
    }

    #[test]
    fn classifies_invalid_and_expired_codes() {
        assert_eq!(
            AuthError::from_provider_message("Token has expired or is invalid"),
            AuthError::InvalidCode
        );
        assert_eq!(
            AuthError::from_provider_message("OTP expired"),
            AuthError::CodeExpired
        );
    }

    #[test]
    fn classifies_unknown_users_as_unavailable() {
        assert_eq!(
            AuthError::from_provider_message("Signups not allowed for otp"),
            AuthError::SignInUnavailable
        );
        assert_eq!(
            AuthError::from_provider_message("User not found"),
            AuthError::SignInUnavailable
        );
    }

    #[test]
    fn unknown_messages_are_kept() {
        let err = AuthError::from_provider_message("database exploded");
        assert_eq!(err, AuthError::Provider("database exploded".to_string()));
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");
    }

    #[test]
    fn friendly_messages_match_classification() {
        assert_eq!(
            AuthError::CodeExpired.friendly_message(),
            "That code has expired. Request a new code and try again."
        );
        assert_eq!(
            AuthError::SignInUnavailable.friendly_message(),
            "Sign-in is not available for this email. Request access first."
        );
    }

    #[test]
    fn transient_errors() {
        assert!(AuthError::service_unavailable("timeout").is_transient());
        assert!(AuthError::RateLimited.is_transient());
        assert!(!AuthError::InvalidCode.is_transient());
    }
}
