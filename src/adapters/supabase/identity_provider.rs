//! One-time-code sign-in against the hosted identity service.
//!
//! Only existing accounts can sign in: codes are requested with
//! `create_user: false`. A verified session is stored on the shared
//! `SupabaseClient`, so record store calls made afterwards carry the user's
//! access token.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthError, AuthSession, AuthenticatedUser, Timestamp, UserId};
use crate::ports::IdentityProvider;

use super::client::{error_body, SupabaseClient};

#[derive(Debug, Serialize)]
struct OtpRequest<'a> {
    email: &'a str,
    create_user: bool,
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    email: &'a str,
    token: &'a str,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    #[serde(default)]
    access_token: Option<String>,
    /// Unix seconds.
    #[serde(default)]
    expires_at: Option<i64>,
    #[serde(default)]
    user: Option<VerifiedUser>,
}

#[derive(Debug, Deserialize)]
struct VerifiedUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

impl VerifyResponse {
    fn into_session(self, fallback_email: &str) -> Result<AuthSession, AuthError> {
        let (Some(token), Some(user)) = (self.access_token, self.user) else {
            return Err(AuthError::NoSession);
        };
        let id = UserId::new(user.id).map_err(|e| AuthError::Provider(e.to_string()))?;
        let email = user.email.unwrap_or_else(|| fallback_email.to_string());

        let session = AuthSession::new(AuthenticatedUser::new(id, email), token);
        Ok(match self.expires_at.and_then(|secs| Utc.timestamp_opt(secs, 0).single()) {
            Some(at) => session.with_expiry(Timestamp::from_datetime(at)),
            None => session,
        })
    }
}

/// Error body shapes the identity service uses.
#[derive(Debug, Default, Deserialize)]
struct AuthErrorBody {
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

fn auth_error(status: StatusCode, body: &str) -> AuthError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return AuthError::RateLimited;
    }
    let parsed: AuthErrorBody = serde_json::from_str(body).unwrap_or_default();
    match parsed.msg.or(parsed.message).or(parsed.error_description) {
        Some(message) => AuthError::from_provider_message(&message),
        None if status.is_server_error() => {
            AuthError::service_unavailable(format!("identity service returned {}", status))
        }
        None => AuthError::Provider(format!("identity service returned {}", status)),
    }
}

/// Identity provider backed by the hosted auth endpoints.
#[derive(Clone)]
pub struct SupabaseIdentityProvider {
    client: SupabaseClient,
}

impl SupabaseIdentityProvider {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&T>,
    ) -> Result<reqwest::Response, AuthError> {
        let mut builder = self.client.request(Method::POST, &self.client.auth_url(path)).await;
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(path, error = %e, "identity request failed");
            AuthError::service_unavailable(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "identity service responded");
        if status.is_success() {
            return Ok(response);
        }

        let body = error_body(response.text().await, path);
        Err(auth_error(status, &body))
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn current_session(&self) -> Result<Option<AuthSession>, AuthError> {
        match self.client.session().await {
            Some(session) if session.is_expired() => {
                tracing::info!(user_id = %session.user.id, "stored session expired");
                self.client.clear_session().await;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    async fn send_sign_in_code(&self, email: &str) -> Result<(), AuthError> {
        let request = OtpRequest {
            email,
            create_user: false,
        };
        self.post("otp", Some(&request)).await?;
        Ok(())
    }

    async fn verify_sign_in_code(&self, email: &str, code: &str) -> Result<AuthSession, AuthError> {
        let request = VerifyRequest {
            kind: "email",
            email,
            token: code,
        };
        let response = self.post("verify", Some(&request)).await?;
        let body: VerifyResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Provider(format!("Failed to parse verify response: {}", e)))?;

        let session = body.into_session(email)?;
        self.client.set_session(session.clone()).await;
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        if self.client.session().await.is_none() {
            return Ok(());
        }
        let result = self.post::<()>("logout", None).await;
        // Local session is cleared even when the remote call fails.
        self.client.clear_session().await;
        result.map(|_| ())
    }
}
