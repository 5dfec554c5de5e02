//! Shared HTTP client for the hosted backend.
//!
//! Every request carries the project's `apikey` header and a bearer token.
//! The bearer is the signed-in user's access token when there is one,
//! otherwise the anon key. The identity adapter writes the session; the
//! record store and file storage adapters read it.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::BackendConfig;
use crate::domain::foundation::{AuthSession, DomainError, ErrorCode};

/// Connection settings for the hosted backend.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, without a trailing slash.
    pub base_url: String,

    /// Public anonymous key.
    pub anon_key: SecretString,

    pub timeout: Duration,
}

impl SupabaseConfig {
    pub fn new(base_url: impl Into<String>, anon_key: SecretString) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            anon_key,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn from_backend(backend: &BackendConfig) -> Self {
        Self::new(&backend.url, backend.anon_key_secret()).with_timeout(backend.request_timeout())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Client shared by all hosted adapters.
#[derive(Clone)]
pub struct SupabaseClient {
    config: Arc<SupabaseConfig>,
    http: reqwest::Client,
    session: Arc<RwLock<Option<AuthSession>>>,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::InternalError,
                    format!("Failed to build HTTP client: {}", e),
                )
            })?;

        Ok(Self {
            config: Arc::new(config),
            http,
            session: Arc::new(RwLock::new(None)),
        })
    }

    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.base_url, table)
    }

    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.base_url, path)
    }

    pub fn storage_url(&self, path: &str) -> String {
        format!("{}/storage/v1/{}", self.config.base_url, path)
    }

    pub async fn session(&self) -> Option<AuthSession> {
        self.session.read().await.clone()
    }

    pub async fn set_session(&self, session: AuthSession) {
        *self.session.write().await = Some(session);
    }

    pub async fn clear_session(&self) {
        *self.session.write().await = None;
    }

    /// A request with `apikey` and bearer headers set.
    pub async fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let bearer = match self.session.read().await.as_ref() {
            Some(session) => session.access_token.expose_secret().clone(),
            None => self.config.anon_key.expose_secret().clone(),
        };

        self.http
            .request(method, url)
            .header("apikey", self.config.anon_key.expose_secret())
            .bearer_auth(bearer)
    }

    /// Sends a record store request, mapping failures to `DomainError`.
    pub async fn send(&self, builder: RequestBuilder, operation: &str) -> Result<Response, DomainError> {
        let response = builder.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, "record store request failed");
            DomainError::database(format!("{} failed: {}", operation, e))
        })?;

        let status = response.status();
        tracing::debug!(operation, status = status.as_u16(), "record store responded");

        if status.is_success() {
            return Ok(response);
        }

        let body = error_body(response.text().await, operation);
        let error = map_store_error(status, &body);
        tracing::warn!(operation, code = %error.code, error = %error.message, "record store rejected request");
        Err(error)
    }
}

/// The body of a failed response, or `""` if it could not be read.
pub(crate) fn error_body(read: reqwest::Result<String>, operation: &str) -> String {
    match read {
        Ok(body) => body,
        Err(e) => {
            tracing::debug!(operation, error = %e, "failed to read error response body");
            String::new()
        }
    }
}

/// Error body returned by the REST endpoints.
#[derive(Debug, Default, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Maps a failed REST response to a domain error.
///
/// Unique-constraint violations (`23505`) become `AlreadyExists`; row-level
/// security refusals become `Forbidden`.
pub(crate) fn map_store_error(status: StatusCode, body: &str) -> DomainError {
    let parsed: StoreErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Record store returned {}", status));

    let error = match parsed.code.as_deref() {
        Some("23505") => DomainError::new(ErrorCode::AlreadyExists, message),
        Some("42501") => DomainError::forbidden(message),
        _ if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN => {
            DomainError::forbidden(message)
        }
        _ => DomainError::database(message),
    };

    match parsed.code {
        Some(code) => error.with_detail("store_code", code),
        None => error,
    }
}

/// An `eq.` filter value for a REST query string.
pub(crate) fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SupabaseClient {
        let config = SupabaseConfig::new(
            "https://lake.supabase.co/",
            SecretString::new("anon".to_string()),
        );
        SupabaseClient::new(config).unwrap()
    }

    #[test]
    fn builds_endpoint_urls() {
        let client = client();
        assert_eq!(client.rest_url("bookings"), "https://lake.supabase.co/rest/v1/bookings");
        assert_eq!(client.auth_url("otp"), "https://lake.supabase.co/auth/v1/otp");
        assert_eq!(
            client.storage_url("object/avatars/u1/1.png"),
            "https://lake.supabase.co/storage/v1/object/avatars/u1/1.png"
        );
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = SupabaseConfig::new("https://a.example", SecretString::new("k".to_string()))
            .with_base_url("http://127.0.0.1:54321/");
        assert_eq!(config.base_url, "http://127.0.0.1:54321");
    }

    #[test]
    fn unique_violation_is_conflict() {
        let err = map_store_error(
            StatusCode::CONFLICT,
            r#"{"code":"23505","message":"duplicate key value violates unique constraint"}"#,
        );
        assert!(err.is_conflict());
        assert_eq!(err.details.get("store_code").map(String::as_str), Some("23505"));
    }

    #[test]
    fn permission_denied_is_forbidden() {
        let err = map_store_error(StatusCode::FORBIDDEN, r#"{"code":"42501","message":"denied"}"#);
        assert_eq!(err.code, ErrorCode::Forbidden);

        let err = map_store_error(StatusCode::UNAUTHORIZED, "");
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn unknown_failures_are_database_errors() {
        let err = map_store_error(StatusCode::INTERNAL_SERVER_ERROR, "not json");
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert!(err.message.contains("500"));
    }

    #[test]
    fn unreadable_error_body_falls_back_to_status_message() {
        let read_failure = reqwest::Client::new()
            .get("not a url")
            .build()
            .map(|_| String::new());
        assert!(read_failure.is_err());

        let body = error_body(read_failure, "list bookings");
        assert_eq!(body, "");

        let err = map_store_error(StatusCode::BAD_GATEWAY, &body);
        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Record store returned 502 Bad Gateway");
    }

    #[test]
    fn readable_error_body_passes_through() {
        assert_eq!(error_body(Ok("{}".to_string()), "list bookings"), "{}");
    }

    #[test]
    fn eq_filter_format() {
        assert_eq!(eq("abc"), "eq.abc");
    }

    #[tokio::test]
    async fn session_round_trips() {
        use crate::domain::foundation::{AuthenticatedUser, UserId};

        let client = client();
        assert!(client.session().await.is_none());

        let user = AuthenticatedUser::new(UserId::new("u1").unwrap(), "zack@example.com");
        client.set_session(AuthSession::new(user, "token")).await;
        assert!(client.session().await.is_some());

        client.clear_session().await;
        assert!(client.session().await.is_none());
    }
}
