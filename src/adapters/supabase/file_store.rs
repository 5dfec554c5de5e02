//! Object storage for avatar images.

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::FileStore;

use super::client::{error_body, SupabaseClient};

/// File store over one public storage bucket.
///
/// Uploads overwrite existing objects at the same path.
#[derive(Clone)]
pub struct SupabaseFileStore {
    client: SupabaseClient,
    bucket: String,
}

impl SupabaseFileStore {
    pub fn new(client: SupabaseClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn object_url(&self, path: &str) -> String {
        self.client
            .storage_url(&format!("object/{}/{}", self.bucket, path.trim_start_matches('/')))
    }
}

#[async_trait]
impl FileStore for SupabaseFileStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), DomainError> {
        let size = bytes.len();
        let response = self
            .client
            .request(Method::POST, &self.object_url(path))
            .await
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(bucket = %self.bucket, path, error = %e, "upload request failed");
                DomainError::new(ErrorCode::StorageError, format!("Upload failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body(response.text().await, "upload avatar");
            tracing::warn!(bucket = %self.bucket, path, status = status.as_u16(), error = %body, "upload rejected");
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Upload rejected with status {}", status),
            )
            .with_detail("path", path));
        }

        tracing::debug!(bucket = %self.bucket, path, size, "object uploaded");
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        self.client.storage_url(&format!(
            "object/public/{}/{}",
            self.bucket,
            path.trim_start_matches('/')
        ))
    }
}
