//! REST-backed access request repository.

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::access::{AccessRequest, AccessRequestStatus};
use crate::domain::foundation::{AccessRequestId, DomainError, ErrorCode};
use crate::ports::AccessRequestRepository;

use super::client::{eq, SupabaseClient};
use super::rows::{AccessRequestRow, NewAccessRequestRow};

const TABLE: &str = "access_requests";
const COLUMNS: &str = "id,email,first_name,last_name,phone,invite_code,status,created_at";

/// Access request repository over the `access_requests` table.
///
/// The table carries a unique index on pending emails, so a second pending
/// request for the same address comes back as `AlreadyExists`.
#[derive(Clone)]
pub struct SupabaseAccessRequestRepository {
    client: SupabaseClient,
}

impl SupabaseAccessRequestRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, query: &[(&str, String)], operation: &str) -> Result<Vec<AccessRequest>, DomainError> {
        let builder = self
            .client
            .request(Method::GET, &self.client.rest_url(TABLE))
            .await
            .query(&[("select", COLUMNS)])
            .query(query);
        let response = self.client.send(builder, operation).await?;

        let rows: Vec<AccessRequestRow> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse access requests: {}", e)))?;

        rows.into_iter().map(AccessRequest::try_from).collect()
    }
}

#[async_trait]
impl AccessRequestRepository for SupabaseAccessRequestRepository {
    async fn insert(&self, request: &AccessRequest) -> Result<(), DomainError> {
        let builder = self
            .client
            .request(Method::POST, &self.client.rest_url(TABLE))
            .await
            .header("Prefer", "return=minimal")
            .json(&NewAccessRequestRow::from(request));
        self.client.send(builder, "insert access request").await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<AccessRequest>, DomainError> {
        self.fetch(&[("order", "created_at.desc".to_string())], "list access requests")
            .await
    }

    async fn find_by_id(&self, id: &AccessRequestId) -> Result<Option<AccessRequest>, DomainError> {
        let mut found = self.fetch(&[("id", eq(id))], "find access request").await?;
        Ok(found.pop())
    }

    async fn update_status(
        &self,
        id: &AccessRequestId,
        status: AccessRequestStatus,
    ) -> Result<(), DomainError> {
        let builder = self
            .client
            .request(Method::PATCH, &self.client.rest_url(TABLE))
            .await
            .query(&[("id", eq(id)), ("select", "id".to_string())])
            .header("Prefer", "return=representation")
            .json(&serde_json::json!({ "status": status.as_str() }));
        let response = self.client.send(builder, "update access request").await?;

        let touched: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse update result: {}", e)))?;
        if touched.is_empty() {
            return Err(DomainError::new(
                ErrorCode::AccessRequestNotFound,
                format!("Access request not found: {}", id),
            ));
        }

        tracing::debug!(request_id = %id, status = %status, "access request status stored");
        Ok(())
    }
}
