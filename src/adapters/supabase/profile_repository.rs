//! REST-backed profile repository.

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::Profile;
use crate::ports::ProfileRepository;

use super::client::{eq, SupabaseClient};
use super::rows::ProfileRow;

const TABLE: &str = "profiles";
const COLUMNS: &str = "id,email,first_name,last_name,avatar_url,role,is_active";

/// Profile repository over the `profiles` table.
#[derive(Clone)]
pub struct SupabaseProfileRepository {
    client: SupabaseClient,
}

impl SupabaseProfileRepository {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }

    async fn fetch(&self, query: &[(&str, String)], operation: &str) -> Result<Vec<Profile>, DomainError> {
        let builder = self
            .client
            .request(Method::GET, &self.client.rest_url(TABLE))
            .await
            .query(&[("select", COLUMNS)])
            .query(query);
        let response = self.client.send(builder, operation).await?;

        let rows: Vec<ProfileRow> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse profiles: {}", e)))?;

        rows.into_iter().map(Profile::try_from).collect()
    }

    /// PATCHes rows matching `filter` and returns how many were touched.
    async fn patch(
        &self,
        filter: (&str, String),
        body: serde_json::Value,
        operation: &str,
    ) -> Result<usize, DomainError> {
        let builder = self
            .client
            .request(Method::PATCH, &self.client.rest_url(TABLE))
            .await
            .query(&[filter, ("select", "id".to_string())])
            .header("Prefer", "return=representation")
            .json(&body);
        let response = self.client.send(builder, operation).await?;

        let touched: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| DomainError::database(format!("Failed to parse update result: {}", e)))?;
        Ok(touched.len())
    }

    async fn patch_one(&self, id: &UserId, body: serde_json::Value, operation: &str) -> Result<(), DomainError> {
        let touched = self.patch(("id", eq(id)), body, operation).await?;
        if touched == 0 {
            return Err(DomainError::new(
                ErrorCode::ProfileNotFound,
                format!("Profile not found: {}", id),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for SupabaseProfileRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Profile>, DomainError> {
        let mut found = self.fetch(&[("id", eq(id))], "find profile").await?;
        Ok(found.pop())
    }

    async fn list(&self) -> Result<Vec<Profile>, DomainError> {
        self.fetch(&[("order", "email.asc".to_string())], "list profiles")
            .await
    }

    async fn update_names(
        &self,
        id: &UserId,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<(), DomainError> {
        self.patch_one(
            id,
            json!({ "first_name": first_name, "last_name": last_name }),
            "update profile names",
        )
        .await
    }

    async fn set_avatar_url(&self, id: &UserId, avatar_url: &str) -> Result<(), DomainError> {
        self.patch_one(id, json!({ "avatar_url": avatar_url }), "set avatar url")
            .await
    }

    async fn set_active(&self, id: &UserId, is_active: bool) -> Result<(), DomainError> {
        self.patch_one(id, json!({ "is_active": is_active }), "set profile active")
            .await
    }

    async fn activate_by_email(&self, email: &str) -> Result<usize, DomainError> {
        let touched = self
            .patch(("email", eq(email)), json!({ "is_active": true }), "activate profile")
            .await?;
        tracing::debug!(email, touched, "activation by email applied");
        Ok(touched)
    }
}
