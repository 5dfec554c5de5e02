//! In-memory access request repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::access::{AccessRequest, AccessRequestStatus};
use crate::domain::foundation::{AccessRequestId, DomainError, ErrorCode};
use crate::ports::AccessRequestRepository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryAccessRequestRepository {
    requests: Arc<RwLock<Vec<AccessRequest>>>,
}

impl InMemoryAccessRequestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_requests(requests: Vec<AccessRequest>) -> Self {
        Self {
            requests: Arc::new(RwLock::new(requests)),
        }
    }
}

#[async_trait]
impl AccessRequestRepository for InMemoryAccessRequestRepository {
    async fn insert(&self, request: &AccessRequest) -> Result<(), DomainError> {
        let mut requests = self.requests.write().await;
        let duplicate = requests
            .iter()
            .any(|r| r.is_pending() && r.email == request.email);
        if duplicate {
            return Err(DomainError::new(
                ErrorCode::AlreadyExists,
                "An access request for this email is already pending",
            )
            .with_detail("email", request.email.clone()));
        }
        requests.push(request.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<AccessRequest>, DomainError> {
        let mut requests: Vec<AccessRequest> =
            self.requests.read().await.iter().rev().cloned().collect();
        requests.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(requests)
    }

    async fn find_by_id(&self, id: &AccessRequestId) -> Result<Option<AccessRequest>, DomainError> {
        let requests = self.requests.read().await;
        Ok(requests.iter().find(|r| &r.id == id).cloned())
    }

    async fn update_status(
        &self,
        id: &AccessRequestId,
        status: AccessRequestStatus,
    ) -> Result<(), DomainError> {
        let mut requests = self.requests.write().await;
        let request = requests.iter_mut().find(|r| &r.id == id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::AccessRequestNotFound,
                format!("Access request {} not found", id),
            )
        })?;
        request.status = status;
        Ok(())
    }
}
