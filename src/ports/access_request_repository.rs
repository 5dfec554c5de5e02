//! Access request repository port.

use async_trait::async_trait;

use crate::domain::access::{AccessRequest, AccessRequestStatus};
use crate::domain::foundation::{AccessRequestId, DomainError};

/// Repository port for access requests.
#[async_trait]
pub trait AccessRequestRepository: Send + Sync {
    /// Store a new request.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a pending request with the same email exists
    async fn insert(&self, request: &AccessRequest) -> Result<(), DomainError>;

    /// All requests, newest first.
    async fn list(&self) -> Result<Vec<AccessRequest>, DomainError>;

    async fn find_by_id(&self, id: &AccessRequestId) -> Result<Option<AccessRequest>, DomainError>;

    /// Persist a reviewed status.
    ///
    /// # Errors
    ///
    /// - `AccessRequestNotFound` if the request doesn't exist
    async fn update_status(
        &self,
        id: &AccessRequestId,
        status: AccessRequestStatus,
    ) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_request_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AccessRequestRepository) {}
    }
}
