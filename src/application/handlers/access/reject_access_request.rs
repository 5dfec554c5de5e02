//! RejectAccessRequestHandler - Admin declines a registration.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessRequest};
use crate::domain::foundation::{AccessRequestId, SessionContext};
use crate::ports::AccessRequestRepository;

#[derive(Debug, Clone)]
pub struct RejectAccessRequestCommand {
    pub request_id: AccessRequestId,
}

pub struct RejectAccessRequestHandler {
    requests: Arc<dyn AccessRequestRepository>,
}

impl RejectAccessRequestHandler {
    pub fn new(requests: Arc<dyn AccessRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: RejectAccessRequestCommand,
    ) -> Result<AccessRequest, AccessError> {
        ctx.require_admin("reject access requests")?;

        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| AccessError::not_found(cmd.request_id))?;

        request.reject()?;
        self.requests
            .update_status(&request.id, request.status)
            .await?;

        tracing::info!(
            access_request_id = %request.id,
            email = %request.email,
            rejected_by = %ctx.user_id(),
            "Access request rejected"
        );
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAccessRequestRepository;
    use crate::application::handlers::testing::{admin_ctx, member_ctx};
    use crate::domain::access::{AccessRequestStatus, RegistrationForm};

    async fn seeded() -> (Arc<InMemoryAccessRequestRepository>, AccessRequest) {
        let repo = Arc::new(InMemoryAccessRequestRepository::new());
        let request = RegistrationForm {
            email: "rob@example.com".to_string(),
            first_name: "Rob".to_string(),
            last_name: "Smith".to_string(),
            ..Default::default()
        }
        .submit()
        .unwrap();
        repo.insert(&request).await.unwrap();
        (repo, request)
    }

    #[tokio::test]
    async fn admin_rejects_pending_request() {
        let (repo, request) = seeded().await;
        let handler = RejectAccessRequestHandler::new(repo.clone());

        let rejected = handler
            .handle(&admin_ctx(), RejectAccessRequestCommand { request_id: request.id })
            .await
            .unwrap();

        assert_eq!(rejected.status, AccessRequestStatus::Rejected);
        let stored = repo.find_by_id(&request.id).await.unwrap().unwrap();
        assert_eq!(stored.status, AccessRequestStatus::Rejected);
    }

    #[tokio::test]
    async fn approved_request_cannot_be_rejected() {
        let (repo, request) = seeded().await;
        repo.update_status(&request.id, AccessRequestStatus::Approved)
            .await
            .unwrap();
        let handler = RejectAccessRequestHandler::new(repo);

        let result = handler
            .handle(&admin_ctx(), RejectAccessRequestCommand { request_id: request.id })
            .await;

        assert_eq!(
            result,
            Err(AccessError::invalid_transition(
                AccessRequestStatus::Approved,
                AccessRequestStatus::Rejected
            ))
        );
    }

    #[tokio::test]
    async fn members_cannot_reject() {
        let (repo, request) = seeded().await;
        let handler = RejectAccessRequestHandler::new(repo);

        let result = handler
            .handle(&member_ctx(), RejectAccessRequestCommand { request_id: request.id })
            .await;

        assert!(matches!(result, Err(AccessError::Forbidden(_))));
    }
}
