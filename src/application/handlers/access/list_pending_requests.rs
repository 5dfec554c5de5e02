//! ListPendingRequestsHandler - The admin review queue.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessRequest};
use crate::domain::foundation::SessionContext;
use crate::ports::AccessRequestRepository;

pub struct ListPendingRequestsHandler {
    requests: Arc<dyn AccessRequestRepository>,
}

impl ListPendingRequestsHandler {
    pub fn new(requests: Arc<dyn AccessRequestRepository>) -> Self {
        Self { requests }
    }

    /// Pending requests, newest first.
    pub async fn handle(&self, ctx: &SessionContext) -> Result<Vec<AccessRequest>, AccessError> {
        ctx.require_admin("review access requests")?;

        let requests = self.requests.list().await?;
        Ok(requests.into_iter().filter(AccessRequest::is_pending).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryAccessRequestRepository;
    use crate::application::handlers::testing::{admin_ctx, member_ctx};
    use crate::domain::access::{AccessRequestStatus, RegistrationForm};

    async fn seeded() -> Arc<InMemoryAccessRequestRepository> {
        let repo = Arc::new(InMemoryAccessRequestRepository::new());
        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            let request = RegistrationForm {
                email: email.to_string(),
                first_name: "A".to_string(),
                last_name: "B".to_string(),
                ..Default::default()
            }
            .submit()
            .unwrap();
            repo.insert(&request).await.unwrap();
        }
        repo
    }

    #[tokio::test]
    async fn admin_sees_only_pending_newest_first() {
        let repo = seeded().await;
        let all = repo.list().await.unwrap();
        let reviewed = all.iter().find(|r| r.email == "b@example.com").unwrap();
        repo.update_status(&reviewed.id, AccessRequestStatus::Rejected)
            .await
            .unwrap();

        let handler = ListPendingRequestsHandler::new(repo);
        let pending = handler.handle(&admin_ctx()).await.unwrap();

        let emails: Vec<&str> = pending.iter().map(|r| r.email.as_str()).collect();
        assert_eq!(emails, vec!["c@example.com", "a@example.com"]);
    }

    #[tokio::test]
    async fn members_cannot_review() {
        let handler = ListPendingRequestsHandler::new(seeded().await);
        assert!(matches!(
            handler.handle(&member_ctx()).await,
            Err(AccessError::Forbidden(_))
        ));
    }
}
