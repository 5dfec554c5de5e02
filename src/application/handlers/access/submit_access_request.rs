//! SubmitAccessRequestHandler - Registration from the sign-in page.
//!
//! No session is needed; the visitor is not a member yet.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessRequest, RegistrationForm};
use crate::ports::AccessRequestRepository;

#[derive(Debug, Clone)]
pub struct SubmitAccessRequestCommand {
    pub form: RegistrationForm,
}

/// What happened to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(AccessRequest),
    /// A pending request for this email already exists; nothing was stored.
    AlreadyPending { email: String },
}

pub struct SubmitAccessRequestHandler {
    requests: Arc<dyn AccessRequestRepository>,
}

impl SubmitAccessRequestHandler {
    pub fn new(requests: Arc<dyn AccessRequestRepository>) -> Self {
        Self { requests }
    }

    pub async fn handle(&self, cmd: SubmitAccessRequestCommand) -> Result<SubmitOutcome, AccessError> {
        let request = cmd.form.submit()?;

        match self.requests.insert(&request).await {
            Ok(()) => {
                tracing::info!(
                    access_request_id = %request.id,
                    email = %request.email,
                    "Access request submitted"
                );
                Ok(SubmitOutcome::Submitted(request))
            }
            Err(err) if err.is_conflict() => {
                tracing::info!(email = %request.email, "Access request already pending");
                Ok(SubmitOutcome::AlreadyPending {
                    email: request.email,
                })
            }
            Err(err) => {
                tracing::warn!(email = %request.email, error = %err, "Access request not stored");
                Err(err.into())
            }
        }
    }
}
