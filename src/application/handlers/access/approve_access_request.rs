//! ApproveAccessRequestHandler - Admin approval and profile activation.
//!
//! Approval is stored first. Activation runs afterwards and its failure
//! does not undo the approval; approving again retries it.

use std::sync::Arc;

use crate::domain::access::{AccessError, AccessRequest};
use crate::domain::foundation::{AccessRequestId, SessionContext};
use crate::ports::{AccessRequestRepository, ProfileRepository};

#[derive(Debug, Clone)]
pub struct ApproveAccessRequestCommand {
    pub request_id: AccessRequestId,
}

/// Result of activating profiles for an approved email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// This many profiles were switched on.
    Activated(usize),
    /// No account exists for the email yet; it activates on a later approval.
    NoProfileYet,
    /// The approval stands but activation failed.
    ActivationFailed(String),
}

#[derive(Debug, Clone)]
pub struct ApproveAccessRequestResult {
    pub request: AccessRequest,
    pub activation: ActivationOutcome,
}

pub struct ApproveAccessRequestHandler {
    requests: Arc<dyn AccessRequestRepository>,
    profiles: Arc<dyn ProfileRepository>,
}

impl ApproveAccessRequestHandler {
    pub fn new(
        requests: Arc<dyn AccessRequestRepository>,
        profiles: Arc<dyn ProfileRepository>,
    ) -> Self {
        Self { requests, profiles }
    }

    pub async fn handle(
        &self,
        ctx: &SessionContext,
        cmd: ApproveAccessRequestCommand,
    ) -> Result<ApproveAccessRequestResult, AccessError> {
        ctx.require_admin("approve access requests")?;

        let mut request = self
            .requests
            .find_by_id(&cmd.request_id)
            .await?
            .ok_or_else(|| AccessError::not_found(cmd.request_id))?;

        request.approve()?;
        self.requests
            .update_status(&request.id, request.status)
            .await?;

        tracing::info!(
            access_request_id = %request.id,
            email = %request.email,
            approved_by = %ctx.user_id(),
            "Access request approved"
        );

        let activation = match self.profiles.activate_by_email(&request.email).await {
            Ok(0) => {
                tracing::info!(email = %request.email, "No profile to activate yet");
                ActivationOutcome::NoProfileYet
            }
            Ok(count) => {
                tracing::info!(email = %request.email, count, "Profiles activated");
                ActivationOutcome::Activated(count)
            }
            Err(err) => {
                tracing::warn!(email = %request.email, error = %err, "Profile activation failed");
                ActivationOutcome::ActivationFailed(err.message)
            }
        };

        Ok(ApproveAccessRequestResult {
            request,
            activation,
        })
    }
}
