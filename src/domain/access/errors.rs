//! Access-request error types.

use thiserror::Error;

use crate::domain::foundation::{AccessRequestId, DomainError, ErrorCode, ValidationError};

use super::AccessRequestStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error("Access request {0} not found")]
    NotFound(AccessRequestId),

    #[error("Cannot move access request from {from} to {to}")]
    InvalidTransition {
        from: AccessRequestStatus,
        to: AccessRequestStatus,
    },

    #[error("{0}")]
    Forbidden(String),

    #[error(transparent)]
    Store(DomainError),
}

impl AccessError {
    pub fn not_found(id: AccessRequestId) -> Self {
        AccessError::NotFound(id)
    }

    pub fn invalid_transition(from: AccessRequestStatus, to: AccessRequestStatus) -> Self {
        AccessError::InvalidTransition { from, to }
    }
}

impl From<DomainError> for AccessError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::Forbidden => AccessError::Forbidden(err.message),
            _ => AccessError::Store(err),
        }
    }
}

impl From<AccessError> for DomainError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::Invalid(validation) => validation.into(),
            AccessError::NotFound(id) => {
                DomainError::new(ErrorCode::AccessRequestNotFound, err.to_string())
                    .with_detail("access_request_id", id.to_string())
            }
            AccessError::InvalidTransition { .. } => {
                DomainError::new(ErrorCode::InvalidStateTransition, err.to_string())
            }
            AccessError::Forbidden(reason) => DomainError::forbidden(reason),
            AccessError::Store(inner) => inner,
        }
    }
}
