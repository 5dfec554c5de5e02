//! Access request aggregate and the registration form that creates it.
//!
//! Nobody signs up directly. A visitor submits a registration form, an
//! admin reviews it, and approval activates any profile with the same
//! email.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    normalize_email, AccessRequestId, StateMachine, Timestamp, ValidationError,
};

use super::{AccessError, AccessRequestStatus};

/// Raw registration input as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegistrationForm {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub invite_code: String,
}

impl RegistrationForm {
    /// Checks the form and returns a new pending request.
    ///
    /// The email is trimmed and lowercased. Blank optional fields become
    /// `None`.
    pub fn submit(&self) -> Result<AccessRequest, ValidationError> {
        let email = normalize_email(&self.email)?;
        let first_name = required(&self.first_name, "first_name")?;
        let last_name = required(&self.last_name, "last_name")?;

        Ok(AccessRequest {
            id: AccessRequestId::new(),
            email,
            first_name,
            last_name,
            phone: optional(&self.phone),
            invite_code: optional(&self.invite_code),
            status: AccessRequestStatus::Pending,
            created_at: Timestamp::now(),
        })
    }
}

fn required(value: &str, field: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::empty_field(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// A registration awaiting (or past) admin review.
///
/// # Invariants
///
/// - `email` is lowercase and well-formed
/// - `first_name` and `last_name` are non-blank
/// - `status` only moves along `AccessRequestStatus` transitions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRequest {
    pub id: AccessRequestId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub invite_code: Option<String>,
    pub status: AccessRequestStatus,
    pub created_at: Timestamp,
}

impl AccessRequest {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_pending(&self) -> bool {
        self.status == AccessRequestStatus::Pending
    }

    /// Marks the request approved. Approving twice is allowed.
    pub fn approve(&mut self) -> Result<(), AccessError> {
        self.move_to(AccessRequestStatus::Approved)
    }

    /// Marks a pending request rejected.
    pub fn reject(&mut self) -> Result<(), AccessError> {
        self.move_to(AccessRequestStatus::Rejected)
    }

    fn move_to(&mut self, target: AccessRequestStatus) -> Result<(), AccessError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| AccessError::invalid_transition(self.status, target))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            email: "  Zack@Example.com ".to_string(),
            first_name: " Zack ".to_string(),
            last_name: "Miller".to_string(),
            phone: "   ".to_string(),
            invite_code: "LAKE2026".to_string(),
        }
    }

    #[test]
    fn submit_normalizes_fields() {
        let request = form().submit().unwrap();
        assert_eq!(request.email, "zack@example.com");
        assert_eq!(request.first_name, "Zack");
        assert_eq!(request.phone, None);
        assert_eq!(request.invite_code.as_deref(), Some("LAKE2026"));
        assert_eq!(request.status, AccessRequestStatus::Pending);
        assert_eq!(request.full_name(), "Zack Miller");
    }

    #[test]
    fn submit_rejects_bad_email() {
        let mut bad = form();
        bad.email = "zack@example".to_string();
        assert!(matches!(
            bad.submit(),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn submit_requires_names() {
        let mut bad = form();
        bad.last_name = "  ".to_string();
        assert_eq!(bad.submit(), Err(ValidationError::empty_field("last_name")));
    }

    #[test]
    fn approve_then_approve_again() {
        let mut request = form().submit().unwrap();
        request.approve().unwrap();
        request.approve().unwrap();
        assert_eq!(request.status, AccessRequestStatus::Approved);
        assert!(!request.is_pending());
    }

    #[test]
    fn rejected_request_cannot_be_approved() {
        let mut request = form().submit().unwrap();
        request.reject().unwrap();
        assert_eq!(
            request.approve(),
            Err(AccessError::invalid_transition(
                AccessRequestStatus::Rejected,
                AccessRequestStatus::Approved
            ))
        );
        assert_eq!(request.status, AccessRequestStatus::Rejected);
    }

    #[test]
    fn approved_request_cannot_be_rejected() {
        let mut request = form().submit().unwrap();
        request.approve().unwrap();
        assert!(request.reject().is_err());
    }
}
