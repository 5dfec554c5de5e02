//! Access request review states.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Review status of an access request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessRequestStatus {
    /// Submitted, waiting for an admin.
    #[default]
    Pending,

    /// Admin approved; matching profiles are activated.
    Approved,

    /// Admin declined. Final.
    Rejected,
}

impl AccessRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessRequestStatus::Pending => "pending",
            AccessRequestStatus::Approved => "approved",
            AccessRequestStatus::Rejected => "rejected",
        }
    }

    /// Parses the stored lowercase form.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(AccessRequestStatus::Pending),
            "approved" => Some(AccessRequestStatus::Approved),
            "rejected" => Some(AccessRequestStatus::Rejected),
            _ => None,
        }
    }
}

impl fmt::Display for AccessRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for AccessRequestStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use AccessRequestStatus::*;
        matches!(
            (self, target),
            (Pending, Approved)
                | (Pending, Rejected)
                // Re-approval retries profile activation
                | (Approved, Approved)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use AccessRequestStatus::*;
        match self {
            Pending => vec![Approved, Rejected],
            Approved => vec![Approved],
            Rejected => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_be_approved() {
        let status = AccessRequestStatus::Pending;
        assert_eq!(
            status.transition_to(AccessRequestStatus::Approved),
            Ok(AccessRequestStatus::Approved)
        );
    }

    #[test]
    fn pending_can_be_rejected() {
        let status = AccessRequestStatus::Pending;
        assert_eq!(
            status.transition_to(AccessRequestStatus::Rejected),
            Ok(AccessRequestStatus::Rejected)
        );
    }

    #[test]
    fn approved_can_be_approved_again() {
        let status = AccessRequestStatus::Approved;
        assert!(status.can_transition_to(&AccessRequestStatus::Approved));
    }

    #[test]
    fn approved_cannot_be_rejected() {
        let status = AccessRequestStatus::Approved;
        assert!(status.transition_to(AccessRequestStatus::Rejected).is_err());
    }

    #[test]
    fn rejected_is_terminal() {
        let status = AccessRequestStatus::Rejected;
        assert!(status.is_terminal());
        assert!(status.transition_to(AccessRequestStatus::Approved).is_err());
    }

    #[test]
    fn nothing_returns_to_pending() {
        for status in [
            AccessRequestStatus::Pending,
            AccessRequestStatus::Approved,
            AccessRequestStatus::Rejected,
        ] {
            assert!(!status.can_transition_to(&AccessRequestStatus::Pending));
        }
    }

    #[test]
    fn stored_form_round_trips() {
        for status in [
            AccessRequestStatus::Pending,
            AccessRequestStatus::Approved,
            AccessRequestStatus::Rejected,
        ] {
            assert_eq!(AccessRequestStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(AccessRequestStatus::parse("Approved"), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&AccessRequestStatus::Rejected).unwrap();
        assert_eq!(json, "\"rejected\"");
    }
}
