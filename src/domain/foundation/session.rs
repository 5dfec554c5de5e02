//! Explicit session context for handlers.
//!
//! Instead of handlers looking up "who is signed in" from shared state, the
//! caller resolves the session once (see `ResolveAccessGateHandler`) and
//! passes a `SessionContext` into every command and query.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AuthenticatedUser, DomainError, UserId};

/// Role of an approved user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Member,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Member => write!(f, "member"),
        }
    }
}

/// Who is acting, for an approved and active user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user: AuthenticatedUser,
    pub role: UserRole,
    display_name: String,
}

impl SessionContext {
    pub fn new(user: AuthenticatedUser, role: UserRole, display_name: impl Into<String>) -> Self {
        Self {
            user,
            role,
            display_name: display_name.into(),
        }
    }

    pub fn user_id(&self) -> &UserId {
        &self.user.id
    }

    /// Name recorded as `created_by` on new bookings.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Returns `Forbidden` unless the actor is an admin.
    pub fn require_admin(&self, action: &str) -> Result<(), DomainError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(DomainError::forbidden(format!("Only admins can {}", action))
                .with_detail("user_id", self.user.id.to_string()))
        }
    }
}
