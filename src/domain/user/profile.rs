//! Member profile aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AuthenticatedUser, SessionContext, UserId, UserRole};

const FALLBACK_NAME: &str = "Member";

/// A member profile.
///
/// Profiles are created by the identity provider on first sign-up and stay
/// inactive until an access request with the same email is approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_active: bool,
}

impl Profile {
    /// A fresh, inactive member profile.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: Some(email.into()),
            first_name: None,
            last_name: None,
            avatar_url: None,
            role: UserRole::Member,
            is_active: false,
        }
    }

    pub fn with_role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_names(mut self, first_name: &str, last_name: &str) -> Self {
        self.set_names(first_name, last_name);
        self
    }

    pub fn activated(mut self) -> Self {
        self.is_active = true;
        self
    }

    /// Sets both names; blank values clear the field.
    pub fn set_names(&mut self, first_name: &str, last_name: &str) {
        self.first_name = clean_name(first_name);
        self.last_name = clean_name(last_name);
    }

    /// "First Last", else the email, else "Member".
    pub fn display_name(&self) -> String {
        display_name(
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
        )
    }

    /// Session context for this profile's signed-in user.
    pub fn session_context(&self, user: AuthenticatedUser) -> SessionContext {
        SessionContext::new(user, self.role, self.display_name())
    }
}

/// Trimmed name, `None` when blank.
pub fn clean_name(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Joins the non-blank name parts, falling back to the email and then
/// to "Member".
pub fn display_name(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> String {
    let name = [first, last]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if !name.is_empty() {
        return name;
    }
    match email.map(str::trim) {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => FALLBACK_NAME.to_string(),
    }
}
