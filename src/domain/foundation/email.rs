//! Email address checks shared by registration and sign-in.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ValidationError;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile"));

/// Returns true if `value` looks like `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Trims and lowercases `raw`, then checks its shape.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Err(ValidationError::empty_field("email"));
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::invalid_format(
            "email",
            "Please enter a valid email address",
        ));
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("zack@example.com"));
        assert!(is_valid_email("first.last@mail.example.co.uk"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for bad in ["", "zack", "zack@", "@example.com", "zack@example", "za ck@example.com", "a@b@c.com"] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Zack@Example.COM ").unwrap(),
            "zack@example.com"
        );
    }

    #[test]
    fn normalize_reports_blank_as_empty_field() {
        assert_eq!(
            normalize_email("   "),
            Err(ValidationError::empty_field("email"))
        );
    }
}
