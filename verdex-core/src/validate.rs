//! Form-level validation, run before any storage or network work.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::persistence::profile::Profile;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// One rejected field with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Field-level validation failure, surfaced as a 400 with per-field detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl std::error::Error for ValidationError {}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let joined: Vec<String> = self
            .fields
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", joined.join("; "))
    }
}

impl ValidationError {
    fn push(fields: &mut Vec<FieldError>, field: &'static str, message: impl Into<String>) {
        fields.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Profile fields are all optional, but present values must be well formed.
pub fn validate_profile(profile: &Profile) -> Result<(), ValidationError> {
    let mut fields = Vec::new();

    let email = profile.email.trim();
    if !email.is_empty() && !is_valid_email(email) {
        ValidationError::push(&mut fields, "email", "Please enter a valid email address.");
    }

    let phone = profile.phone.trim();
    if !phone.is_empty() {
        let digits = phone.chars().filter(char::is_ascii_digit).count();
        if digits < 7 || digits > 15 || phone.chars().any(|c| !c.is_ascii_digit() && c != '+')
        {
            ValidationError::push(&mut fields, "phone", "Please enter a valid phone number.");
        }
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_emails() {
        assert!(is_valid_email("akash@example.com"));
        assert!(is_valid_email("a.b+tag@mail.co.in"));
    }

    #[test]
    fn rejects_malformed_emails() {
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@signs.com"));
        assert!(!is_valid_email("spaces in@mail.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn empty_profile_is_valid() {
        assert!(validate_profile(&Profile::default()).is_ok());
    }

    #[test]
    fn reports_every_bad_field() {
        let err = validate_profile(&Profile {
            name: String::new(),
            email: "bad".into(),
            phone: "abc".into(),
        })
        .unwrap_err();
        assert_eq!(err.fields.len(), 2);
        assert_eq!(err.fields[0].field, "email");
        assert_eq!(err.fields[1].field, "phone");
    }
}
