use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use super::form::FormData;

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Reasons a form is rejected before anything is sent. `Display` is the
/// message shown to the visitor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill all fields")]
    MissingField,
    #[error("Invalid email")]
    InvalidEmail,
}

pub fn validate(form: &FormData) -> Result<(), ValidationError> {
    let missing = [&form.name, &form.email, &form.message]
        .iter()
        .any(|v| v.trim().is_empty());
    if missing {
        return Err(ValidationError::MissingField);
    }
    if !EMAIL_SHAPE.is_match(&form.email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> FormData {
        FormData {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&form("Jo", "jo@x.com", "Hi")), Ok(()));
        assert_eq!(validate(&form("Jo", "jo.doe@mail.example.org", "Hi")), Ok(()));
    }

    #[test]
    fn test_any_empty_field_is_missing() {
        let cases = [
            form("", "jo@x.com", "Hi"),
            form("Jo", "", "Hi"),
            form("Jo", "jo@x.com", ""),
            form("", "", ""),
            form("   ", "jo@x.com", "Hi"),
            form("Jo", "jo@x.com", "\n\t"),
        ];
        for case in cases {
            assert_eq!(
                validate(&case),
                Err(ValidationError::MissingField),
                "{case:?}"
            );
        }
    }

    #[test]
    fn test_missing_field_wins_over_bad_email() {
        assert_eq!(
            validate(&form("", "not-an-email", "Hi")),
            Err(ValidationError::MissingField)
        );
    }

    #[test]
    fn test_bad_email_shapes() {
        let bad = [
            "not-an-email",
            "jo.x.com",
            "jo@x",
            "jo@xcom",
            "@x.com",
            "jo@.com",
            "jo@x.",
            "jo@@x.com",
            "jo@x@y.com",
            "jo doe@x.com",
            " jo@x.com",
        ];
        for email in bad {
            assert_eq!(
                validate(&form("Jo", email, "Hi")),
                Err(ValidationError::InvalidEmail),
                "{email}"
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::MissingField.to_string(),
            "Please fill all fields"
        );
        assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email");
    }
}
