//! Request field checks shared by the API handlers.
//!
//! Request DTOs deserialize every field as `Option<T>` so that an absent field
//! becomes a [`CoreError::Validation`] instead of a framework-level rejection.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Unwrap a required field, failing when it was absent from the request body.
pub fn required<T>(value: Option<T>, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::Validation(format!("Missing required field '{field}'")))
}

/// Like [`required`], but an empty or whitespace-only string also counts as missing.
pub fn required_non_blank(value: Option<String>, field: &str) -> Result<String, CoreError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation(format!(
            "Field '{field}' is required and must not be blank"
        ))),
    }
}

/// Reject a present-but-blank value for a field that may otherwise be omitted.
pub fn non_blank_if_present(value: Option<&str>, field: &str) -> Result<(), CoreError> {
    match value {
        Some(v) if v.trim().is_empty() => Err(CoreError::Validation(format!(
            "Field '{field}' must not be blank"
        ))),
        _ => Ok(()),
    }
}

/// Convert `validator` derive output into a single validation error.
pub fn from_validation_errors(errors: ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn required_passes_value_through() {
        assert_eq!(required(Some(7), "rating").unwrap(), 7);
    }

    #[test]
    fn required_names_the_missing_field() {
        let err = required::<String>(None, "email").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("'email'"));
    }

    #[test]
    fn blank_strings_are_treated_as_missing() {
        assert!(required_non_blank(Some("   ".into()), "name").is_err());
        assert!(required_non_blank(Some(String::new()), "name").is_err());
        assert!(required_non_blank(None, "name").is_err());
        assert_eq!(
            required_non_blank(Some("Kayaking".into()), "name").unwrap(),
            "Kayaking"
        );
    }

    #[test]
    fn optional_fields_only_fail_when_blank() {
        assert!(non_blank_if_present(None, "name").is_ok());
        assert!(non_blank_if_present(Some("Safari"), "name").is_ok());
        assert!(non_blank_if_present(Some(""), "name").is_err());
    }
}
