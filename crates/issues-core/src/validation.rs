//! Validation helpers for issue creation.
//!
//! Only creation is validated; parsed and edited records are taken as is.

use crate::error::ValidationError;
use crate::model::IssueDraft;

/// Minimum title length, in characters, after trimming.
pub const MIN_TITLE_CHARS: usize = 3;

/// Validate a title for creation.
///
/// # Errors
///
/// Returns a `ValidationError` on the `title` field if the trimmed title is
/// empty or shorter than [`MIN_TITLE_CHARS`].
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new("title", "is required"));
    }
    if trimmed.chars().count() < MIN_TITLE_CHARS {
        return Err(ValidationError::new(
            "title",
            format!("must be at least {MIN_TITLE_CHARS} characters"),
        ));
    }
    Ok(())
}

/// Validates issue drafts.
pub struct IssueValidator;

impl IssueValidator {
    /// Validate a draft and return all validation errors found.
    ///
    /// # Errors
    ///
    /// Returns a `Vec<ValidationError>` if any validation rules are violated.
    pub fn validate_draft(draft: &IssueDraft) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(err) = validate_title(&draft.title) {
            errors.push(err);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_required() {
        let err = validate_title("   ").unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.message, "is required");
    }

    #[test]
    fn title_too_short() {
        let err = validate_title("ab").unwrap_err();
        assert_eq!(err.to_string(), "title: must be at least 3 characters");
        assert!(validate_title("  ab  ").is_err());
    }

    #[test]
    fn title_long_enough() {
        assert!(validate_title("abc").is_ok());
        assert!(validate_title(" abc ").is_ok());
    }

    #[test]
    fn title_counts_characters_not_bytes() {
        // Two characters, six bytes.
        assert!(validate_title("日本").is_err());
        assert!(validate_title("日本語").is_ok());
    }

    #[test]
    fn draft_validation_collects_title_error() {
        let draft = IssueDraft {
            title: "x".into(),
            description: String::new(),
        };
        let errors = IssueValidator::validate_draft(&draft).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
    }
}
