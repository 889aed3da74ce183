//! Domain error taxonomy.
//!
//! Ordinary denials are `false` from the policy predicates. These errors are
//! what request handlers surface to the user.

use thiserror::Error;

use crate::models::ReportStatus;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Surfaced without detail about which rule failed.
    #[error("Not authorized to perform this action")]
    PolicyDenied,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition { from: ReportStatus, to: ReportStatus },

    #[error("Cannot delete {resource}: {dependents} dependent record(s) exist")]
    ReferentialGuard { resource: String, dependents: i64 },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<(String, String)> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect();
        details.sort();

        match details.len() {
            0 => DomainError::Validation("Invalid input".to_string()),
            1 => {
                let (field, message) = details.remove(0);
                DomainError::InvalidField { field, message }
            }
            n => {
                let (field, message) = details.remove(0);
                DomainError::InvalidField {
                    field,
                    message: format!("{} (and {} more validation errors)", message, n - 1),
                }
            }
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 2, message = "Name too short"))]
        name: String,
        #[validate(email(message = "Bad email"))]
        email: String,
    }

    #[test]
    fn test_policy_denied_message_is_generic() {
        assert_eq!(
            DomainError::PolicyDenied.to_string(),
            "Not authorized to perform this action"
        );
    }

    #[test]
    fn test_from_single_validation_error() {
        let form = Form {
            name: "x".to_string(),
            email: "a@example.com".to_string(),
        };
        let err: DomainError = form.validate().unwrap_err().into();
        assert_eq!(err, DomainError::invalid_field("name", "Name too short"));
    }

    #[test]
    fn test_from_multiple_validation_errors() {
        let form = Form {
            name: "x".to_string(),
            email: "nope".to_string(),
        };
        let err: DomainError = form.validate().unwrap_err().into();
        match err {
            DomainError::InvalidField { field, message } => {
                assert_eq!(field, "email");
                assert!(message.contains("1 more"));
            }
            other => panic!("Expected InvalidField, got {:?}", other),
        }
    }

    #[test]
    fn test_transition_display() {
        let err = DomainError::InvalidTransition {
            from: ReportStatus::Resolved,
            to: ReportStatus::Pending,
        };
        assert_eq!(
            err.to_string(),
            "Invalid status transition from resolved to pending"
        );
    }
}
