use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::error::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid field {field}: {message}")]
    InvalidField { field: String, message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg, None),
            ApiError::InvalidField { field, message } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message.clone(),
                Some(vec![ValidationDetail { field, message }]),
            ),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::PolicyDenied => ApiError::Forbidden(err.to_string()),
            DomainError::Validation(msg) => ApiError::Validation(msg),
            DomainError::InvalidField { field, message } => {
                ApiError::InvalidField { field, message }
            }
            DomainError::InvalidTransition { from, to } => {
                tracing::warn!(from = %from, to = %to, "Invalid status transition requested");
                ApiError::Conflict("This status change is not allowed".into())
            }
            DomainError::ReferentialGuard { .. } => ApiError::Conflict(err.to_string()),
            DomainError::NotFound(msg) => ApiError::NotFound(msg),
            DomainError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::from(errors).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::ReportStatus;

    #[test]
    fn test_api_error_forbidden() {
        let error = ApiError::Forbidden("access denied".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::NotFound("resource not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("hash failure".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_policy_denied_maps_to_generic_forbidden() {
        let error: ApiError = DomainError::PolicyDenied.into();
        match error {
            ApiError::Forbidden(msg) => assert_eq!(msg, "Not authorized to perform this action"),
            other => panic!("Expected Forbidden, got {:?}", other),
        }
    }

    #[test]
    fn test_domain_error_status_codes() {
        let cases: Vec<(DomainError, StatusCode)> = vec![
            (DomainError::validation("no change"), StatusCode::BAD_REQUEST),
            (
                DomainError::invalid_field("role", "Unknown admin role: x"),
                StatusCode::BAD_REQUEST,
            ),
            (
                DomainError::InvalidTransition {
                    from: ReportStatus::Resolved,
                    to: ReportStatus::Pending,
                },
                StatusCode::CONFLICT,
            ),
            (
                DomainError::ReferentialGuard {
                    resource: "country KE".to_string(),
                    dependents: 4,
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::NotFound("admin".to_string()), StatusCode::NOT_FOUND),
            (DomainError::PolicyDenied, StatusCode::FORBIDDEN),
            (DomainError::Internal("boom".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (domain_error, expected) in cases {
            let response = ApiError::from(domain_error).into_response();
            assert_eq!(response.status(), expected);
        }
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::Forbidden("test".to_string())),
            "Forbidden: test"
        );
        assert_eq!(
            format!("{}", ApiError::Conflict("test".to_string())),
            "Conflict: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
    }
}
