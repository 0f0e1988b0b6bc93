//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_kernel::TemporalError;
use domain_eligibility::EligibilityError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    /// No route matched the request path
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request content was well-formed JSON but failed validation
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        fields: Vec<String>,
    },
}

impl ApiError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            fields: vec![field.into()],
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Validation { message, fields } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                message,
                Some(fields),
            ),
        };

        warn!(error = error_type, %message, "Request rejected");

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<EligibilityError> for ApiError {
    fn from(err: EligibilityError) -> Self {
        let field = err.field().to_string();
        ApiError::validation(field, err.to_string())
    }
}

impl From<TemporalError> for ApiError {
    fn from(err: TemporalError) -> Self {
        EligibilityError::from(err).into()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();
        ApiError::Validation {
            message: errors.to_string(),
            fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_validation_maps_to_unprocessable() {
        let err: ApiError = EligibilityError::validation("students[0].id", "duplicate").into();
        match &err {
            ApiError::Validation { fields, .. } => assert_eq!(fields, &vec!["students[0].id".to_string()]),
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_not_found_has_no_details() {
        let response = ApiError::NotFound("/api/v1/nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_unknown_timezone_maps_to_validation() {
        let err: ApiError = TemporalError::UnknownTimezone("Mars/Base".to_string()).into();
        assert!(matches!(err, ApiError::Validation { .. }));
    }
}
