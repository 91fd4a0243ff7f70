//! Custom error types and handling
//!
//! This module defines the application's error type and its conversion to
//! HTTP responses. Every error is rendered as `{"error": "<message>"}`.

use std::sync::atomic::{AtomicBool, Ordering};

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use enrollhub_rules::error::RuleError;
use serde::Serialize;
use sqlx::error::ErrorKind;

/// Whether 500 responses carry the underlying error message.
static EXPOSE_INTERNAL_ERRORS: AtomicBool = AtomicBool::new(false);

/// Toggle detailed 500 messages (enabled outside production).
pub fn expose_internal_errors(enabled: bool) {
    EXPOSE_INTERNAL_ERRORS.store(enabled, Ordering::Relaxed);
}

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client errors
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    /// An enrollment rule refused the request
    #[error("{0}")]
    RuleViolation(String),

    // Server errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("Rule evaluation failed: {0}")]
    Rules(#[from] RuleError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl AppError {
    /// Shorthand for a 400 with the given message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Validation(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::RuleViolation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Database(_) | Self::Rules(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the client.
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() && !EXPOSE_INTERNAL_ERRORS.load(Ordering::Relaxed)
        {
            return "Internal server error".to_string();
        }
        self.to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            tracing::debug!("Error details: {:#?}", self);
        }

        let body = ErrorResponse {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => AppError::Conflict(
                    "Duplicate entry. This record already exists.".to_string(),
                ),
                ErrorKind::ForeignKeyViolation => {
                    AppError::Validation("Referenced record does not exist.".to_string())
                }
                ErrorKind::NotNullViolation => {
                    AppError::Validation("Required field is missing.".to_string())
                }
                _ => AppError::Database(db_err.to_string()),
            },
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = err.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid {field}"),
                })
            })
            .collect();

        AppError::Validation(messages.join("; "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) => {
                AppError::Validation("Invalid JSON format".to_string())
            }
            JsonRejection::MissingJsonContentType(_) => AppError::Validation(
                "Expected request with `Content-Type: application/json`".to_string(),
            ),
            other => AppError::Validation(other.body_text()),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::{ValidationError, ValidationErrors};

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::RuleViolation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Conflict("x".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::Database("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_client_messages_are_verbatim() {
        let err = AppError::RuleViolation("User has no email".into());
        assert_eq!(err.public_message(), "User has no email");
    }

    #[test]
    fn test_internal_message_redaction() {
        let err = AppError::Database("relation \"users\" does not exist".into());

        expose_internal_errors(false);
        assert_eq!(err.public_message(), "Internal server error");

        expose_internal_errors(true);
        assert!(err.public_message().contains("does not exist"));

        expose_internal_errors(false);
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_errors_are_joined_in_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "name",
            ValidationError::new("required").with_message("Name is required".into()),
        );
        errors.add(
            "email",
            ValidationError::new("regex").with_message("Invalid email format".into()),
        );

        let err: AppError = errors.into();
        assert_eq!(err.to_string(), "Invalid email format; Name is required");
    }
}
