//! Application error type and the JSON error envelope.
//!
//! Every failing request ends up here. Handlers return `Result<_, AppError>`
//! and the [`IntoResponse`] impl below is the only place that turns an error
//! into an HTTP response:
//!
//! ```json
//! { "status": "Error", "error": "student not found" }
//! { "status": "Error", "error": [{ "field": "email", "message": "..." }] }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// A single failed field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// Payload of the `error` key: a plain message or a list of violations.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Violations(Vec<FieldViolation>),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    error: ErrorDetail,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed request: bad path parameter, empty or unparsable body.
    #[error("{message}")]
    BadRequest { message: String },

    /// One or more field constraints failed.
    #[error("validation failed: {} violation(s)", .violations.len())]
    Validation { violations: Vec<FieldViolation> },

    #[error("{message}")]
    NotFound { message: String },

    /// Known path, unsupported HTTP method.
    #[error("{message}")]
    MethodNotAllowed { message: String },

    /// Request body exceeds the configured limit.
    #[error("{message}")]
    PayloadTooLarge { message: String },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn method_not_allowed() -> Self {
        Self::MethodNotAllowed {
            message: "method not allowed".to_string(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = match self {
            AppError::Validation { violations } => ErrorDetail::Violations(violations),
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::MethodNotAllowed { message }
            | AppError::PayloadTooLarge { message }
            | AppError::Internal { message } => ErrorDetail::Message(message),
        };

        let body = ErrorBody {
            status: "Error",
            error,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| FieldViolation {
                    field: field.to_string(),
                    message: err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("failed '{}' check", err.code)),
                })
            })
            .collect();

        // field_errors() is a HashMap; keep the output stable
        violations.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::Validation { violations }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Storage operation failed");
        AppError::internal("internal storage error")
    }
}
