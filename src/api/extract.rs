//! Request extractors that reject with [`AppError`].
//!
//! axum's built-in `Json` and `Path` rejections render plain-text bodies.
//! These wrappers keep every failure inside the JSON error envelope.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::BytesRejection},
    http::{StatusCode, request::Parts},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor.
///
/// Distinguishes an empty body (`"empty body"`) from malformed JSON
/// (`"invalid JSON: ..."`). The `Content-Type` header is not checked.
/// Bodies over the request body limit are rejected with 413.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(body_rejection)?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::bad_request("empty body"));
        }

        serde_json::from_slice(&bytes)
            .map(JsonBody)
            .map_err(|e| AppError::bad_request(format!("invalid JSON: {e}")))
    }
}

fn body_rejection(rejection: BytesRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge {
            message: "request body too large".to_string(),
        }
    } else {
        AppError::bad_request(rejection.body_text())
    }
}

/// Numeric `{id}` path parameter.
#[derive(Debug, Clone, Copy)]
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        parse_id(&raw).map(StudentId)
    }
}

/// Parses a student id from its path representation.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if `raw` is not a base-10 integer.
pub fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("invalid student id '{raw}'")))
}
