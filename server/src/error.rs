//! Error types for the storage backends and the HTTP boundary.
//!
//! # Design
//! Storage failures are values (`StoreError`) until the handler translates
//! them into the wire contract (`ApiError`). Anything that still manages to
//! panic inside a handler is converted to a 500 by the catch-panic layer
//! instead of tearing down the serving loop.

use std::any::Any;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures raised by a storage backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("storage task aborted: {0}")]
    Background(#[from] tokio::task::JoinError),
}

impl StoreError {
    /// Message of the underlying cause, when there is one.
    pub fn inner_message(&self) -> Option<String> {
        std::error::Error::source(self).map(|source| source.to_string())
    }
}

/// Service-boundary error, rendered into the wire contract.
#[derive(Debug)]
pub enum ApiError {
    /// 404 with an empty body.
    NotFound,

    /// 400 with `{error, innerError}`.
    BadRequest {
        error: String,
        inner_error: Option<String>,
    },

    /// 500 with `{error, details}`.
    Internal { error: String, details: String },
}

impl ApiError {
    pub fn bad_request(err: &StoreError) -> Self {
        Self::BadRequest {
            error: err.to_string(),
            inner_error: err.inner_message(),
        }
    }

    pub fn internal(err: &StoreError) -> Self {
        Self::Internal {
            error: err.to_string(),
            details: err
                .inner_message()
                .unwrap_or_else(|| "no additional details".to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::BadRequest { error, inner_error } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": error, "innerError": inner_error })),
            )
                .into_response(),
            ApiError::Internal { error, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": error, "details": details })),
            )
                .into_response(),
        }
    }
}

/// Body decode failures surface as 400 rather than axum's default 422.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest {
            error: rejection.body_text(),
            inner_error: None,
        }
    }
}

/// Responder for the catch-panic layer.
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "no additional details".to_string()
    };
    tracing::error!(%details, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "internal server error", "details": details })),
    )
        .into_response()
}
