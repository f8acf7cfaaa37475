//! Typed error handling for the API
//!
//! Every failure a request can hit is an [`ApiError`]. Validators signal
//! client-fixable problems with [`ApiError::Validation`] or
//! [`ApiError::NotFound`]; stores report infrastructure failures through
//! `anyhow`, which converts into [`ApiError::Internal`].
//!
//! All variants render the same way:
//!
//! ```json
//! { "error": "Dish must include a name", "code": "VALIDATION_ERROR" }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Message shown to clients for internal failures; the cause is only logged
const INTERNAL_MESSAGE: &str = "Something went wrong!";

/// The error type shared by validators, handlers and fallbacks
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Missing or malformed field, or a violated business rule (400)
    #[error("{message}")]
    Validation { message: String },

    /// Unknown record identifier (404)
    #[error("{message}")]
    NotFound { message: String },

    /// Request body is not a JSON object (400)
    #[error("Request body must be a JSON object: {message}")]
    MalformedBody { message: String },

    /// Body could not be read at all (e.g. 413 when over the size limit)
    #[error("{message}")]
    BodyUnreadable { status: StatusCode, message: String },

    /// Known path, unsupported method (405)
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Unknown path (404)
    #[error("Path not found: {path}")]
    RouteNotFound { path: String },

    /// Unexpected failure (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body written for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: &'static str,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } | Self::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::BodyUnreadable { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::MalformedBody { .. } => "MALFORMED_BODY",
            Self::BodyUnreadable { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "PAYLOAD_TOO_LARGE"
            }
            Self::BodyUnreadable { .. } => "BODY_UNREADABLE",
            Self::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            Self::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    ///
    /// Internal errors never leak their cause to the client.
    pub fn to_response(&self) -> ErrorResponse {
        let error = match self {
            Self::Internal(_) => INTERNAL_MESSAGE.to_string(),
            other => other.to_string(),
        };
        ErrorResponse {
            error,
            code: self.error_code(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(format!("{err:#}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(cause) = &self {
            tracing::error!(%cause, "request failed with an internal error");
        }
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}
