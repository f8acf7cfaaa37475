//! Axum extractor for the `data` request envelope
//!
//! Request bodies look like `{ "data": { ... } }`. [`Envelope`] unwraps the
//! inner object so validators can inspect it field by field.

use crate::core::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

/// The `data` object of a request body
///
/// An empty body, a missing `data` key, or a `data` value that is not an
/// object all yield an empty map. Bodies that are not JSON objects are
/// rejected before any validator runs.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<DishAppState>,
///     Envelope(data): Envelope,
/// ) -> Result<(StatusCode, Json<DataResponse<Dish>>), ApiError> {
///     // data is the inner object
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Envelope(pub Map<String, Value>);

impl Envelope {
    /// Unwrap the `data` object from a parsed body
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        let Value::Object(mut body) = body else {
            return Err(ApiError::MalformedBody {
                message: "expected an object".to_string(),
            });
        };

        match body.remove("data") {
            Some(Value::Object(data)) => Ok(Self(data)),
            _ => Ok(Self::default()),
        }
    }

    /// Parse raw body bytes; an empty or whitespace-only body is `{}`
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ApiError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let body: Value = serde_json::from_slice(bytes).map_err(|e| ApiError::MalformedBody {
            message: e.to_string(),
        })?;
        Self::from_body(body)
    }
}

impl<S> FromRequest<S> for Envelope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::BodyUnreadable {
                status: e.status(),
                message: e.body_text(),
            })?;

        Self::from_bytes(&bytes)
    }
}
