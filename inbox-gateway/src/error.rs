//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inbox_core::CoreError;
use inbox_upstream::UpstreamError;
use serde_json::{json, Value};

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The mailbox query failed validation.
    #[error(transparent)]
    InvalidQuery(#[from] CoreError),

    /// The query string could not be decoded at all.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An error propagated from the upstream client.
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// The endpoint only answers GET.
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl GatewayError {
    /// HTTP status this error is reported with.
    ///
    /// Upstream status codes pass through unchanged.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidQuery(_) | GatewayError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            GatewayError::Upstream(UpstreamError::Status { status, .. }) => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON body this error is reported with.
    ///
    /// Network and decode failures carry no detail.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            GatewayError::Upstream(UpstreamError::Status { body, .. }) => {
                json!({"error": "Tinyhost API error", "detail": body})
            }
            GatewayError::Upstream(_) => json!({"error": "Internal server error"}),
            other => json!({"error": other.to_string()}),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
