//! Axum route handlers for the inbox gateway.

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::IntoResponse,
    routing::{any, get},
    Json, Router,
};
use inbox_core::MailboxQuery;
use inbox_upstream::MailboxApi;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use crate::{error::GatewayError, page, proxy};

// ── Shared state ─────────────────────────────────────────────────────────────

/// The mailbox service every handler forwards to.
pub type Upstream = Arc<dyn MailboxApi>;

// ── Request types ────────────────────────────────────────────────────────────

/// Raw query parameters of `GET /api/emails`; validated into a [`MailboxQuery`].
#[derive(Debug, Default, Deserialize)]
pub struct ListEmailsParams {
    pub email: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

// ── Router ───────────────────────────────────────────────────────────────────

/// Build the application router around the given upstream.
pub fn create_router(upstream: Upstream) -> Router {
    Router::new()
        .route("/", get(page::inbox_page))
        .route("/api/emails", any(list_emails))
        .route("/health", get(health))
        .with_state(upstream)
        .layer(TraceLayer::new_for_http())
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// `GET /health` — liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /api/emails?email=&page=&limit=` — relay one Tinyhost listing page.
///
/// The route accepts every method so that non-GET requests, OPTIONS and HEAD
/// included, get the JSON 405 body instead of axum's empty one.
///
/// # Errors
/// - [`GatewayError::MethodNotAllowed`] for any method but GET.
/// - [`GatewayError::InvalidQuery`] / [`GatewayError::InvalidRequest`] for a
///   missing, malformed or undecodable query.
/// - [`GatewayError::Upstream`] when Tinyhost fails or cannot be reached.
pub async fn list_emails(
    method: Method,
    State(upstream): State<Upstream>,
    params: Result<Query<ListEmailsParams>, QueryRejection>,
) -> Result<impl IntoResponse, GatewayError> {
    if method != Method::GET {
        return Err(GatewayError::MethodNotAllowed);
    }
    let Query(params) = params.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;
    let query = MailboxQuery::parse(
        params.email.as_deref(),
        params.page.as_deref(),
        params.limit.as_deref(),
    )?;
    let body = proxy::forward(upstream.as_ref(), &query).await?;
    Ok(Json(body))
}
