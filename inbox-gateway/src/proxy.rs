//! The forwarding step shared by the JSON endpoint and the page.

use async_trait::async_trait;
use inbox_core::{FetchFailure, InboxSource, MailboxQuery};
use inbox_upstream::{MailboxApi, UpstreamError};
use serde_json::Value;
use tracing::{error, warn};

use crate::error::GatewayError;

/// Forward one listing request upstream.
///
/// Failures that never reached Tinyhost are logged at `error`; non-success
/// answers at `warn`.
///
/// # Errors
/// Returns [`GatewayError::Upstream`] for every upstream failure.
pub async fn forward(api: &dyn MailboxApi, query: &MailboxQuery) -> Result<Value, GatewayError> {
    api.list_emails(query).await.map_err(|e| {
        match &e {
            UpstreamError::Status { status, .. } => {
                warn!(mailbox = %query, status = *status, "Tinyhost API error");
            }
            other => error!(mailbox = %query, error = %other, "Error calling Tinyhost API"),
        }
        GatewayError::Upstream(e)
    })
}

/// [`InboxSource`] that answers exactly like `GET /api/emails` would.
pub struct ProxySource<'a> {
    api: &'a dyn MailboxApi,
}

impl<'a> ProxySource<'a> {
    #[must_use]
    pub fn new(api: &'a dyn MailboxApi) -> Self {
        Self { api }
    }
}

#[async_trait]
impl InboxSource for ProxySource<'_> {
    async fn fetch(&self, query: &MailboxQuery) -> Result<Value, FetchFailure> {
        forward(self.api, query).await.map_err(|e| FetchFailure {
            status: e.status().as_u16(),
            body: e.body(),
        })
    }
}
