//! [`MailboxApi`] implementation backed by the Tinyhost HTTP API.

use async_trait::async_trait;
use inbox_core::MailboxQuery;
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::{MailboxApi, UpstreamConfig, UpstreamError};

/// HTTP client for `GET /api/email/{domain}/{localPart}/?page=&limit=`.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct TinyhostClient {
    http: reqwest::Client,
    config: UpstreamConfig,
}

impl TinyhostClient {
    /// Create a client with reqwest's default settings.
    #[must_use]
    pub fn new(config: UpstreamConfig) -> Self {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Create a client around an existing `reqwest::Client`.
    #[must_use]
    pub fn with_http_client(config: UpstreamConfig, http: reqwest::Client) -> Self {
        Self { http, config }
    }

    #[must_use]
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// Build the listing URL for `query`.
    ///
    /// Domain and local-part are percent-encoded as single path segments, so a
    /// `/` or `?` inside them cannot change the route. Dot segments (`.`,
    /// `..`) are rejected when the [`MailboxQuery`] is built.
    ///
    /// # Errors
    /// Returns [`UpstreamError::InvalidBaseUrl`] if the base URL cannot carry
    /// path segments.
    pub fn listing_url(&self, query: &MailboxQuery) -> Result<Url, UpstreamError> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| UpstreamError::InvalidBaseUrl {
                url: self.config.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend([
                "api",
                "email",
                query.domain.as_str(),
                query.local_part.as_str(),
                "",
            ]);
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("limit", &query.limit.to_string());
        Ok(url)
    }
}

impl Default for TinyhostClient {
    fn default() -> Self {
        Self::new(UpstreamConfig::default())
    }
}

#[async_trait]
impl MailboxApi for TinyhostClient {
    async fn list_emails(&self, query: &MailboxQuery) -> Result<Value, UpstreamError> {
        let url = self.listing_url(query)?;
        debug!(url = %url, "requesting Tinyhost listing");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "Tinyhost answered");

        if !status.is_success() {
            return Err(UpstreamError::Status { status: status.as_u16(), body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
