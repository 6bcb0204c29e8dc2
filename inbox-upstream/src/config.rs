//! Upstream endpoint configuration.

use reqwest::Url;

use crate::UpstreamError;

/// Base URL of the public Tinyhost service.
pub const DEFAULT_BASE_URL: &str = "https://tinyhost.shop";

/// Where the Tinyhost API lives.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct UpstreamConfig {
    /// Scheme, host and optional path prefix; `/api/email/...` is appended.
    pub base_url: Url,
}

impl UpstreamConfig {
    /// Parse and check a base URL.
    ///
    /// # Errors
    /// Returns [`UpstreamError::InvalidBaseUrl`] if `raw` is not an absolute
    /// URL that can carry path segments (e.g. `mailto:` or `data:`).
    pub fn new(raw: &str) -> Result<Self, UpstreamError> {
        let invalid = |reason: String| UpstreamError::InvalidBaseUrl { url: raw.to_owned(), reason };
        let base_url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("URL cannot be a base".to_owned()));
        }
        Ok(Self { base_url })
    }
}

impl Default for UpstreamConfig {
    #[expect(clippy::expect_used, reason = "constant URL is known to parse")]
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL).expect("default base URL is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_public_service() {
        let config = UpstreamConfig::default();
        assert_eq!(config.base_url.as_str(), "https://tinyhost.shop/");
    }

    #[test]
    fn rejects_relative_and_non_base_urls() {
        for raw in ["tinyhost.shop", "mailto:someone@example.com", ""] {
            assert!(
                matches!(UpstreamConfig::new(raw), Err(UpstreamError::InvalidBaseUrl { .. })),
                "{raw:?} should be rejected"
            );
        }
    }
}
