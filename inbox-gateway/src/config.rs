//! Startup configuration read from the environment.

use inbox_upstream::{UpstreamConfig, UpstreamError, DEFAULT_BASE_URL};

/// Address the server binds to when `INBOX_LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Gateway settings.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct GatewayConfig {
    /// `host:port` to listen on.
    pub listen_addr: String,
    /// Tinyhost endpoint.
    pub upstream: UpstreamConfig,
}

impl GatewayConfig {
    /// Read `INBOX_LISTEN_ADDR` and `TINYHOST_BASE_URL`.
    ///
    /// # Errors
    /// Returns [`UpstreamError::InvalidBaseUrl`] if `TINYHOST_BASE_URL` is set
    /// to something that is not a usable base URL.
    pub fn from_env() -> Result<Self, UpstreamError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`GatewayConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    /// See [`GatewayConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, UpstreamError> {
        let listen_addr = lookup("INBOX_LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned());
        let base_url = lookup("TINYHOST_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Ok(Self { listen_addr, upstream: UpstreamConfig::new(&base_url)? })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let config = match GatewayConfig::from_lookup(|_| None) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.upstream.base_url.as_str(), "https://tinyhost.shop/");
    }

    #[test]
    fn overrides_are_read() {
        let config = GatewayConfig::from_lookup(|key| match key {
            "INBOX_LISTEN_ADDR" => Some("0.0.0.0:8080".to_owned()),
            "TINYHOST_BASE_URL" => Some("http://localhost:9999".to_owned()),
            _ => None,
        });
        let config = match config {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.upstream.base_url.as_str(), "http://localhost:9999/");
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let result = GatewayConfig::from_lookup(|key| {
            (key == "TINYHOST_BASE_URL").then(|| "not a url".to_owned())
        });
        assert!(matches!(result, Err(UpstreamError::InvalidBaseUrl { .. })));
    }
}
