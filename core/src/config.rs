//! Configuration for `CoolifyClient`.

use std::time::Duration;

use crate::error::{ApiError, Result};

/// Path prefix every endpoint lives under. The base address carries it;
/// endpoint paths never do.
pub const API_PREFIX: &str = "/api/v1";

pub const DEFAULT_USER_AGENT: &str = concat!("coolify-core/", env!("CARGO_PKG_VERSION"));

/// Base address, credential and transport settings for a client.
#[derive(Clone)]
pub struct ClientConfig {
    /// Absolute URL including the API prefix, e.g.
    /// `https://coolify.example.com/api/v1`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub token: String,
    /// End-to-end timeout for a single call. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// Environment variables:
    /// - `COOLIFY_API_HOST`: base address (required). A bare host such as
    ///   `https://coolify.example.com` gets `/api/v1` appended.
    /// - `COOLIFY_API_TOKEN`: bearer token (required)
    /// - `COOLIFY_TIMEOUT_MS`: request timeout in milliseconds (default: none)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let host = lookup("COOLIFY_API_HOST")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::configuration("COOLIFY_API_HOST", "variable not set"))?;

        let token = lookup("COOLIFY_API_TOKEN")
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ApiError::configuration("COOLIFY_API_TOKEN", "variable not set"))?;

        let timeout = match lookup("COOLIFY_TIMEOUT_MS") {
            Some(raw) => {
                let ms: u64 = raw.parse().map_err(|e| {
                    ApiError::configuration("COOLIFY_TIMEOUT_MS", format!("{raw:?}: {e}"))
                })?;
                Some(Duration::from_millis(ms))
            }
            None => None,
        };

        Ok(Self::new(with_api_prefix(&host), token).with_timeout(timeout))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Append the API prefix to an address that has no path of its own.
fn with_api_prefix(host: &str) -> String {
    match url::Url::parse(host) {
        Ok(url) if url.path() == "/" || url.path().is_empty() => {
            format!("{}{API_PREFIX}", host.trim_end_matches('/'))
        }
        _ => host.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn bare_host_gets_api_prefix() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("COOLIFY_API_HOST", "https://coolify.example.com/"),
            ("COOLIFY_API_TOKEN", "tok"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://coolify.example.com/api/v1");
        assert_eq!(config.token, "tok");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn host_with_path_is_kept() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("COOLIFY_API_HOST", "https://example.test/api/v1"),
            ("COOLIFY_API_TOKEN", "tok"),
            ("COOLIFY_TIMEOUT_MS", "1500"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://example.test/api/v1");
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn missing_token_is_configuration_error() {
        let err = ClientConfig::from_lookup(lookup(&[("COOLIFY_API_HOST", "https://h")]))
            .unwrap_err();
        assert!(matches!(err, ApiError::Configuration { ref address, .. } if address == "COOLIFY_API_TOKEN"));
    }

    #[test]
    fn bad_timeout_is_configuration_error() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("COOLIFY_API_HOST", "https://h"),
            ("COOLIFY_API_TOKEN", "tok"),
            ("COOLIFY_TIMEOUT_MS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ApiError::Configuration { .. }));
    }

    #[test]
    fn builder_methods() {
        let config = ClientConfig::new("https://a.test/api/v1", "one")
            .with_base_url("https://b.test/api/v1")
            .with_token("two")
            .with_timeout(Some(Duration::from_secs(5)))
            .with_user_agent("inventory/1.0");

        assert_eq!(config.base_url, "https://b.test/api/v1");
        assert_eq!(config.token, "two");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.user_agent, "inventory/1.0");
    }

    #[test]
    fn debug_redacts_token() {
        let config = ClientConfig::new("https://a.test/api/v1", "secret-token");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
