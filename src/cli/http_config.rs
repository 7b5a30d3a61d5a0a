//! HTTP configuration for outbound calls.
//!
//! Endpoints and the request timeout can be tuned from the environment,
//! which is how CI runners and tests point the tool at other hosts.

use crate::error::{ConfigError, Result};
use std::time::Duration;

/// Default App Distribution REST root
pub const DEFAULT_DISTRIBUTION_ENDPOINT: &str = "https://firebaseappdistribution.googleapis.com/v1";

/// Default Google OAuth 2.0 token endpoint
pub const DEFAULT_TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Configuration shared by every outbound request
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Per-request timeout, covering connect through body read
    pub timeout: Duration,

    /// App Distribution REST root, without trailing slash
    pub distribution_endpoint: String,

    /// OAuth token endpoint used when a key file doesn't name one
    pub token_endpoint: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            distribution_endpoint: DEFAULT_DISTRIBUTION_ENDPOINT.to_string(),
            token_endpoint: DEFAULT_TOKEN_ENDPOINT.to_string(),
        }
    }
}

impl HttpConfig {
    /// Parse a timeout in seconds with clamping to [1, max]
    ///
    /// # Arguments
    /// * `raw` - Raw variable value, if set
    /// * `default` - Default value if unset or invalid
    /// * `max` - Maximum allowed value (values above this are clamped)
    fn parse_timeout(raw: Option<&str>, default: u64, max: u64) -> u64 {
        raw.and_then(|s| s.trim().parse::<u64>().ok())
            .map(|v| v.clamp(1, max))
            .unwrap_or(default)
    }

    fn parse_endpoint(raw: Option<String>, default: &str) -> String {
        raw.map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| default.to_string())
    }

    /// Create config from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let timeout_secs = Self::parse_timeout(
            std::env::var("FIREBASE_RELEASE_HTTP_TIMEOUT_SECS").ok().as_deref(),
            DEFAULT_TIMEOUT_SECS,
            MAX_TIMEOUT_SECS,
        );

        Self {
            timeout: Duration::from_secs(timeout_secs),
            distribution_endpoint: Self::parse_endpoint(
                std::env::var("FIREBASE_APP_DISTRIBUTION_ENDPOINT").ok(),
                DEFAULT_DISTRIBUTION_ENDPOINT,
            ),
            token_endpoint: Self::parse_endpoint(
                std::env::var("GOOGLE_OAUTH_TOKEN_ENDPOINT").ok(),
                DEFAULT_TOKEN_ENDPOINT,
            ),
        }
    }

    /// Point the distribution client at another REST root
    pub fn with_distribution_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.distribution_endpoint = Self::parse_endpoint(Some(endpoint.into()), DEFAULT_DISTRIBUTION_ENDPOINT);
        self
    }

    /// Point token exchange at another OAuth endpoint
    pub fn with_token_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.token_endpoint = Self::parse_endpoint(Some(endpoint.into()), DEFAULT_TOKEN_ENDPOINT);
        self
    }

    /// Validate that both endpoints are absolute http(s) URLs
    pub fn validate(&self) -> Result<()> {
        validate_http_url("distribution endpoint", &self.distribution_endpoint)?;
        validate_http_url("token endpoint", &self.token_endpoint)?;
        Ok(())
    }

    /// Build a reqwest client honoring the configured timeout
    pub fn build_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ConfigError::HttpClient {
                    reason: e.to_string(),
                }
                .into()
            })
    }
}

/// Check that `value` parses as an absolute http or https URL
pub fn validate_http_url(what: &str, value: &str) -> Result<url::Url> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        what: what.to_string(),
        url: value.to_string(),
        reason,
    };

    let parsed = url::Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(invalid(format!("unsupported scheme '{other}'")).into()),
    }
}
