//! Catalog configuration
//!
//! # Environment variables
//!
//! Read only by [`CatalogConfig::from_env`]; library code receives the
//! resulting value explicitly.
//!
//! | Variable               | Default                 | Meaning |
//! |------------------------|-------------------------|---------|
//! | API_URL                | http://localhost:5000   | Catalog API base URL |
//! | REQUEST_TIMEOUT_MS     | 10000                   | Bound on every API call |
//! | CANCEL_DURING_SUBMIT   | allow                   | `allow` or `block` |
//! | LOG_LEVEL              | info                    | Default tracing filter |
//! | LOG_FORMAT             | text                    | `text` or `json` |

use std::str::FromStr;
use std::time::Duration;

use bistro_client::ClientConfig;
use bistro_client::config::DEFAULT_TIMEOUT_MS;

/// What the cancel control does while a submission is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CancelPolicy {
    /// Dismiss the form; the request completes in the background
    #[default]
    Allow,
    /// Keep the form until the request settles
    Block,
}

impl FromStr for CancelPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "allow" => Ok(Self::Allow),
            "block" => Ok(Self::Block),
            other => Err(format!("unknown cancel policy: {other}")),
        }
    }
}

/// Catalog manager configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog API base URL
    pub api_url: String,
    /// Bound on every API call, in milliseconds
    pub request_timeout_ms: u64,
    pub cancel_policy: CancelPolicy,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// Emit JSON log lines
    pub log_json: bool,
}

impl CatalogConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            request_timeout_ms: DEFAULT_TIMEOUT_MS,
            cancel_policy: CancelPolicy::default(),
            log_level: "info".into(),
            log_json: false,
        }
    }

    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset or unparsable values fall back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::new("http://localhost:5000");
        Self {
            api_url: lookup("API_URL")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.api_url),
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_ms),
            cancel_policy: lookup("CANCEL_DURING_SUBMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cancel_policy),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: lookup("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_cancel_policy(mut self, policy: CancelPolicy) -> Self {
        self.cancel_policy = policy;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// HTTP client configuration for the same API
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_url).with_timeout(self.request_timeout())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new("http://localhost:5000")
    }
}
