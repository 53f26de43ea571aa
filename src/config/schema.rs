//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the scraper.
//! All types derive Serde traits for deserialization from config files.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Root configuration for the scraper.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScraperConfig {
    /// HTTP client behaviour.
    pub http: HttpConfig,

    /// Resource limits for one exchange.
    pub limits: LimitsConfig,

    /// Output and exit code behaviour.
    pub output: OutputConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// HTTP client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// `User-Agent` header value.
    pub user_agent: String,

    /// Follow 3xx redirects.
    pub follow_redirects: bool,

    /// Maximum redirect hops when following redirects.
    pub max_redirects: usize,

    /// Total time allowed for one exchange, body included, in seconds.
    pub timeout_secs: u64,

    /// Connection establishment timeout in seconds. Capped at `timeout_secs`.
    pub connect_timeout_secs: u64,

    /// Treat 4xx/5xx responses as network failures.
    pub fail_on_error_status: bool,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            follow_redirects: true,
            max_redirects: 10,
            timeout_secs: 10,
            connect_timeout_secs: 5,
            fail_on_error_status: false,
        }
    }
}

impl HttpConfig {
    /// Connect timeout actually applied: never longer than the total deadline.
    pub fn effective_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.min(self.timeout_secs))
    }
}

/// Resource limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum response body size in bytes.
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 32 * 1024 * 1024, // 32MB
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Exit with status 1 when the network call fails.
    ///
    /// Off by default: a failed fetch still exits 0.
    pub strict_exit_code: bool,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error), used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Emit logs as JSON lines instead of the human-readable format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            json_logs: false,
        }
    }
}
