//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Route all log output to stderr, keeping stdout for the JSON result
//!
//! # Design Decisions
//! - `RUST_LOG` wins; the configured level is the fallback
//! - JSON format on request, compact human format otherwise

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ObservabilityConfig;

/// Build the filter from `RUST_LOG`, falling back to `fallback_level` for this crate.
pub fn env_filter(fallback_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("flipkart_scraper={fallback_level}").into())
}

/// Install the global subscriber.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(config: &ObservabilityConfig) {
    let filter = env_filter(&config.log_level);
    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_ok() {
        tracing::debug!(
            level = %config.log_level,
            json = config.json_logs,
            "Logging initialized"
        );
    }
}
