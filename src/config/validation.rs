//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, limits > 0)
//! - Check header values are sendable
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ScraperConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use reqwest::header::HeaderValue;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::ScraperConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `http.timeout_secs`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a parsed configuration for values that cannot work at runtime.
pub fn validate_config(config: &ScraperConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let http = &config.http;
    if http.user_agent.trim().is_empty() {
        errors.push(ValidationError::new("http.user_agent", "must not be empty"));
    } else if HeaderValue::from_str(&http.user_agent).is_err() {
        errors.push(ValidationError::new(
            "http.user_agent",
            "contains characters not allowed in a header value",
        ));
    }
    if http.timeout_secs == 0 {
        errors.push(ValidationError::new("http.timeout_secs", "must be greater than 0"));
    }
    if http.connect_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "http.connect_timeout_secs",
            "must be greater than 0",
        ));
    }
    if http.follow_redirects && http.max_redirects == 0 {
        errors.push(ValidationError::new(
            "http.max_redirects",
            "must be greater than 0 when follow_redirects is enabled",
        ));
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::new("limits.max_body_bytes", "must be greater than 0"));
    }

    if config.observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
