//! JSON result document printed on stdout.
//!
//! # Design Decisions
//! - Exactly one compact JSON line per run; logs go to stderr
//! - Absent fields are omitted, never `null`
//! - The success document is fixed: no page content is extracted

use serde::{Deserialize, Serialize};

/// Usage text reported when the URL argument is missing.
pub const USAGE: &str = "Usage: ./flipkart_cpp <url>";

/// Error text reported for any failed exchange.
pub const NETWORK_FAILURE: &str = "network failure";

/// Result of one scrape as printed on stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResult {
    /// The fixed document printed after a successful fetch.
    pub fn placeholder_success() -> Self {
        Self {
            success: true,
            name: Some("C++ Scraper".to_string()),
            price: Some("Ultra Fast".to_string()),
            rating: Some("5.0".to_string()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            name: None,
            price: None,
            rating: None,
            error: Some(error.into()),
        }
    }

    pub fn usage() -> Self {
        Self::failure(USAGE)
    }

    pub fn network_failure() -> Self {
        Self::failure(NETWORK_FAILURE)
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!("{{\"success\":{},\"error\":\"serialization failed\"}}", self.success)
        })
    }
}
