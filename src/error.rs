//! Crate-level error type.

use thiserror::Error;

use crate::config::ConfigError;
use crate::net::ExchangeError;
use crate::output::{ScrapeResult, USAGE};

/// Everything that can stop a scrape from printing the success document.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The URL argument was not supplied.
    #[error("{}", USAGE)]
    Usage,

    /// The configuration file could not be loaded or is invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// The exchange did not complete successfully.
    #[error("network error: {0}")]
    Network(#[from] ExchangeError),
}

impl ScrapeError {
    /// Process exit status for this error.
    ///
    /// Network failures exit 0 unless `strict` is set.
    pub fn exit_code(&self, strict: bool) -> u8 {
        match self {
            ScrapeError::Usage | ScrapeError::Config(_) => 1,
            ScrapeError::Network(_) => u8::from(strict),
        }
    }

    /// Document printed on stdout for this error.
    ///
    /// Network failures use a fixed message; the cause is only logged.
    pub fn to_result(&self) -> ScrapeResult {
        match self {
            ScrapeError::Usage => ScrapeResult::usage(),
            ScrapeError::Config(_) => ScrapeResult::failure(self.to_string()),
            ScrapeError::Network(_) => ScrapeResult::network_failure(),
        }
    }
}
