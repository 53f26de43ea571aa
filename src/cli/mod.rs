//! Command-line surface.
//!
//! # Data Flow
//! ```text
//! argv
//!     → Cli (clap)
//!     → config (file, then flag overrides, then validation)
//!     → logging init
//!     → net::fetch_page
//!     → Report (JSON document + exit code)
//! ```
//!
//! # Design Decisions
//! - A missing URL is not a clap error: it prints the usage document and exits 1
//! - A failed fetch exits 0 unless strict exit codes are enabled

use std::path::PathBuf;

use clap::Parser;

use crate::config::loader::{load_or_default, ConfigError};
use crate::config::validation::validate_config;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::net::{fetch_page, ExchangeError, Page, ReqwestTransport};
use crate::observability::logging::init_logging;
use crate::output::ScrapeResult;

#[derive(Parser, Debug, Default)]
#[command(name = "flipkart-scraper")]
#[command(about = "Fetch a product page and report the result as JSON", long_about = None)]
pub struct Cli {
    /// Page URL to fetch
    pub url: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Total exchange timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// User-Agent header value
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Do not follow redirects
    #[arg(long)]
    pub no_follow_redirects: bool,

    /// Exit with status 1 when the fetch fails
    #[arg(long)]
    pub strict_exit: bool,
}

impl Cli {
    /// Load the config file (if any) and apply flag overrides on top.
    pub fn resolve_config(&self) -> Result<ScraperConfig, ConfigError> {
        let mut config = load_or_default(self.config.as_deref())?;

        if let Some(timeout) = self.timeout {
            config.http.timeout_secs = timeout;
        }
        if let Some(user_agent) = &self.user_agent {
            config.http.user_agent = user_agent.clone();
        }
        if self.no_follow_redirects {
            config.http.follow_redirects = false;
        }
        if self.strict_exit {
            config.output.strict_exit_code = true;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

/// What the binary prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub result: ScrapeResult,
    pub exit_code: u8,
}

impl Report {
    fn success() -> Self {
        Self {
            result: ScrapeResult::placeholder_success(),
            exit_code: 0,
        }
    }

    fn from_error(err: &ScrapeError, strict: bool) -> Self {
        Self {
            result: err.to_result(),
            exit_code: err.exit_code(strict),
        }
    }
}

/// Run one scrape end to end.
pub async fn run(cli: Cli) -> Report {
    let Some(url) = cli.url.as_deref() else {
        return Report::from_error(&ScrapeError::Usage, false);
    };

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(e) => return Report::from_error(&ScrapeError::from(e), false),
    };

    init_logging(&config.observability);
    tracing::info!(
        url = %url,
        timeout_secs = config.http.timeout_secs,
        follow_redirects = config.http.follow_redirects,
        "Configuration loaded"
    );

    match scrape(url, &config).await {
        Ok(page) => {
            tracing::info!(
                status = page.status,
                final_url = %page.url,
                bytes = page.body.len(),
                "Page fetched"
            );
            Report::success()
        }
        Err(e) => {
            tracing::error!(error = %e, "Scrape failed");
            Report::from_error(&e, config.output.strict_exit_code)
        }
    }
}

async fn scrape(url: &str, config: &ScraperConfig) -> Result<Page, ScrapeError> {
    let transport = ReqwestTransport::from_config(&config.http).map_err(ExchangeError::from)?;
    let page = fetch_page(&transport, url, config).await?;
    Ok(page)
}
