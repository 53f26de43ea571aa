//! One request/response exchange.
//!
//! # Responsibilities
//! - Validate the target URL
//! - Own the response buffer for the lifetime of the exchange
//! - Drive the transport under the total deadline
//! - Turn the finalized buffer into a [`Page`]
//!
//! # Design Decisions
//! - The buffer is dropped on every failure path; partial bodies are never returned
//! - Allocator failure and body limits surface as buffer errors, not panics
//! - Each exchange gets a UUID so its log lines can be correlated

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::Instrument;
use url::Url;
use uuid::Uuid;

use crate::buffer::{BufferError, Reserve, ResponseBuffer};
use crate::config::ScraperConfig;
use crate::net::response::Page;
use crate::net::transport::{Transport, TransportError};
use crate::observability::metrics::{self, Outcome};
use crate::resilience::timeouts::{with_deadline, DeadlineExceeded};

/// Why an exchange did not produce a page.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Buffer(#[from] BufferError),

    #[error("exchange timed out after {0:?}")]
    Timeout(Duration),

    #[error("response body was empty")]
    EmptyBody,
}

/// Parse `raw` and accept only `http`/`https` targets.
pub fn parse_target(raw: &str) -> Result<Url, ExchangeError> {
    let url = Url::parse(raw).map_err(|source| ExchangeError::InvalidUrl {
        url: raw.to_string(),
        source,
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ExchangeError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetch `raw_url` with limits taken from `config`.
pub async fn fetch_page<T: Transport>(
    transport: &T,
    raw_url: &str,
    config: &ScraperConfig,
) -> Result<Page, ExchangeError> {
    let url = parse_target(raw_url)?;
    let buffer = ResponseBuffer::new().with_limit(config.limits.max_body_bytes);
    let deadline = Duration::from_secs(config.http.timeout_secs);
    fetch_into(transport, &url, deadline, buffer).await
}

/// Run one exchange into a caller-supplied buffer.
///
/// The buffer is consumed: on success its content becomes the page body, on
/// failure it is dropped along with whatever was accumulated.
pub async fn fetch_into<T, R>(
    transport: &T,
    url: &Url,
    deadline: Duration,
    mut buffer: ResponseBuffer<R>,
) -> Result<Page, ExchangeError>
where
    T: Transport,
    R: Reserve,
{
    let exchange_id = Uuid::new_v4();
    let span = tracing::info_span!("exchange", id = %exchange_id, url = %url);

    async move {
        let start_time = Instant::now();
        tracing::info!(deadline = ?deadline, "Starting exchange");

        let outcome = with_deadline(deadline, transport.perform(url, &mut buffer)).await;

        let summary = match outcome {
            Ok(Ok(summary)) => summary,
            Ok(Err(TransportError::Sink(e))) => {
                tracing::warn!(error = %e, received = buffer.len(), "Aborting exchange");
                metrics::record_exchange(Outcome::BufferFailure, start_time);
                return Err(ExchangeError::Buffer(e));
            }
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Transport failed");
                metrics::record_exchange(Outcome::NetworkFailure, start_time);
                return Err(ExchangeError::Transport(e));
            }
            Err(DeadlineExceeded(limit)) => {
                tracing::warn!(
                    limit = ?limit,
                    received = buffer.len(),
                    "Exchange timed out, discarding partial body"
                );
                metrics::record_exchange(Outcome::Timeout, start_time);
                return Err(ExchangeError::Timeout(limit));
            }
        };

        let body = buffer.finalize()?;
        if body.is_empty() {
            tracing::warn!(status = summary.status, "Response body was empty");
            metrics::record_exchange(Outcome::EmptyBody, start_time);
            return Err(ExchangeError::EmptyBody);
        }

        metrics::record_body(body.len(), summary.chunks);
        metrics::record_exchange(Outcome::Success, start_time);
        tracing::info!(
            status = summary.status,
            bytes = body.len(),
            chunks = summary.chunks,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "Exchange complete"
        );

        Ok(Page {
            url: summary.final_url,
            status: summary.status,
            body,
        })
    }
    .instrument(span)
    .await
}
