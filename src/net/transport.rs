//! HTTP transport capability.
//!
//! # Responsibilities
//! - Issue one GET for the target URL
//! - Apply user agent, redirect policy and connect timeout
//! - Stream the body into a [`ChunkSink`] as it arrives
//!
//! # Design Decisions
//! - The exchange layer only sees "chunks, then success or failure"
//! - A sink error stops delivery immediately; remaining body is not read
//! - The total deadline lives in the exchange layer, not in the client

use reqwest::redirect::Policy;
use thiserror::Error;
use url::Url;

use crate::buffer::{BufferError, ChunkSink};
use crate::config::HttpConfig;

/// What the transport observed for a completed transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSummary {
    /// Numeric HTTP status code of the final response.
    pub status: u16,
    /// Final URL after redirects.
    pub final_url: Url,
    /// Number of chunks handed to the sink.
    pub chunks: usize,
    /// Total bytes accepted by the sink.
    pub bytes: usize,
}

/// Errors reported by a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Build(#[source] reqwest::Error),

    /// Connecting, sending or reading the body failed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with an error status and the transport fails on those.
    #[error("server returned status {0}")]
    Status(u16),

    /// The sink refused a chunk; delivery was aborted.
    #[error("response sink rejected chunk: {0}")]
    Sink(#[from] BufferError),
}

/// An HTTP client able to run one GET exchange into a sink.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn perform<S: ChunkSink>(
        &self,
        url: &Url,
        sink: &mut S,
    ) -> Result<TransferSummary, TransportError>;
}

/// [`Transport`] backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    fail_on_error_status: bool,
}

impl ReqwestTransport {
    /// Build a client from the HTTP section of the configuration.
    pub fn from_config(http: &HttpConfig) -> Result<Self, TransportError> {
        let redirect = if http.follow_redirects {
            Policy::limited(http.max_redirects)
        } else {
            Policy::none()
        };

        let client = reqwest::Client::builder()
            .user_agent(http.user_agent.clone())
            .redirect(redirect)
            .connect_timeout(http.effective_connect_timeout())
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self {
            client,
            fail_on_error_status: http.fail_on_error_status,
        })
    }
}

impl Transport for ReqwestTransport {
    async fn perform<S: ChunkSink>(
        &self,
        url: &Url,
        sink: &mut S,
    ) -> Result<TransferSummary, TransportError> {
        let mut response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        let final_url = response.url().clone();
        tracing::debug!(
            status = status.as_u16(),
            final_url = %final_url,
            content_length = ?response.content_length(),
            "Response headers received"
        );

        if self.fail_on_error_status && (status.is_client_error() || status.is_server_error()) {
            return Err(TransportError::Status(status.as_u16()));
        }

        let mut summary = TransferSummary {
            status: status.as_u16(),
            final_url,
            chunks: 0,
            bytes: 0,
        };

        while let Some(chunk) = response.chunk().await? {
            summary.bytes += sink.on_chunk(&chunk)?;
            summary.chunks += 1;
            tracing::trace!(chunk_len = chunk.len(), total = summary.bytes, "Chunk received");
        }

        Ok(summary)
    }
}
