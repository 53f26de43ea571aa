//! Metric helpers wrapping the [`metrics`](https://docs.rs/metrics) crate.
//!
//! # Metrics
//! - `scraper_exchanges_total` (counter): exchanges by outcome
//! - `scraper_exchange_duration_seconds` (histogram): wall-clock time per exchange
//! - `scraper_body_bytes` (histogram): size of accepted bodies
//! - `scraper_chunks_total` (counter): chunks delivered by the transport
//!
//! No recorder is installed by the binary; an embedding process may install one.

use std::time::Instant;

use metrics::{counter, histogram};

pub const EXCHANGES_TOTAL: &str = "scraper_exchanges_total";
pub const EXCHANGE_DURATION: &str = "scraper_exchange_duration_seconds";
pub const BODY_BYTES: &str = "scraper_body_bytes";
pub const CHUNKS_TOTAL: &str = "scraper_chunks_total";

/// How an exchange ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Timeout,
    BufferFailure,
    NetworkFailure,
    EmptyBody,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Timeout => "timeout",
            Outcome::BufferFailure => "buffer_failure",
            Outcome::NetworkFailure => "network_failure",
            Outcome::EmptyBody => "empty_body",
        }
    }
}

/// Record one finished exchange.
pub fn record_exchange(outcome: Outcome, start_time: Instant) {
    counter!(EXCHANGES_TOTAL, "outcome" => outcome.as_str()).increment(1);
    histogram!(EXCHANGE_DURATION, "outcome" => outcome.as_str())
        .record(start_time.elapsed().as_secs_f64());
}

/// Record the size of a completed body.
pub fn record_body(bytes: usize, chunks: usize) {
    histogram!(BODY_BYTES).record(bytes as f64);
    counter!(CHUNKS_TOTAL).increment(chunks as u64);
}
