//! Single-page fetcher that reports its result as one JSON line.
//!
//! # Architecture Overview
//!
//! ```text
//!     argv ──▶ cli ──▶ config ──▶ net::exchange ──▶ net::transport ──▶ remote page
//!                                      │                  │
//!                                      │        chunks    ▼
//!                                      │         ┌────────────────┐
//!                                      │         │ buffer         │
//!                                      │         │ ResponseBuffer │
//!                                      │         └───────┬────────┘
//!                                      ▼                 │ finalize
//!     stdout ◀── output::ScrapeResult ◀── Page ◀─────────┘
//!
//!     Cross-cutting: observability (stderr logs, metrics), resilience (deadline)
//! ```

// Core subsystems
pub mod buffer;
pub mod net;
pub mod output;

// Surface
pub mod cli;
pub mod config;
pub mod error;

// Cross-cutting concerns
pub mod observability;
pub mod resilience;

pub use buffer::{BufferError, ResponseBuffer};
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use net::{fetch_page, Page, ReqwestTransport, Transport};
pub use output::ScrapeResult;
