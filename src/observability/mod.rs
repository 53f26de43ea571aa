//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events on stderr)
//!     → metrics.rs (counters, histograms)
//!
//! Each exchange runs in an `exchange` span tagged with a UUID.
//! ```
//!
//! # Design Decisions
//! - stdout is reserved for the JSON result document
//! - Metrics are cheap no-ops unless a recorder is installed

pub mod logging;
pub mod metrics;
