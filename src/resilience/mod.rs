//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Exchange with remote page:
//!     → timeouts.rs (enforce total deadline)
//!     → On timeout: transport dropped, partial body discarded
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every exchange has a deadline
//! - No retries: a failed exchange is reported once

pub mod timeouts;
