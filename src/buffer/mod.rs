//! Response body accumulation.
//!
//! # Data Flow
//! ```text
//! transport delivers chunk
//!     → ChunkSink::on_chunk
//!     → ResponseBuffer::append (reserve.rs grows storage)
//!     → ... repeated until the transport completes
//!     → ResponseBuffer::finalize → Vec<u8> handed to the caller
//! ```
//!
//! # Design Decisions
//! - One buffer per exchange, single writer, no locking
//! - Growth is fallible: allocator failure is an error, not an abort
//! - A failed append never leaves a partial copy behind

pub mod accumulator;
pub mod reserve;

pub use accumulator::{BufferState, ChunkSink, ResponseBuffer};
pub use reserve::{Reserve, SystemReserve};

use thiserror::Error;

/// Errors raised while accumulating a response body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The allocator could not satisfy the required growth.
    #[error("out of memory growing response buffer by {requested} bytes")]
    OutOfMemory { requested: usize },

    /// The configured body limit would be exceeded.
    #[error("response body exceeds limit of {limit} bytes")]
    LimitExceeded { limit: usize },

    /// `append` or `finalize` was called after `finalize`.
    #[error("response buffer already finalized")]
    AlreadyFinalized,
}
