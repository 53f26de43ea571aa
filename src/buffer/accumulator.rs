//! Growable accumulator for one HTTP response body.
//!
//! # State Transitions
//! ```text
//! Empty → Accumulating: first append (empty chunks included)
//! Empty/Accumulating → Finalized: finalize
//! Finalized: append and finalize are rejected
//! ```

use std::mem;

use crate::buffer::reserve::{Reserve, SystemReserve};
use crate::buffer::BufferError;

/// Receives body chunks from a transport as they arrive.
///
/// Returning an error tells the transport to stop delivering and fail the
/// exchange.
pub trait ChunkSink {
    fn on_chunk(&mut self, chunk: &[u8]) -> Result<usize, BufferError>;
}

/// Lifecycle of a [`ResponseBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferState {
    Empty,
    Accumulating,
    Finalized,
}

/// Contiguous byte accumulator for a body of unknown length.
#[derive(Debug)]
pub struct ResponseBuffer<R = SystemReserve> {
    bytes: Vec<u8>,
    /// Total bytes appended. Survives `finalize`, unlike `bytes`.
    len: usize,
    limit: Option<usize>,
    state: BufferState,
    reserve: R,
}

impl ResponseBuffer<SystemReserve> {
    /// Create an empty buffer using the global allocator.
    pub fn new() -> Self {
        Self::with_reserve(SystemReserve)
    }
}

impl Default for ResponseBuffer<SystemReserve> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reserve> ResponseBuffer<R> {
    /// Create an empty buffer with a custom growth strategy.
    pub fn with_reserve(reserve: R) -> Self {
        Self {
            bytes: Vec::new(),
            len: 0,
            limit: None,
            state: BufferState::Empty,
            reserve,
        }
    }

    /// Cap the total body size at `limit` bytes.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Append `chunk` to the end of the buffer.
    ///
    /// Returns the number of bytes appended, always `chunk.len()` on success.
    /// On error the buffer content is exactly what it was before the call.
    pub fn append(&mut self, chunk: &[u8]) -> Result<usize, BufferError> {
        if self.state == BufferState::Finalized {
            return Err(BufferError::AlreadyFinalized);
        }

        if let Some(limit) = self.limit {
            let exceeds = self
                .len
                .checked_add(chunk.len())
                .map_or(true, |total| total > limit);
            if exceeds {
                return Err(BufferError::LimitExceeded { limit });
            }
        }

        if !chunk.is_empty() {
            self.reserve.reserve(&mut self.bytes, chunk.len())?;
            self.bytes.extend_from_slice(chunk);
            self.len += chunk.len();
        }

        self.state = BufferState::Accumulating;
        Ok(chunk.len())
    }

    /// Hand out the complete body. Legal exactly once.
    pub fn finalize(&mut self) -> Result<Vec<u8>, BufferError> {
        if self.state == BufferState::Finalized {
            return Err(BufferError::AlreadyFinalized);
        }
        self.state = BufferState::Finalized;
        Ok(mem::take(&mut self.bytes))
    }

    /// True iff no bytes have been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total bytes appended so far.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Content accumulated so far. Empty once the buffer has been finalized.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn state(&self) -> BufferState {
        self.state
    }
}

impl<R: Reserve> ChunkSink for ResponseBuffer<R> {
    fn on_chunk(&mut self, chunk: &[u8]) -> Result<usize, BufferError> {
        self.append(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::reserve::FailingReserve;

    #[test]
    fn test_finalize_without_appends_is_empty() {
        let mut buf = ResponseBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.state(), BufferState::Empty);

        let body = buf.finalize().unwrap();
        assert!(body.is_empty());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_two_chunks_concatenate() {
        let mut buf = ResponseBuffer::new();
        assert_eq!(buf.append(b"Hello, ").unwrap(), 7);
        assert_eq!(buf.append(b"World!").unwrap(), 6);
        assert_eq!(buf.finalize().unwrap(), b"Hello, World!");
    }

    #[test]
    fn test_many_single_byte_chunks() {
        let mut buf = ResponseBuffer::new();
        for _ in 0..1000 {
            buf.append(b"a").unwrap();
        }
        let body = buf.finalize().unwrap();
        assert_eq!(body.len(), 1000);
        assert!(body.iter().all(|&b| b == b'a'));
    }

    #[test]
    fn test_empty_chunks_leave_length_unchanged() {
        let mut buf = ResponseBuffer::new();
        assert_eq!(buf.append(b"").unwrap(), 0);
        assert!(buf.is_empty());
        assert_eq!(buf.state(), BufferState::Accumulating);

        buf.append(b"ab").unwrap();
        buf.append(b"").unwrap();
        buf.append(b"c").unwrap();
        buf.append(b"").unwrap();
        assert_eq!(buf.len(), 3);
        assert_eq!(buf.finalize().unwrap(), b"abc");
    }

    #[test]
    fn test_length_tracks_every_append() {
        let chunks: [&[u8]; 5] = [b"x", b"", b"yz", b"0123456789", b""];
        let mut buf = ResponseBuffer::new();
        let mut expected = Vec::new();
        for chunk in chunks {
            let before = buf.len();
            buf.append(chunk).unwrap();
            expected.extend_from_slice(chunk);
            assert_eq!(buf.len(), before + chunk.len());
            assert_eq!(buf.as_bytes(), expected.as_slice());
            assert_eq!(buf.is_empty(), expected.is_empty());
        }
        assert_eq!(buf.finalize().unwrap(), expected);
    }

    #[test]
    fn test_allocator_failure_keeps_prior_content() {
        let mut buf = ResponseBuffer::with_reserve(FailingReserve::new(3));
        buf.append(b"first ").unwrap();
        buf.append(b"second").unwrap();

        let err = buf.append(b" third").unwrap_err();
        assert_eq!(err, BufferError::OutOfMemory { requested: 6 });
        assert_eq!(buf.as_bytes(), b"first second");
        assert_eq!(buf.len(), 12);
    }

    #[test]
    fn test_append_after_finalize_is_rejected() {
        let mut buf = ResponseBuffer::new();
        buf.append(b"body").unwrap();
        assert_eq!(buf.finalize().unwrap(), b"body");

        assert_eq!(buf.append(b"more"), Err(BufferError::AlreadyFinalized));
        assert_eq!(buf.append(b""), Err(BufferError::AlreadyFinalized));
        assert_eq!(buf.finalize(), Err(BufferError::AlreadyFinalized));
        assert_eq!(buf.len(), 4);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_limit_rejects_overflowing_chunk() {
        let mut buf = ResponseBuffer::new().with_limit(8);
        buf.append(b"12345").unwrap();
        buf.append(b"678").unwrap();

        assert_eq!(buf.append(b"9"), Err(BufferError::LimitExceeded { limit: 8 }));
        assert_eq!(buf.append(b""), Ok(0));
        assert_eq!(buf.finalize().unwrap(), b"12345678");
    }

    #[test]
    fn test_chunk_sink_delegates_to_append() {
        let mut buf = ResponseBuffer::new();
        let sink: &mut dyn ChunkSink = &mut buf;
        sink.on_chunk(b"via ").unwrap();
        sink.on_chunk(b"sink").unwrap();
        assert_eq!(buf.finalize().unwrap(), b"via sink");
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        fn failing_history() -> impl Strategy<Value = (Vec<Vec<u8>>, usize)> {
            vec(vec(any::<u8>(), 1..32), 1..16).prop_flat_map(|chunks| {
                let n = chunks.len();
                (Just(chunks), 1..=n)
            })
        }

        proptest! {
            #[test]
            fn append_history_concatenates(chunks in vec(vec(any::<u8>(), 0..64), 0..32)) {
                let mut buf = ResponseBuffer::new();
                let mut expected = Vec::new();
                for chunk in &chunks {
                    let before = buf.len();
                    prop_assert_eq!(buf.append(chunk), Ok(chunk.len()));
                    expected.extend_from_slice(chunk);
                    prop_assert_eq!(buf.len() - before, chunk.len());
                    prop_assert_eq!(buf.is_empty(), expected.is_empty());
                    prop_assert_eq!(buf.as_bytes(), expected.as_slice());
                }
                prop_assert_eq!(buf.finalize(), Ok(expected));
            }

            #[test]
            fn allocator_failure_keeps_prefix((chunks, fail_on) in failing_history()) {
                let mut buf = ResponseBuffer::with_reserve(FailingReserve::new(fail_on));
                let failing = fail_on - 1;
                let prefix: Vec<u8> = chunks[..failing].concat();

                for (i, chunk) in chunks.iter().enumerate() {
                    let result = buf.append(chunk);
                    if i == failing {
                        prop_assert_eq!(
                            result,
                            Err(BufferError::OutOfMemory { requested: chunk.len() })
                        );
                        break;
                    }
                    prop_assert_eq!(result, Ok(chunk.len()));
                }
                prop_assert_eq!(buf.len(), prefix.len());
                prop_assert_eq!(buf.finalize(), Ok(prefix));
            }
        }
    }
}
