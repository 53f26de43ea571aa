//! Storage growth strategies for [`ResponseBuffer`](super::ResponseBuffer).

use crate::buffer::BufferError;

/// Grows a byte vector so it can take `additional` more bytes.
///
/// Implementations must leave `buf` untouched on failure.
pub trait Reserve {
    fn reserve(&mut self, buf: &mut Vec<u8>, additional: usize) -> Result<(), BufferError>;
}

/// Default strategy backed by the global allocator.
///
/// `Vec::try_reserve` keeps the amortized doubling behaviour of `Vec` but
/// reports allocation failure instead of aborting the process.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemReserve;

impl Reserve for SystemReserve {
    fn reserve(&mut self, buf: &mut Vec<u8>, additional: usize) -> Result<(), BufferError> {
        buf.try_reserve(additional)
            .map_err(|_| BufferError::OutOfMemory { requested: additional })
    }
}

/// Fails the `fail_on`-th reservation (1-based), succeeds otherwise.
#[cfg(test)]
pub(crate) struct FailingReserve {
    calls: usize,
    fail_on: usize,
}

#[cfg(test)]
impl FailingReserve {
    pub(crate) fn new(fail_on: usize) -> Self {
        Self { calls: 0, fail_on }
    }
}

#[cfg(test)]
impl Reserve for FailingReserve {
    fn reserve(&mut self, buf: &mut Vec<u8>, additional: usize) -> Result<(), BufferError> {
        self.calls += 1;
        if self.calls == self.fail_on {
            return Err(BufferError::OutOfMemory { requested: additional });
        }
        SystemReserve.reserve(buf, additional)
    }
}
