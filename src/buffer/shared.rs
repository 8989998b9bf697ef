//! Shared Byte Buffer
//!
//! `ByteBuffer` is single-owner: every mutator takes `&mut self`, so the
//! borrow checker already serializes access. This wrapper is for the case
//! where one buffer is shared between threads; all access goes through one
//! lock, so callers never observe a half-applied write or resize.

use parking_lot::{Mutex, MutexGuard};

use super::byte_buffer::ByteBuffer;
use crate::telemetry::BufferSnapshot;

/// `ByteBuffer` behind a single exclusive lock. Share it with `Arc`.
#[derive(Debug, Default)]
pub struct SharedByteBuffer {
    inner: Mutex<ByteBuffer>,
}

impl SharedByteBuffer {
    pub fn new(initial_capacity: usize) -> Self {
        Self::from_buffer(ByteBuffer::new(initial_capacity))
    }

    pub fn from_buffer(buffer: ByteBuffer) -> Self {
        Self {
            inner: Mutex::new(buffer),
        }
    }

    /// Run `f` with the lock held.
    ///
    /// Use this for multi-step sequences (seek then read, several writes
    /// forming one record) that must not interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut ByteBuffer) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Take the lock directly
    pub fn lock(&self) -> MutexGuard<'_, ByteBuffer> {
        self.inner.lock()
    }

    pub fn snapshot(&self) -> BufferSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn into_inner(self) -> ByteBuffer {
        self.inner.into_inner()
    }
}

impl From<ByteBuffer> for SharedByteBuffer {
    fn from(buffer: ByteBuffer) -> Self {
        Self::from_buffer(buffer)
    }
}
