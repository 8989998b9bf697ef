//! Growable Byte Buffer
//!
//! Position-addressed read/write cursor over an owned byte region.
//! Three numbers are tracked separately:
//! - `capacity`: size of the backing storage, always a multiple of the block size
//! - `length`: bytes logically written; reads never go past it
//! - `position`: where the next read or write starts
//!
//! All multi-byte integers are big-endian (network byte order).
//! Strings are UTF-8 followed by a single 0x00 terminator.

use crate::codec::{arrays, scalar, text};
use crate::config::BufferConfig;
use crate::error::{BufferError, Result};
use crate::telemetry::{self, BufferSnapshot};

/// Default growth granularity
pub const BLOCK_SIZE: usize = 256;

/// Growable big-endian read/write buffer
#[derive(Clone, Debug)]
pub struct ByteBuffer {
    /// Backing storage; its length is the capacity
    storage: Vec<u8>,
    /// Bytes logically written (<= capacity)
    length: usize,
    /// Cursor for the next read or write
    position: usize,
    /// Growth granularity
    block_size: usize,
    /// Whether telemetry events are emitted
    log_events: bool,
}

impl ByteBuffer {
    /// Create with at least `initial_capacity` bytes of storage.
    ///
    /// A capacity of 0 allocates nothing.
    pub fn new(initial_capacity: usize) -> Self {
        Self::build(initial_capacity, BLOCK_SIZE, true)
    }

    /// Create from configuration
    pub fn with_config(config: &BufferConfig) -> Self {
        // A zero block size would make growth impossible
        let block_size = config.block_size.max(1);
        Self::build(config.initial_capacity, block_size, config.log_events)
    }

    fn build(initial_capacity: usize, block_size: usize, log_events: bool) -> Self {
        let mut buffer = Self {
            storage: Vec::new(),
            length: 0,
            position: 0,
            block_size,
            log_events,
        };
        buffer.grow_to(initial_capacity);
        buffer
    }

    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Bytes left to read before `length`
    pub fn remaining(&self) -> usize {
        self.length.saturating_sub(self.position)
    }

    /// The written bytes, `[0, length)`
    pub fn as_slice(&self) -> &[u8] {
        &self.storage[..self.length]
    }

    /// The whole live storage, including bytes past `length`.
    ///
    /// Borrowed, so it cannot outlive a later growth.
    pub fn buffer(&self) -> &[u8] {
        &self.storage
    }

    /// Current bookkeeping
    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            capacity: self.capacity(),
            length: self.length,
            position: self.position,
        }
    }

    /// Forget the written bytes, keeping the storage.
    ///
    /// Only the length is dropped; the cursor is not rewound on its own
    /// account and simply clamps to the new length like any `set_length`.
    pub fn reset(&mut self) {
        self.length = 0;
        self.position = self.position.min(self.length);
    }

    /// Release the storage (capacity 0), then `reset`
    pub fn clear(&mut self) {
        self.storage = Vec::new();
        self.reset();

        if self.log_events {
            telemetry::event_cleared(self.snapshot()).emit();
        }
    }

    /// Grow storage to at least `min_capacity`, rounded up to the block grid.
    ///
    /// Returns true if storage was reallocated. The first `length` bytes
    /// survive; `length` and `position` are unchanged.
    pub fn grow_to(&mut self, min_capacity: usize) -> bool {
        if min_capacity <= self.storage.len() {
            return false;
        }

        let new_capacity = min_capacity.next_multiple_of(self.block_size);
        let mut storage = vec![0u8; new_capacity];
        storage[..self.length].copy_from_slice(&self.storage[..self.length]);
        self.storage = storage;

        if self.log_events {
            telemetry::event_grown(self.snapshot(), min_capacity).emit();
        }
        true
    }

    /// Set the logical length.
    ///
    /// Bytes newly exposed in `[old_length, new_length)` are zeroed.
    /// Position is clamped to the new length.
    pub fn set_length(&mut self, new_length: usize) -> Result<()> {
        self.grow_to(new_length);

        if new_length > self.length {
            // Storage may hold stale bytes from before a reset
            arrays::fill(&mut self.storage, 0, self.length, new_length)?;
        }
        self.length = new_length;

        if self.position > self.length {
            self.position = self.length;
        }
        Ok(())
    }

    /// Adjust the length by `amount`.
    ///
    /// NOTE: returns the resulting *position*, not the length.
    pub fn inc_length(&mut self, amount: isize) -> Result<usize> {
        let new_length = self.offset_by(self.length, amount, "length")?;
        self.set_length(new_length)?;
        Ok(self.position)
    }

    /// Move the cursor, growing capacity (not length) to cover it.
    ///
    /// The cursor may be placed past `length`; reads there fail until
    /// something is written.
    pub fn set_position(&mut self, new_position: usize) {
        self.grow_to(new_position);
        self.position = new_position;
    }

    /// Move the cursor by `amount`, returning the new position
    pub fn inc_position(&mut self, amount: isize) -> Result<usize> {
        let new_position = self.offset_by(self.position, amount, "position")?;
        self.set_position(new_position);
        Ok(self.position)
    }

    fn offset_by(&self, base: usize, amount: isize, what: &str) -> Result<usize> {
        match base.checked_add_signed(amount) {
            Some(value) => Ok(value),
            None => Err(self.invalid(format!(
                "{} must be >= 0 (current {}, amount {})",
                what, base, amount
            ))),
        }
    }

    // ---------------------------------------------------------------------
    // Writing
    // ---------------------------------------------------------------------

    /// Write `count` bytes from `bytes[offset..]` at the cursor
    pub fn write(&mut self, bytes: &[u8], offset: usize, count: usize) -> Result<()> {
        if offset.checked_add(count).map_or(true, |end| end > bytes.len()) {
            return Err(self.invalid(format!(
                "source window {}+{} outside {} bytes",
                offset,
                count,
                bytes.len()
            )));
        }

        self.grow_to(self.position + count);
        arrays::copy(bytes, offset, &mut self.storage, self.position, count)?;
        self.position += count;
        self.extend_length_to_position();
        Ok(())
    }

    /// Write a whole slice at the cursor
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write(bytes, 0, bytes.len())
    }

    pub fn write_i8(&mut self, value: i8) {
        self.put(value.to_be_bytes());
    }

    /// Write one byte; fails unless `value` is in `[0, 255]`
    pub fn write_u8(&mut self, value: i16) -> Result<()> {
        let value = u8::try_from(value).map_err(|_| {
            self.invalid(format!(
                "value is not a uint8: 0x{}",
                scalar::hex_i16(value, 2)
            ))
        })?;
        self.put(value.to_be_bytes());
        Ok(())
    }

    pub fn write_i16(&mut self, value: i16) {
        self.put(value.to_be_bytes());
    }

    /// Write two bytes big-endian; fails unless `value` is in `[0, 65535]`
    pub fn write_u16(&mut self, value: i32) -> Result<()> {
        let value = u16::try_from(value).map_err(|_| {
            self.invalid(format!(
                "value is not a uint16: 0x{}",
                scalar::hex_i32(value, 4)
            ))
        })?;
        self.put(value.to_be_bytes());
        Ok(())
    }

    pub fn write_i32(&mut self, value: i32) {
        self.put(value.to_be_bytes());
    }

    /// Write four bytes big-endian; fails unless `value` is in `[0, 2^32 - 1]`
    pub fn write_u32(&mut self, value: i64) -> Result<()> {
        let value = u32::try_from(value).map_err(|_| {
            self.invalid(format!(
                "value is not a uint32: 0x{}",
                scalar::hex_i64(value, 8)
            ))
        })?;
        self.put(value.to_be_bytes());
        Ok(())
    }

    /// Write a string followed by a 0x00 terminator.
    ///
    /// An empty or absent string writes only the terminator.
    pub fn write_string<'a>(&mut self, value: impl Into<Option<&'a str>>) {
        if let Some(s) = value.into().filter(|s| !s.is_empty()) {
            let bytes = text::string_to_bytes(s);
            // Room for payload and terminator in one growth
            self.grow_to(self.position + bytes.len() + 1);
            self.put_slice(&bytes);
        }
        self.put([0u8]);
    }

    fn put<const N: usize>(&mut self, bytes: [u8; N]) {
        self.put_slice(&bytes);
    }

    fn put_slice(&mut self, bytes: &[u8]) {
        let end = self.position + bytes.len();
        self.grow_to(end);
        self.storage[self.position..end].copy_from_slice(bytes);
        self.position = end;
        self.extend_length_to_position();
    }

    fn extend_length_to_position(&mut self) {
        if self.position > self.length {
            self.length = self.position;
        }
    }

    // ---------------------------------------------------------------------
    // Reading
    // ---------------------------------------------------------------------

    /// Read up to `count` bytes into `dest[offset..]`.
    ///
    /// Never fails: the count is clamped to the bytes left before `length`
    /// (and to the room in `dest`). Returns the bytes actually copied.
    pub fn read(&mut self, dest: &mut [u8], offset: usize, count: usize) -> usize {
        let count = count
            .min(self.remaining())
            .min(dest.len().saturating_sub(offset));
        if count == 0 {
            return 0;
        }

        dest[offset..offset + count]
            .copy_from_slice(&self.storage[self.position..self.position + count]);
        self.position += count;
        count
    }

    pub fn read_i8(&mut self) -> Result<i8> {
        self.take().map(i8::from_be_bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.take().map(u8::from_be_bytes)
    }

    pub fn read_i16(&mut self) -> Result<i16> {
        self.take().map(i16::from_be_bytes)
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.take().map(u16::from_be_bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        self.take().map(i32::from_be_bytes)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.take().map(u32::from_be_bytes)
    }

    /// Read up to the next 0x00 (or `length`) and decode it.
    ///
    /// NOTE: the cursor always advances one past the scanned span, even
    /// when `length` was hit without a terminator. In that case position
    /// ends up at `length + 1`.
    pub fn read_string(&mut self) -> String {
        let start = self.position;
        let end = if start < self.length {
            self.storage[start..self.length]
                .iter()
                .position(|&b| b == 0)
                .map_or(self.length, |i| start + i)
        } else {
            start
        };

        self.position = end + 1;
        text::bytes_to_string(&self.storage, start, end - start)
    }

    /// Consume exactly `N` bytes, or fail without moving the cursor
    fn take<const N: usize>(&mut self) -> Result<[u8; N]> {
        if self.remaining() < N {
            let err = BufferError::OutOfBounds {
                requested: N,
                position: self.position,
                length: self.length,
            };
            if self.log_events {
                telemetry::event_out_of_bounds(self.snapshot(), N).emit();
            }
            return Err(err);
        }

        let mut bytes = [0u8; N];
        bytes.copy_from_slice(&self.storage[self.position..self.position + N]);
        self.position += N;
        Ok(bytes)
    }

    fn invalid(&self, reason: String) -> BufferError {
        if self.log_events {
            telemetry::event_invalid_argument(self.snapshot(), &reason).emit();
        }
        BufferError::InvalidArgument(reason)
    }

    /// `(length):HEX` of the written bytes, for diagnostics
    pub fn to_debug_string(&self) -> String {
        format!("({}):{}", self.length, text::to_hex_string(self.as_slice()))
    }
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new(BLOCK_SIZE)
    }
}
