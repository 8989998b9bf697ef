//! membuf: growable binary buffer
//!
//! A position-addressed byte buffer for building and parsing binary
//! records: big-endian fixed-width integers, raw byte ranges and
//! null-terminated UTF-8 strings, with block-aligned growth and length
//! tracked separately from capacity.
//!
//! ```
//! use membuf::ByteBuffer;
//!
//! let mut buf = ByteBuffer::new(256);
//! buf.write_u32(0x12345678).unwrap();
//! buf.write_string("ab");
//!
//! buf.set_position(0);
//! assert_eq!(buf.read_u32().unwrap(), 0x12345678);
//! assert_eq!(buf.read_string(), "ab");
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod telemetry;

pub use buffer::{ByteBuffer, SharedByteBuffer, BLOCK_SIZE};
pub use codec::BitSet;
pub use config::{BufferConfig, ConfigError};
pub use error::{BufferError, Result};
pub use telemetry::{BufferEvent, BufferEventType, BufferSnapshot};
