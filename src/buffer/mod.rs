//! Buffer module for membuf
//!
//! This module provides:
//! - Growable big-endian read/write buffer
//! - Lock-guarded wrapper for sharing one buffer between threads

pub mod byte_buffer;
pub mod shared;

pub use byte_buffer::{ByteBuffer, BLOCK_SIZE};
pub use shared::SharedByteBuffer;
