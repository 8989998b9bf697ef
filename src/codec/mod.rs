//! Codec module for membuf
//!
//! Stateless helpers the buffer builds on:
//! - Text encoding and hex rendering
//! - Byte range fill/copy
//! - Little-endian scalar helpers
//! - Bit view over bytes

pub mod arrays;
pub mod bits;
pub mod scalar;
pub mod text;

pub use bits::BitSet;
pub use text::{bytes_to_string, string_to_bytes};
