//! Scalar to Byte Helpers
//!
//! NOTE: these produce LITTLE-endian arrays, unlike the buffer's own
//! multi-byte writes, which are big-endian. Callers building wire
//! fragments outside the buffer depend on this ordering; keep both.

use super::bits::BitSet;

pub fn from_i8(value: i8) -> [u8; 1] {
    value.to_le_bytes()
}

pub fn from_i16(value: i16) -> [u8; 2] {
    value.to_le_bytes()
}

pub fn from_i32(value: i32) -> [u8; 4] {
    value.to_le_bytes()
}

pub fn from_i64(value: i64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Hex of the low `max_bytes` bytes of a little-endian array, most
/// significant byte first
fn hex_le(bytes: &[u8], max_bytes: usize) -> String {
    let count = max_bytes.min(bytes.len());
    let mut msb_first = bytes[..count].to_vec();
    msb_first.reverse();
    hex::encode_upper(msb_first)
}

/// Hex of the low `max_bytes` bytes of `value`, e.g. `hex_i16(0x1234, 2) == "1234"`
pub fn hex_i16(value: i16, max_bytes: usize) -> String {
    hex_le(&from_i16(value), max_bytes)
}

pub fn hex_i32(value: i32, max_bytes: usize) -> String {
    hex_le(&from_i32(value), max_bytes)
}

pub fn hex_i64(value: i64, max_bytes: usize) -> String {
    hex_le(&from_i64(value), max_bytes)
}

/// Binary rendering of the low `max_bits` bits of `value`
pub fn bit_string_i8(value: i8, max_bits: usize, space_every: usize) -> String {
    BitSet::from_bytes(&from_i8(value)).to_bit_string(max_bits, space_every)
}

pub fn bit_string_i16(value: i16, max_bits: usize, space_every: usize) -> String {
    BitSet::from_bytes(&from_i16(value)).to_bit_string(max_bits, space_every)
}

pub fn bit_string_i32(value: i32, max_bits: usize, space_every: usize) -> String {
    BitSet::from_bytes(&from_i32(value)).to_bit_string(max_bits, space_every)
}

pub fn bit_string_i64(value: i64, max_bits: usize, space_every: usize) -> String {
    BitSet::from_bytes(&from_i64(value)).to_bit_string(max_bits, space_every)
}
