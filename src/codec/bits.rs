//! Bit View over Bytes
//!
//! A read-only, fixed-size boolean view of a byte sequence. Bit `j` of
//! byte `i` (least significant first) is index `i * 8 + j`, so a
//! little-endian byte array maps each index to its numeric bit weight.

/// Number of bits in one byte
pub const BITS_PER_BYTE: usize = 8;

/// Fixed-size bitset built from bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitSet {
    bytes: Vec<u8>,
}

impl BitSet {
    /// View over a single byte (8 bits)
    pub fn from_byte(value: u8) -> Self {
        Self { bytes: vec![value] }
    }

    /// View over a byte slice (`bytes.len() * 8` bits)
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }

    /// Number of addressable bits
    pub fn len(&self) -> usize {
        self.bytes.len() * BITS_PER_BYTE
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Read bit `index`; indices past the end read as `false`
    pub fn get(&self, index: usize) -> bool {
        match self.bytes.get(index / BITS_PER_BYTE) {
            Some(byte) => byte & (1 << (index % BITS_PER_BYTE)) != 0,
            None => false,
        }
    }

    /// Render the lowest `max_bits` bits, most significant first.
    ///
    /// With `space_every > 0` a space separates each group of that many
    /// bits, counted from the low end.
    pub fn to_bit_string(&self, max_bits: usize, space_every: usize) -> String {
        let max_bits = max_bits.min(self.len());
        let mut out = String::with_capacity(max_bits + max_bits / space_every.max(1));

        for i in (0..max_bits).rev() {
            out.push(if self.get(i) { '1' } else { '0' });
            if space_every != 0 && i > 0 && i % space_every == 0 {
                out.push(' ');
            }
        }
        out
    }
}
