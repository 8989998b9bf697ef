//! Text Codec
//!
//! Strings cross the buffer boundary as UTF-8 bytes. Decoding is lossy:
//! malformed sequences become U+FFFD instead of failing, so a corrupt
//! payload never turns a string read into an error.

/// Encode a string as UTF-8 bytes
pub fn string_to_bytes(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// Decode `len` bytes starting at `offset` as UTF-8.
///
/// A window reaching past the end of `bytes` is clamped to what exists.
pub fn bytes_to_string(bytes: &[u8], offset: usize, len: usize) -> String {
    let start = offset.min(bytes.len());
    let end = offset.saturating_add(len).min(bytes.len());
    String::from_utf8_lossy(&bytes[start..end]).into_owned()
}

/// Encode a string followed by a single 0x00 terminator
pub fn to_null_terminated_bytes(value: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(value.len() + 1);
    bytes.extend_from_slice(value.as_bytes());
    bytes.push(0);
    bytes
}

/// Decode from `offset` up to the first 0x00 or the end, whichever comes first
pub fn from_null_terminated_bytes(bytes: &[u8], offset: usize) -> String {
    let start = offset.min(bytes.len());
    let len = bytes[start..]
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(bytes.len() - start);
    bytes_to_string(bytes, start, len)
}

/// Contiguous uppercase hex, e.g. `12345678`
pub fn to_hex_string(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Dash-separated hex of a window, e.g. `12-34-56…`.
///
/// The ellipsis marks bytes left over after the window.
pub fn to_hex_dump(bytes: &[u8], offset: usize, count: usize) -> String {
    let start = offset.min(bytes.len());
    let end = offset.saturating_add(count).min(bytes.len());

    let mut out = bytes[start..end]
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join("-");

    if end < bytes.len() {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_roundtrip() {
        let bytes = string_to_bytes("héllo 🦀");
        assert_eq!(bytes_to_string(&bytes, 0, bytes.len()), "héllo 🦀");
    }

    #[test]
    fn test_bytes_to_string_window() {
        assert_eq!(bytes_to_string(b"abcdef", 2, 3), "cde");
        // Window past the end is clamped
        assert_eq!(bytes_to_string(b"abc", 1, 10), "bc");
        assert_eq!(bytes_to_string(b"abc", 10, 2), "");
    }

    #[test]
    fn test_lossy_decode() {
        let decoded = bytes_to_string(&[b'a', 0xFF, b'b'], 0, 3);
        assert_eq!(decoded, "a\u{FFFD}b");
    }

    #[test]
    fn test_null_terminated() {
        assert_eq!(to_null_terminated_bytes("ab"), vec![b'a', b'b', 0]);
        assert_eq!(to_null_terminated_bytes(""), vec![0]);

        assert_eq!(from_null_terminated_bytes(b"ab\0cd\0", 0), "ab");
        assert_eq!(from_null_terminated_bytes(b"ab\0cd\0", 3), "cd");
        // Missing terminator reads to the end
        assert_eq!(from_null_terminated_bytes(b"xyz", 1), "yz");
    }

    #[test]
    fn test_hex_string() {
        assert_eq!(to_hex_string(&[0x12, 0x34, 0xAB]), "1234AB");
        assert_eq!(to_hex_string(&[]), "");
    }

    #[test]
    fn test_hex_dump() {
        let bytes = [0x12, 0x34, 0x56, 0x78];
        assert_eq!(to_hex_dump(&bytes, 0, 4), "12-34-56-78");
        assert_eq!(to_hex_dump(&bytes, 1, 2), "34-56…");
        assert_eq!(to_hex_dump(&bytes, 4, 2), "");
    }
}
