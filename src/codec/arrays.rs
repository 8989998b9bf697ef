//! Byte range primitives used by the buffer for zero-fill and copying.

use crate::error::{BufferError, Result};

/// Set every byte in `[start, end)` to `value`
pub fn fill(bytes: &mut [u8], value: u8, start: usize, end: usize) -> Result<()> {
    if start > end || end > bytes.len() {
        return Err(BufferError::invalid(format!(
            "fill range [{}, {}) outside buffer of {} bytes",
            start,
            end,
            bytes.len()
        )));
    }
    bytes[start..end].fill(value);
    Ok(())
}

/// Copy `count` bytes from `src[src_offset..]` into `dst[dst_offset..]`
pub fn copy(
    src: &[u8],
    src_offset: usize,
    dst: &mut [u8],
    dst_offset: usize,
    count: usize,
) -> Result<()> {
    let src_end = src_offset
        .checked_add(count)
        .filter(|&end| end <= src.len())
        .ok_or_else(|| {
            BufferError::invalid(format!(
                "source window {}+{} outside {} bytes",
                src_offset,
                count,
                src.len()
            ))
        })?;
    let dst_end = dst_offset
        .checked_add(count)
        .filter(|&end| end <= dst.len())
        .ok_or_else(|| {
            BufferError::invalid(format!(
                "destination window {}+{} outside {} bytes",
                dst_offset,
                count,
                dst.len()
            ))
        })?;

    dst[dst_offset..dst_end].copy_from_slice(&src[src_offset..src_end]);
    Ok(())
}
