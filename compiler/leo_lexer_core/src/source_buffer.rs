//! Sentinel-terminated source buffer.
//!
//! The buffer keeps a `0x00` sentinel byte after the source content so the
//! scanner can detect the end of input without bounds checks in its inner
//! loops. At least [`LOOKAHEAD_PADDING`] zero bytes follow the content,
//! which keeps `peek()` and `peek2()` in bounds at every position, and the
//! total length is rounded up to a cache line.

use crate::Cursor;

/// Cache line size in bytes, used for buffer alignment padding.
const CACHE_LINE: usize = 64;

/// Zero bytes guaranteed after the content: the sentinel plus two bytes of
/// lookahead.
const LOOKAHEAD_PADDING: usize = 3;

/// Owned, immutable copy of one input unit plus sentinel padding.
///
/// # Layout
///
/// ```text
/// [source_bytes..., 0x00, padding_zeros...]
///  ^                ^     ^
///  0                |     rounded up to 64-byte boundary
///              source_len (sentinel)
/// ```
///
/// Any byte sequence is accepted; the source does not have to be UTF-8.
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    source_len: u32,
}

impl SourceBuffer {
    /// Longest source that fits, given `u32` offsets and the padding.
    pub const MAX_LEN: usize = u32::MAX as usize - LOOKAHEAD_PADDING;

    /// Copy `source` into a new sentinel-terminated buffer.
    ///
    /// Content past [`Self::MAX_LEN`] bytes is dropped. Callers reading
    /// files reject such inputs up front.
    pub fn new(source: impl AsRef<[u8]>) -> Self {
        let source = source.as_ref();
        let source_len = source.len().min(Self::MAX_LEN);
        let source = &source[..source_len];

        let padded_len = (source_len + LOOKAHEAD_PADDING + CACHE_LINE - 1) & !(CACHE_LINE - 1);
        let mut buf = vec![0u8; padded_len];
        buf[..source_len].copy_from_slice(source);

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Source bytes without sentinel or padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Full buffer including sentinel and padding.
    pub fn as_sentinel_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Bytes in `start..end`, clamped to the source content.
    pub fn slice(&self, start: u32, end: u32) -> &[u8] {
        let end = end.min(self.source_len) as usize;
        let start = (start as usize).min(end);
        &self.buf[start..end]
    }

    /// Create a [`Cursor`] positioned at byte 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Length of the source content in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

impl From<&str> for SourceBuffer {
    fn from(source: &str) -> Self {
        SourceBuffer::new(source)
    }
}

impl From<&[u8]> for SourceBuffer {
    fn from(source: &[u8]) -> Self {
        SourceBuffer::new(source)
    }
}

#[cfg(test)]
mod tests;
