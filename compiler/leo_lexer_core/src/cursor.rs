//! Byte cursor over a sentinel-terminated buffer.
//!
//! EOF is the sentinel (`0x00`) at `pos >= source_len`. A `0x00` before
//! `source_len` is an interior null byte, which the scanner reports as an
//! invalid byte rather than end of input.

/// Cursor over a [`SourceBuffer`](crate::SourceBuffer).
///
/// The cursor is [`Copy`], so the scanner can snapshot it cheaply.
///
/// # Invariant
///
/// `buf[source_len..]` is all `0x00` and at least three bytes long.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: u32,
    source_len: u32,
}

const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) + 2 < buf.len(),
            "sentinel padding must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == 0, "sentinel byte must be 0x00");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte at the current position; `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    /// Byte one position ahead of current.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf[self.pos as usize + 1]
    }

    /// Byte two positions ahead of current.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.buf[self.pos as usize + 2]
    }

    /// Advance by one byte. Never moves past the sentinel.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.source_len {
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, stopping at the sentinel.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.source_len);
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> u32 {
        self.source_len
    }

    /// Source bytes from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a [u8] {
        debug_assert!(start <= self.pos, "slice start {start} past cursor");
        &self.buf[start as usize..self.pos as usize]
    }

    /// Advance while `pred` holds for the current byte, never past EOF.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.source_len && pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Number of bytes in the UTF-8 sequence led by `byte`.
    ///
    /// Continuation bytes and invalid leading bytes count as one.
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance past one character: the leading byte plus as many
    /// continuation bytes as it announces and the input actually has.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance();
        for _ in 1..width {
            if self.is_eof() || !matches!(self.current(), 0x80..=0xBF) {
                break;
            }
            self.advance();
        }
    }

    /// Advance past spaces, tabs, lone carriage returns, vertical tabs and
    /// form feeds. A `\r` directly before `\n` is left for the newline.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        while !self.is_eof() {
            match self.current() {
                b' ' | b'\t' | 0x0B | 0x0C => self.pos += 1,
                b'\r' if self.peek() != b'\n' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Advance to the next `\n` or EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.source_len,
        }
    }

    /// Advance past the next `*/`. Returns `false` (cursor at EOF) if there
    /// is none.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn eat_past_block_comment_end(&mut self) -> bool {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        match memchr::memmem::find(remaining, b"*/") {
            Some(offset) => {
                self.pos += offset as u32 + 2;
                true
            }
            None => {
                self.pos = self.source_len;
                false
            }
        }
    }

    /// Advance to the next byte that can end or escape a string literal
    /// (`"`, `\`, `\n`, `\r`) and return it, or return `0` at EOF.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "remaining.len() <= source_len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.buf[self.pos as usize..self.source_len as usize];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', remaining);
        let cr = memchr::memchr(b'\r', remaining);
        let offset = match (primary, cr) {
            (Some(x), Some(y)) => Some(x.min(y)),
            (Some(x), None) | (None, Some(x)) => Some(x),
            (None, None) => None,
        };
        if let Some(off) = offset {
            self.pos += off as u32;
            self.current()
        } else {
            self.pos = self.source_len;
            0
        }
    }
}
