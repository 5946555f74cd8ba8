//! Source locations.
//!
//! A [`Span`] is a half-open byte range into one input unit. A [`Position`]
//! is the human-facing 1-based line/column of a byte offset, computed once by
//! the tokenizer and carried on every token.

use std::fmt;

/// Byte range `[start, end)` in a source buffer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Placeholder span used when comparing trees structurally.
    pub const DUMMY: Span = Span { start: 0, end: 0 };

    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    /// Zero-length span at `offset`.
    #[inline]
    pub const fn point(offset: u32) -> Span {
        Span {
            start: offset,
            end: offset,
        }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    #[inline]
    pub fn to_range(&self) -> std::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// 1-based line and column of a byte offset.
///
/// Columns count characters, not bytes: UTF-8 continuation bytes do not
/// advance the column. `\r\n` counts as a single line break.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first byte of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Advance past `bytes`, returning the position of the byte that follows.
    #[must_use]
    pub fn advance(self, bytes: &[u8]) -> Position {
        let mut pos = self;
        for &b in bytes {
            match b {
                b'\n' => {
                    pos.line += 1;
                    pos.column = 1;
                }
                // UTF-8 continuation byte: same character as the previous byte.
                0x80..=0xBF => {}
                _ => pos.column += 1,
            }
        }
        pos
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Position, Span};
    crate::static_assert_size!(Span, 8);
    crate::static_assert_size!(Position, 8);
}
