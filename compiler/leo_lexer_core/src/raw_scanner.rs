//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner runs over a sentinel-terminated [`Cursor`] and never
//! allocates. It does not resolve keywords, validate escapes or compute
//! numeric values; the cooking layer does that.
//!
//! Dispatch covers all 256 byte values. Each arm calls a focused method that
//! advances the cursor and returns a `RawToken`. The sentinel byte (`0x00`)
//! dispatches to `eof()`, which tells real EOF apart from an interior null.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner over one source buffer.
///
/// Error conditions are encoded as `RawTag` variants, never as `Err`, so the
/// scan always runs to the end of input.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` once the source is exhausted,
    /// and keeps returning it on later calls.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash(start),
            b'+' => self.with_equal(start, RawTag::Plus, RawTag::PlusEqual),
            b'-' => self.with_equal(start, RawTag::Minus, RawTag::MinusEqual),
            b'*' => self.star(start),
            b'%' => self.with_equal(start, RawTag::Percent, RawTag::PercentEqual),
            b'=' => self.with_equal(start, RawTag::Equal, RawTag::EqualEqual),
            b'!' => self.with_equal(start, RawTag::Bang, RawTag::NotEqual),
            b'<' => self.with_equal(start, RawTag::Less, RawTag::LessEqual),
            b'>' => self.with_equal(start, RawTag::Greater, RawTag::GreaterEqual),
            b'&' => self.doubled(start, RawTag::AmpersandAmpersand),
            b'|' => self.doubled(start, RawTag::PipePipe),
            b'.' => self.single(start, RawTag::Dot),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b',' => self.single(start, RawTag::Comma),
            b';' => self.single(start, RawTag::Semicolon),
            b':' => self.single(start, RawTag::Colon),
            0x80..=0xFF => self.invalid_char(start),
            // Control characters, DEL and ASCII punctuation with no meaning.
            1..=8
            | 0x0E..=0x1F
            | 0x7F
            | b'#'
            | b'$'
            | b'@'
            | b'?'
            | b'\\'
            | b'\''
            | b'`'
            | b'^'
            | b'~' => self.invalid_byte(start),
        }
    }

    #[inline]
    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof(&mut self, start: u32) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte.
            self.cursor.advance();
            self.token(start, RawTag::InvalidByte)
        }
    }

    // ─── Whitespace & Newlines ─────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'\n' {
            // \r\n is a single line break.
            self.cursor.advance_n(2);
            self.token(start, RawTag::Newline)
        } else {
            self.whitespace(start)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments & Slash ──────────────────────────────────────────

    fn slash(&mut self, start: u32) -> RawToken {
        match self.cursor.peek() {
            b'/' => {
                self.cursor.advance_n(2);
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance_n(2);
                if self.cursor.eat_past_block_comment_end() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedBlockComment)
                }
            }
            _ => self.with_equal(start, RawTag::Slash, RawTag::SlashEqual),
        }
    }

    // ─── Identifiers ───────────────────────────────────────────────

    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    // ─── Operators ─────────────────────────────────────────────────

    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// `op` or `op=`.
    fn with_equal(&mut self, start: u32, bare: RawTag, compound: RawTag) -> RawToken {
        if self.cursor.peek() == b'=' {
            self.cursor.advance_n(2);
            self.token(start, compound)
        } else {
            self.single(start, bare)
        }
    }

    fn star(&mut self, start: u32) -> RawToken {
        if self.cursor.peek() == b'*' {
            self.cursor.advance_n(2);
            self.token(start, RawTag::StarStar)
        } else {
            self.with_equal(start, RawTag::Star, RawTag::StarEqual)
        }
    }

    /// `&&` / `||`. A lone `&` or `|` starts no token.
    fn doubled(&mut self, start: u32, tag: RawTag) -> RawToken {
        if self.cursor.peek() == self.cursor.current() {
            self.cursor.advance_n(2);
            self.token(start, tag)
        } else {
            self.invalid_byte(start)
        }
    }

    // ─── Numeric Literals ──────────────────────────────────────────

    fn number(&mut self, start: u32) -> RawToken {
        let first = self.cursor.current();
        self.cursor.advance();

        if first == b'0' {
            match self.cursor.current() {
                b'x' => return self.radix_number(start, RawTag::HexInt, is_hex_digit),
                b'b' => return self.radix_number(start, RawTag::BinInt, is_bin_digit),
                _ => {}
            }
        }

        self.cursor.eat_while(|b| b.is_ascii_digit() || b == b'_');
        self.finish_number(start, RawTag::Int)
    }

    /// Digits after a `0x` / `0b` prefix. At least one digit is required.
    fn radix_number(&mut self, start: u32, tag: RawTag, is_digit: fn(u8) -> bool) -> RawToken {
        self.cursor.advance(); // prefix letter
        let digits_start = self.cursor.pos();
        self.cursor.eat_while(|b| is_digit(b) || b == b'_');
        let has_digit = self
            .cursor
            .slice_from(digits_start)
            .iter()
            .any(|&b| b != b'_');
        if has_digit {
            self.finish_number(start, tag)
        } else {
            self.cursor.eat_while(is_ident_continue);
            self.token(start, RawTag::MalformedNumber)
        }
    }

    /// A number running straight into letters or other digits is one
    /// malformed token covering the whole alphanumeric run.
    fn finish_number(&mut self, start: u32, tag: RawTag) -> RawToken {
        if is_ident_continue(self.cursor.current()) {
            self.cursor.eat_while(is_ident_continue);
            self.token(start, RawTag::MalformedNumber)
        } else {
            self.token(start, tag)
        }
    }

    // ─── String Literals ───────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return self.token(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance();
                    // An escaped line break still ends the line.
                    if !matches!(self.cursor.current(), b'\n' | b'\r') {
                        self.cursor.advance();
                    }
                }
                // '\n', '\r' or EOF; the line break is not part of the token.
                _ => return self.token(start, RawTag::UnterminatedString),
            }
        }
    }

    // ─── Error tokens ──────────────────────────────────────────────

    fn invalid_byte(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::InvalidByte)
    }

    /// Non-ASCII input: the whole UTF-8 sequence becomes one token.
    fn invalid_char(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::InvalidByte)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// The sentinel byte (0x00) maps to `false`, terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

fn is_bin_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}
