//! Token cooking: raw scanner tags to parser token kinds.
//!
//! ```text
//! source → RawScanner → (RawTag, len) → cook → (TokenKind, flaw)
//! ```
//!
//! - **Operators/delimiters**: direct 1:1 mapping
//! - **Identifiers**: keyword lookup
//! - **Integers**: radix split, overflow check
//! - **Strings**: escape validation (decoding is left to [`string_value`](crate::string_value))
//! - **Errors**: mapped to a [`LexErrorKind`]
//!
//! Trivia never reaches the cooker.

use leo_ir::{LexErrorKind, TokenKind};
use leo_lexer_core::RawTag;

use crate::escape;
use crate::keywords;
use crate::numbers::{parse_int_skip_underscores, split_radix};

/// Result of cooking one raw token.
pub(crate) type Cooked = Result<TokenKind, LexErrorKind>;

/// Cook a non-trivia raw token whose source text is `lexeme`.
pub(crate) fn cook(tag: RawTag, lexeme: &[u8]) -> Cooked {
    Ok(match tag {
        RawTag::Ident => keywords::lookup(lexeme).unwrap_or(TokenKind::Ident),
        RawTag::Int | RawTag::HexInt | RawTag::BinInt => return cook_int(lexeme),
        RawTag::String => return cook_string(lexeme),

        // Operators
        RawTag::Plus => TokenKind::Plus,
        RawTag::Minus => TokenKind::Minus,
        RawTag::Star => TokenKind::Star,
        RawTag::Slash => TokenKind::Slash,
        RawTag::Percent => TokenKind::Percent,
        RawTag::StarStar => TokenKind::StarStar,
        RawTag::Equal => TokenKind::Eq,
        RawTag::PlusEqual => TokenKind::PlusEq,
        RawTag::MinusEqual => TokenKind::MinusEq,
        RawTag::StarEqual => TokenKind::StarEq,
        RawTag::SlashEqual => TokenKind::SlashEq,
        RawTag::PercentEqual => TokenKind::PercentEq,
        RawTag::EqualEqual => TokenKind::EqEq,
        RawTag::NotEqual => TokenKind::NotEq,
        RawTag::Less => TokenKind::Lt,
        RawTag::LessEqual => TokenKind::LtEq,
        RawTag::Greater => TokenKind::Gt,
        RawTag::GreaterEqual => TokenKind::GtEq,
        RawTag::Bang => TokenKind::Bang,
        RawTag::AmpersandAmpersand => TokenKind::AmpAmp,
        RawTag::PipePipe => TokenKind::PipePipe,
        RawTag::Dot => TokenKind::Dot,

        // Delimiters
        RawTag::LeftParen => TokenKind::LParen,
        RawTag::RightParen => TokenKind::RParen,
        RawTag::LeftBrace => TokenKind::LBrace,
        RawTag::RightBrace => TokenKind::RBrace,
        RawTag::LeftBracket => TokenKind::LBracket,
        RawTag::RightBracket => TokenKind::RBracket,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Semicolon => TokenKind::Semicolon,
        RawTag::Colon => TokenKind::Colon,

        // Errors
        RawTag::InvalidByte => return Err(LexErrorKind::UnknownCharacter),
        RawTag::UnterminatedString => return Err(LexErrorKind::UnterminatedString),
        RawTag::UnterminatedBlockComment => return Err(LexErrorKind::UnterminatedComment),
        RawTag::MalformedNumber => return Err(LexErrorKind::MalformedNumber),

        RawTag::Eof => TokenKind::Eof,

        // The tokenizer skips trivia before cooking.
        RawTag::Whitespace | RawTag::Newline | RawTag::LineComment | RawTag::BlockComment => {
            return Err(LexErrorKind::UnknownCharacter)
        }
    })
}

fn cook_int(lexeme: &[u8]) -> Cooked {
    let (digits, radix) = split_radix(lexeme);
    match parse_int_skip_underscores(digits, radix) {
        Some(_) => Ok(TokenKind::Int),
        None => Err(LexErrorKind::IntegerOverflow),
    }
}

fn cook_string(lexeme: &[u8]) -> Cooked {
    let content = string_content(lexeme);
    match escape::validate(content) {
        Ok(()) => Ok(TokenKind::Str),
        Err(escape::InvalidEscape) => Err(LexErrorKind::InvalidEscape),
    }
}

/// Bytes between the quotes of a terminated string literal.
pub(crate) fn string_content(lexeme: &[u8]) -> &[u8] {
    match lexeme {
        [b'"', content @ .., b'"'] => content,
        _ => lexeme,
    }
}

#[cfg(test)]
mod tests;
