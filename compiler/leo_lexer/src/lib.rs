//! Tokenizer for Leo.
//!
//! Turns a [`SourceBuffer`] into a lazy stream of [`Token`]s. The stream is
//! total: every input produces tokens, malformed input included. Problems
//! are reported as [`TokenKind::Invalid`](leo_ir::TokenKind::Invalid) tokens
//! carrying a [`LexErrorKind`](leo_ir::LexErrorKind), and the stream always
//! ends with exactly one `Eof` token.
//!
//! # Architecture
//!
//! ```text
//! SourceBuffer → RawScanner (leo_lexer_core) → cook → Tokenizer → Token
//! ```
//!
//! Literal values are not stored on tokens. [`int_value`] and
//! [`string_value`] decode a validated lexeme on demand.

mod cooker;
mod escape;
mod keywords;
mod numbers;
mod tokenizer;

pub use leo_lexer_core::SourceBuffer;
pub use tokenizer::Tokenizer;

use leo_ir::Token;

/// Collect every token of `source`, ending with `Eof`.
pub fn tokenize(source: &SourceBuffer) -> Vec<Token> {
    Tokenizer::new(source).collect()
}

/// Value of a valid integer literal lexeme (`42`, `0xFF`, `0b1_0`).
///
/// `None` for lexemes the tokenizer would have flagged.
pub fn int_value(lexeme: &[u8]) -> Option<u64> {
    let (digits, radix) = numbers::split_radix(lexeme);
    if digits.is_empty() {
        return None;
    }
    numbers::parse_int_skip_underscores(digits, radix)
}

/// Decoded contents of a valid string literal lexeme, quotes included.
///
/// `None` for lexemes the tokenizer would have flagged.
pub fn string_value(lexeme: &[u8]) -> Option<String> {
    match lexeme {
        [b'"', content @ .., b'"'] => escape::unescape(content).ok(),
        _ => None,
    }
}
