//! Raw scanner for Leo source.
//!
//! Splits arbitrary bytes into `(RawTag, len)` pairs without allocating,
//! resolving keywords or validating literal contents. Every input byte is
//! covered by exactly one raw token, trivia included, so the token lengths
//! always sum to the input length.
//!
//! ```text
//! bytes → SourceBuffer → Cursor → RawScanner → (RawTag, len)*  Eof
//! ```
//!
//! The cooking layer (`leo_lexer`) turns raw tokens into parser tokens.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::RawScanner;
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
