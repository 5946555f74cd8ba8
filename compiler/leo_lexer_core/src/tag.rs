//! Raw token tags produced by the scanner.
//!
//! `RawTag` is a dense `#[repr(u8)]` enum grouped into semantic ranges so a
//! tag can be classified with a single comparison. Literal tags only record
//! the literal's shape; values and escape validity are checked later.

/// Kind of a raw token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // ─── Identifiers & Literals: 0-15 ───
    Ident = 0,
    Int = 1,
    HexInt = 2,
    BinInt = 3,
    String = 4,

    // ─── Operators: 32-63 ───
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Percent = 36,
    StarStar = 37,
    Equal = 38,
    PlusEqual = 39,
    MinusEqual = 40,
    StarEqual = 41,
    SlashEqual = 42,
    PercentEqual = 43,
    EqualEqual = 44,
    NotEqual = 45,
    Less = 46,
    LessEqual = 47,
    Greater = 48,
    GreaterEqual = 49,
    Bang = 50,
    AmpersandAmpersand = 51,
    PipePipe = 52,
    Dot = 53,

    // ─── Delimiters: 80-95 ───
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Comma = 86,
    Semicolon = 87,
    Colon = 88,

    // ─── Trivia: 112-127 ───
    Whitespace = 112,
    Newline = 113,
    LineComment = 114,
    BlockComment = 115,

    // ─── Errors: 240-254 ───
    /// A byte (or UTF-8 sequence) that starts no token.
    InvalidByte = 240,
    /// String literal cut off by a line break or EOF.
    UnterminatedString = 241,
    /// `/*` with no closing `*/`.
    UnterminatedBlockComment = 242,
    /// Digits run into letters, or a radix prefix without digits.
    MalformedNumber = 243,

    // ─── Control ───
    Eof = 255,
}

impl RawTag {
    /// Fixed source text of operator and delimiter tags.
    pub const fn lexeme(self) -> Option<&'static str> {
        Some(match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::StarStar => "**",
            Self::Equal => "=",
            Self::PlusEqual => "+=",
            Self::MinusEqual => "-=",
            Self::StarEqual => "*=",
            Self::SlashEqual => "/=",
            Self::PercentEqual => "%=",
            Self::EqualEqual => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::Bang => "!",
            Self::AmpersandAmpersand => "&&",
            Self::PipePipe => "||",
            Self::Dot => ".",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            _ => return None,
        })
    }

    /// Human-readable name for debugging output.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer",
            Self::HexInt => "hex integer",
            Self::BinInt => "binary integer",
            Self::String => "string",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::InvalidByte => "invalid byte",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::MalformedNumber => "malformed number",
            Self::Eof => "end of input",
            other => match other.lexeme() {
                Some(text) => text,
                None => "?",
            },
        }
    }

    /// Whitespace, newlines and comments.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::Newline | Self::LineComment | Self::BlockComment
        )
    }

    #[inline]
    pub const fn is_error(self) -> bool {
        (self as u8) >= 240 && (self as u8) < 255
    }
}

/// One scanned token: its tag and byte length.
///
/// The start offset is implicit (sum of preceding lengths). Only `Eof` has
/// length zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() == 8);
