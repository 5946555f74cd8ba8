//! Token types for the Leo tokenizer.
//!
//! [`TokenKind`] is a fieldless, one-byte tag. Literal values are not stored
//! on the token: the parser reads them back from the lexeme, which the
//! tokenizer has already validated. This keeps [`Token`] `Copy` and small
//! enough to sit in the parser's lookahead window by value.

use std::fmt;

use crate::{Position, Span};

/// A token with its location in the source.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Line/column of `span.start`.
    pub position: Position,
    /// Why the token is invalid. `Some` exactly when `kind` is
    /// [`TokenKind::Invalid`].
    pub flaw: Option<LexErrorKind>,
}

impl Token {
    #[inline]
    pub const fn new(kind: TokenKind, span: Span, position: Position) -> Self {
        Token {
            kind,
            span,
            position,
            flaw: None,
        }
    }

    #[inline]
    pub const fn invalid(flaw: LexErrorKind, span: Span, position: Position) -> Self {
        Token {
            kind: TokenKind::Invalid,
            span,
            position,
            flaw: Some(flaw),
        }
    }

    #[inline]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {} ({})", self.kind, self.span, self.position)?;
        if let Some(flaw) = self.flaw {
            write!(f, " [{flaw}]")?;
        }
        Ok(())
    }
}

/// Coarse token category.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenClass {
    Identifier,
    IntLiteral,
    StringLiteral,
    Operator,
    Keyword,
    Punctuation,
    EndOfInput,
    Invalid,
}

/// Token kinds for Leo.
///
/// Discriminants are dense in `0..TokenKind::COUNT` so that token sets can
/// be represented as a `u64` bitset in the parser.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum TokenKind {
    // Identifiers & literals
    Ident,
    Int,
    Str,

    // Keywords
    Let,
    Const,
    Fn,
    If,
    Else,
    While,
    For,
    In,
    Return,
    Break,
    Continue,
    True,
    False,
    Nil,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Bang,
    AmpAmp,
    PipePipe,
    Dot,

    // Punctuation
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,

    // Control
    Eof,
    Invalid,
}

impl TokenKind {
    /// Number of token kinds.
    pub const COUNT: usize = TokenKind::Invalid as usize + 1;

    /// Every token kind, in discriminant order.
    pub const ALL: [TokenKind; TokenKind::COUNT] = [
        TokenKind::Ident,
        TokenKind::Int,
        TokenKind::Str,
        TokenKind::Let,
        TokenKind::Const,
        TokenKind::Fn,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::While,
        TokenKind::For,
        TokenKind::In,
        TokenKind::Return,
        TokenKind::Break,
        TokenKind::Continue,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Nil,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Percent,
        TokenKind::StarStar,
        TokenKind::Eq,
        TokenKind::PlusEq,
        TokenKind::MinusEq,
        TokenKind::StarEq,
        TokenKind::SlashEq,
        TokenKind::PercentEq,
        TokenKind::EqEq,
        TokenKind::NotEq,
        TokenKind::Lt,
        TokenKind::LtEq,
        TokenKind::Gt,
        TokenKind::GtEq,
        TokenKind::Bang,
        TokenKind::AmpAmp,
        TokenKind::PipePipe,
        TokenKind::Dot,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::Comma,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Eof,
        TokenKind::Invalid,
    ];

    /// Dense discriminant index, `0..COUNT`.
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index).
    pub fn from_index(index: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(index)).copied()
    }

    pub const fn class(self) -> TokenClass {
        match self {
            TokenKind::Ident => TokenClass::Identifier,
            TokenKind::Int => TokenClass::IntLiteral,
            TokenKind::Str => TokenClass::StringLiteral,
            TokenKind::Let
            | TokenKind::Const
            | TokenKind::Fn
            | TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::For
            | TokenKind::In
            | TokenKind::Return
            | TokenKind::Break
            | TokenKind::Continue
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Nil => TokenClass::Keyword,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::StarStar
            | TokenKind::Eq
            | TokenKind::PlusEq
            | TokenKind::MinusEq
            | TokenKind::StarEq
            | TokenKind::SlashEq
            | TokenKind::PercentEq
            | TokenKind::EqEq
            | TokenKind::NotEq
            | TokenKind::Lt
            | TokenKind::LtEq
            | TokenKind::Gt
            | TokenKind::GtEq
            | TokenKind::Bang
            | TokenKind::AmpAmp
            | TokenKind::PipePipe
            | TokenKind::Dot => TokenClass::Operator,
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::LBracket
            | TokenKind::RBracket
            | TokenKind::Comma
            | TokenKind::Semicolon
            | TokenKind::Colon => TokenClass::Punctuation,
            TokenKind::Eof => TokenClass::EndOfInput,
            TokenKind::Invalid => TokenClass::Invalid,
        }
    }

    /// Source text for kinds whose lexeme never varies.
    pub const fn fixed_lexeme(self) -> Option<&'static str> {
        let text = match self {
            TokenKind::Ident | TokenKind::Int | TokenKind::Str => return None,
            TokenKind::Eof | TokenKind::Invalid => return None,
            TokenKind::Let => "let",
            TokenKind::Const => "const",
            TokenKind::Fn => "fn",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::In => "in",
            TokenKind::Return => "return",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Nil => "nil",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::PercentEq => "%=",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Bang => "!",
            TokenKind::AmpAmp => "&&",
            TokenKind::PipePipe => "||",
            TokenKind::Dot => ".",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
        };
        Some(text)
    }

    /// Name used in "expected ..." messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Ident => "identifier",
            TokenKind::Int => "integer",
            TokenKind::Str => "string",
            TokenKind::Eof => "end of input",
            TokenKind::Invalid => "invalid token",
            other => match other.fixed_lexeme() {
                Some(text) => text,
                None => "token",
            },
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_lexeme() {
            Some(text) => write!(f, "'{text}'"),
            None => f.write_str(self.display_name()),
        }
    }
}

/// Why a run of bytes could not be turned into a valid token.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
pub enum LexErrorKind {
    /// No token starts with this character.
    #[error("unknown character")]
    UnknownCharacter,
    /// String literal reached a newline or the end of input.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Unknown escape, or a malformed `\u{...}` escape.
    #[error("invalid escape sequence in string literal")]
    InvalidEscape,
    /// Missing digits after a radix prefix, or letters glued to digits.
    #[error("malformed number literal")]
    MalformedNumber,
    /// Integer literal does not fit in 64 bits.
    #[error("integer literal is too large")]
    IntegerOverflow,
    /// `/*` without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Token, TokenKind};
    crate::static_assert_size!(TokenKind, 1);
    crate::static_assert_size!(Token, 20);
}

#[cfg(test)]
mod tests;
