//! Syntax errors.
//!
//! Every failure the parser reports is a [`SyntaxError`]: what went wrong
//! ([`SyntaxErrorKind`]), where (byte span plus line/column) and a stable
//! [`ErrorCode`] for rendering. Lexical problems surface here too, as
//! [`SyntaxErrorKind::InvalidToken`], the moment the parser reaches the
//! invalid token.

use std::fmt;

use leo_ir::{LexErrorKind, Position, Span, TokenKind};

/// Stable identifier for a diagnostic.
///
/// Format: E#### where the first digit is the phase:
/// - E0xxx: lexical errors
/// - E1xxx: syntax errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal
    E0001,
    /// Unknown character
    E0002,
    /// Malformed number literal
    E0003,
    /// Integer literal out of range
    E0004,
    /// Invalid escape sequence
    E0005,
    /// Unterminated block comment
    E0006,

    /// Unexpected token
    E1001,
    /// Unexpected end of input
    E1002,
    /// Invalid assignment target
    E1003,
    /// Literal could not be decoded
    E1004,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E0006 => "E0006",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
        }
    }

    fn for_lex_error(flaw: LexErrorKind) -> Self {
        match flaw {
            LexErrorKind::UnterminatedString => ErrorCode::E0001,
            LexErrorKind::UnknownCharacter => ErrorCode::E0002,
            LexErrorKind::MalformedNumber => ErrorCode::E0003,
            LexErrorKind::IntegerOverflow => ErrorCode::E0004,
            LexErrorKind::InvalidEscape => ErrorCode::E0005,
            LexErrorKind::UnterminatedComment => ErrorCode::E0006,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the parser was looking for when it failed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Expected {
    /// One specific token, e.g. `')'` or an identifier.
    Token(TokenKind),
    Expression,
    Statement,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Token(kind) => write!(f, "{kind}"),
            Expected::Expression => f.write_str("expression"),
            Expected::Statement => f.write_str("statement"),
        }
    }
}

/// Kind of syntax error.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SyntaxErrorKind {
    /// A valid token that cannot continue the current production.
    UnexpectedToken {
        found: String,
        expected: Option<Expected>,
    },
    /// Input ended in the middle of a production.
    UnexpectedEof { expected: Option<Expected> },
    /// The tokenizer flagged this token.
    InvalidToken { lexeme: String, flaw: LexErrorKind },
    /// Left side of `=` (or a compound assignment) is not a variable, index
    /// or field.
    InvalidAssignmentTarget,
    /// A literal token whose value could not be decoded.
    InvalidLiteral { lexeme: String },
}

impl SyntaxErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            SyntaxErrorKind::UnexpectedEof { .. } => ErrorCode::E1002,
            SyntaxErrorKind::InvalidToken { flaw, .. } => ErrorCode::for_lex_error(*flaw),
            SyntaxErrorKind::InvalidAssignmentTarget => ErrorCode::E1003,
            SyntaxErrorKind::InvalidLiteral { .. } => ErrorCode::E1004,
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyntaxErrorKind::UnexpectedToken { found, expected } => {
                write!(f, "unexpected token '{found}'")?;
                if let Some(expected) = expected {
                    write!(f, ", expected {expected}")?;
                }
                Ok(())
            }
            SyntaxErrorKind::UnexpectedEof { expected } => {
                f.write_str("unexpected end of input")?;
                if let Some(expected) = expected {
                    write!(f, ", expected {expected}")?;
                }
                Ok(())
            }
            SyntaxErrorKind::InvalidToken { lexeme, flaw } => {
                write!(f, "invalid token '{lexeme}': {flaw}")
            }
            SyntaxErrorKind::InvalidAssignmentTarget => f.write_str("invalid assignment target"),
            SyntaxErrorKind::InvalidLiteral { lexeme } => write!(f, "invalid literal '{lexeme}'"),
        }
    }
}

/// A syntax error with its location.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("syntax error at line {}, column {}: {kind}", .position.line, .position.column)]
pub struct SyntaxError {
    pub kind: SyntaxErrorKind,
    /// Byte range of the offending token (empty at end of input).
    pub span: Span,
    /// Line/column of `span.start`.
    pub position: Position,
    pub code: ErrorCode,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind, span: Span, position: Position) -> Self {
        let code = kind.code();
        SyntaxError {
            kind,
            span,
            position,
            code,
        }
    }

    /// The input stopped before the construct was complete, so more input
    /// could still make it valid.
    ///
    /// Line drivers use this to switch to a continuation prompt.
    pub fn is_incomplete(&self) -> bool {
        matches!(
            self.kind,
            SyntaxErrorKind::UnexpectedEof { .. }
                | SyntaxErrorKind::InvalidToken {
                    flaw: LexErrorKind::UnterminatedComment,
                    ..
                }
        )
    }

    /// Message without the location prefix.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Longest lexeme quoted in a message.
const SNIPPET_LIMIT: usize = 24;

/// Lexeme text for a message: first line only, truncated to
/// `SNIPPET_LIMIT` characters.
pub(crate) fn snippet(lexeme: &str) -> String {
    let line = lexeme.lines().next().unwrap_or_default();
    let mut out: String = line.chars().take(SNIPPET_LIMIT).collect();
    if out.len() < lexeme.len() {
        out.push_str("...");
    }
    out
}
