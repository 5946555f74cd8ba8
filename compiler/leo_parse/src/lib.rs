//! Recursive descent parser for Leo.
//!
//! Statements are parsed by recursive descent, expressions by precedence
//! climbing over the binding powers in [`leo_ir::Precedence`]. The parser
//! pulls tokens through a [`TokenBuffer`] with bounded lookahead and builds
//! an owned [`Program`].
//!
//! The first unexpected token is reported as a [`SyntaxError`]. In
//! [`RecoveryMode::Synchronize`] the failed statement is dropped, the
//! parser skips to the next statement boundary and keeps going; no node is
//! ever invented for skipped input.

mod error;
mod grammar;
mod recovery;
mod token_buffer;

pub use error::{ErrorCode, Expected, SyntaxError, SyntaxErrorKind};
pub use recovery::{synchronize, RecoveryMode, TokenSet, STMT_BOUNDARY, STMT_START};
pub use token_buffer::{TokenBuffer, DEFAULT_LOOKAHEAD};

use leo_ir::{Ident, Program, Span, Token, TokenKind};
use leo_lexer::SourceBuffer;

/// Parse one input unit, stopping at the first error.
pub fn parse(source: &[u8]) -> Result<Program, SyntaxError> {
    let buffer = SourceBuffer::new(source);
    Parser::new(TokenBuffer::from_source(&buffer)).parse_program()
}

/// Parse one input unit, collecting every error and the statements that
/// parsed cleanly.
pub fn parse_recovering(source: &[u8]) -> ParseOutput {
    let buffer = SourceBuffer::new(source);
    Parser::with_recovery(TokenBuffer::from_source(&buffer), RecoveryMode::Synchronize)
        .parse_output()
}

/// Program plus the errors met while parsing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseOutput {
    /// Statements that parsed without error, in source order.
    pub program: Program,
    pub errors: Vec<SyntaxError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The program, or the first error.
    pub fn into_result(self) -> Result<Program, SyntaxError> {
        let ParseOutput { program, errors } = self;
        match errors.into_iter().next() {
            Some(first) => Err(first),
            None => Ok(program),
        }
    }
}

/// Parser state for one input unit.
pub struct Parser<'src> {
    tokens: TokenBuffer<'src>,
    recovery: RecoveryMode,
    errors: Vec<SyntaxError>,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: TokenBuffer<'src>) -> Self {
        Self::with_recovery(tokens, RecoveryMode::Bail)
    }

    pub fn with_recovery(tokens: TokenBuffer<'src>, recovery: RecoveryMode) -> Self {
        Parser {
            tokens,
            recovery,
            errors: Vec::new(),
        }
    }

    /// Parse the whole unit; the first error wins.
    pub fn parse_program(self) -> Result<Program, SyntaxError> {
        self.parse_output().into_result()
    }

    /// Parse the whole unit, returning the program and all errors.
    pub fn parse_output(mut self) -> ParseOutput {
        tracing::debug!(
            bytes = self.tokens.source().len(),
            recovery = ?self.recovery,
            remaining_stack = ?leo_stack::remaining_stack(),
            "parse start"
        );
        let stmts = match self.statement_list(false) {
            Ok(stmts) => stmts,
            Err(error) => {
                self.errors.push(error);
                Vec::new()
            }
        };
        let program = Program {
            stmts,
            span: Span::new(0, self.tokens.source().len()),
        };
        tracing::debug!(
            stmts = program.stmts.len(),
            errors = self.errors.len(),
            "parse done"
        );
        ParseOutput {
            program,
            errors: self.errors,
        }
    }

    // ─── Token helpers ─────────────────────────────────────────────

    /// Error for the current token, which cannot continue the production.
    ///
    /// Invalid tokens report their lexical flaw; `Eof` reports exhausted
    /// input.
    fn unexpected(&mut self, expected: Option<Expected>) -> SyntaxError {
        let token = self.tokens.current();
        let kind = match token.kind {
            TokenKind::Eof => SyntaxErrorKind::UnexpectedEof { expected },
            TokenKind::Invalid => SyntaxErrorKind::InvalidToken {
                lexeme: error::snippet(&self.tokens.lexeme_str(&token)),
                flaw: token
                    .flaw
                    .unwrap_or(leo_ir::LexErrorKind::UnknownCharacter),
            },
            _ => SyntaxErrorKind::UnexpectedToken {
                found: error::snippet(&self.tokens.lexeme_str(&token)),
                expected,
            },
        };
        SyntaxError::new(kind, token.span, token.position)
    }

    /// Consume a token of kind `kind` or fail.
    fn expect(&mut self, kind: TokenKind) -> Result<Token, SyntaxError> {
        if self.tokens.check(kind) {
            Ok(self.tokens.advance())
        } else {
            Err(self.unexpected(Some(Expected::Token(kind))))
        }
    }

    fn expect_ident(&mut self) -> Result<Ident, SyntaxError> {
        let token = self.expect(TokenKind::Ident)?;
        Ok(Ident::new(self.tokens.lexeme_str(&token), token.span))
    }

    /// Span from `start` through the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        match self.tokens.previous() {
            Some(last) => start.merge(last.span),
            None => start,
        }
    }
}
