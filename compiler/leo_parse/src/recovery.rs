//! Error recovery.
//!
//! After a failed statement the parser can skip ahead to a statement
//! boundary and keep going, so one input unit reports more than one error.
//! Skipped tokens never produce AST nodes.

use leo_ir::TokenKind;

use crate::token_buffer::TokenBuffer;

/// How the parser reacts to a failed statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum RecoveryMode {
    /// Stop at the first error.
    #[default]
    Bail,
    /// Record the error, skip to the next statement boundary, continue.
    Synchronize,
}

/// A set of token kinds as a bitset, one bit per `TokenKind` index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

const _: () = assert!(TokenKind::COUNT <= 64, "TokenSet needs one bit per kind");

impl TokenSet {
    pub const fn new() -> Self {
        Self(0)
    }

    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.index())) != 0
    }
}

/// Keywords that can only begin a statement.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::Let)
    .with(TokenKind::Const)
    .with(TokenKind::Fn)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::For)
    .with(TokenKind::Return)
    .with(TokenKind::Break)
    .with(TokenKind::Continue);

/// Tokens that synchronization stops in front of.
pub const STMT_BOUNDARY: TokenSet = STMT_START
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Skip to the next statement boundary.
///
/// Consumes tokens through the next `;`, or stops in front of a token in
/// [`STMT_BOUNDARY`]. `start` is the buffer's `consumed()` count when the
/// failed statement began: if nothing has been consumed since then, one
/// token is skipped regardless, so a statement that fails on its first
/// token cannot stall the parser.
pub fn synchronize(tokens: &mut TokenBuffer<'_>, start: usize) {
    loop {
        let kind = tokens.current_kind();
        if kind == TokenKind::Semicolon {
            tokens.advance();
            break;
        }
        if STMT_BOUNDARY.contains(kind) {
            if tokens.consumed() == start {
                tokens.advance();
            }
            break;
        }
        tokens.advance();
    }
    tracing::debug!(
        dropped = tokens.consumed() - start,
        at = ?tokens.current_kind(),
        "synchronized"
    );
}
