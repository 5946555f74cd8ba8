//! Bounded lookahead over a lazy token stream.
//!
//! The parser never sees the [`Tokenizer`] directly. `TokenBuffer` pulls
//! tokens into a small ring as the parser peeks, so at most `lookahead`
//! tokens exist ahead of the cursor at any time and each token is pulled
//! from the tokenizer exactly once.

use std::borrow::Cow;
use std::collections::VecDeque;

use leo_ir::{Position, Span, Token, TokenKind};
use leo_lexer::{SourceBuffer, Tokenizer};

/// Default lookahead window. The grammar itself only inspects the current
/// token.
pub const DEFAULT_LOOKAHEAD: usize = 3;

/// Cursor over a token stream with a fixed lookahead window.
///
/// Once the stream reaches `Eof`, peeking or advancing further keeps
/// returning that same `Eof` token.
pub struct TokenBuffer<'src> {
    tokens: Tokenizer<'src>,
    window: VecDeque<Token>,
    lookahead: usize,
    /// The stream's `Eof` token, replayed once the tokenizer is exhausted.
    eof: Token,
    previous: Option<Token>,
    consumed: usize,
}

impl<'src> TokenBuffer<'src> {
    pub fn new(tokens: Tokenizer<'src>) -> Self {
        Self::with_lookahead(tokens, DEFAULT_LOOKAHEAD)
    }

    /// Buffer allowing `peek(offset)` for `offset < lookahead`.
    ///
    /// A zero lookahead is raised to one: the current token always exists.
    pub fn with_lookahead(tokens: Tokenizer<'src>, lookahead: usize) -> Self {
        let lookahead = lookahead.max(1);
        let end = tokens.source().len();
        TokenBuffer {
            tokens,
            window: VecDeque::with_capacity(lookahead),
            lookahead,
            eof: Token::new(TokenKind::Eof, Span::point(end), Position::START),
            previous: None,
            consumed: 0,
        }
    }

    /// Buffer over a fresh tokenizer for `source`.
    pub fn from_source(source: &'src SourceBuffer) -> Self {
        Self::new(Tokenizer::new(source))
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.tokens.source()
    }

    pub fn lookahead(&self) -> usize {
        self.lookahead
    }

    fn fill(&mut self, count: usize) {
        while self.window.len() < count {
            let token = match self.tokens.next() {
                Some(token) => {
                    if token.is_eof() {
                        self.eof = token;
                    }
                    token
                }
                None => self.eof,
            };
            self.window.push_back(token);
        }
    }

    /// Token `offset` positions ahead; `0` is the current token.
    #[inline]
    pub fn peek(&mut self, offset: usize) -> Token {
        debug_assert!(
            offset < self.lookahead,
            "peek({offset}) beyond lookahead window of {}",
            self.lookahead
        );
        self.fill(offset + 1);
        self.window[offset]
    }

    #[inline]
    pub fn current(&mut self) -> Token {
        self.peek(0)
    }

    #[inline]
    pub fn current_kind(&mut self) -> TokenKind {
        self.peek(0).kind
    }

    #[inline]
    pub fn check(&mut self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    #[inline]
    pub fn is_at_end(&mut self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consume and return the current token. At `Eof` nothing is consumed.
    pub fn advance(&mut self) -> Token {
        self.fill(1);
        let token = self.window[0];
        if token.is_eof() {
            return token;
        }
        self.window.pop_front();
        self.previous = Some(token);
        self.consumed += 1;
        tracing::trace!(kind = ?token.kind, span = %token.span, "advance");
        token
    }

    /// Consume the current token if it has kind `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// The most recently consumed token.
    pub fn previous(&self) -> Option<Token> {
        self.previous
    }

    /// Number of tokens consumed so far. Never decreases.
    pub fn consumed(&self) -> usize {
        self.consumed
    }

    /// Source bytes of `token`.
    pub fn lexeme(&self, token: &Token) -> &'src [u8] {
        self.tokens.lexeme(token)
    }

    /// Source text of `token`, with invalid UTF-8 replaced.
    pub fn lexeme_str(&self, token: &Token) -> Cow<'src, str> {
        String::from_utf8_lossy(self.lexeme(token))
    }
}

#[cfg(test)]
mod tests;
