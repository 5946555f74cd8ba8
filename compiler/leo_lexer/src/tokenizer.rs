//! Lazy token stream over a source buffer.

use leo_ir::{Position, Span, Token, TokenKind};
use leo_lexer_core::{RawScanner, RawTag, SourceBuffer};

use crate::cooker;

/// Iterator of [`Token`]s, ending with one `Eof` token.
///
/// Tokens are produced on demand: nothing past the last `next()` call has
/// been scanned. After `Eof` the iterator is exhausted; it cannot be
/// restarted.
pub struct Tokenizer<'src> {
    source: &'src SourceBuffer,
    scanner: RawScanner<'src>,
    /// Line/column of the scanner's current offset.
    position: Position,
    finished: bool,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src SourceBuffer) -> Self {
        Tokenizer {
            source,
            scanner: RawScanner::new(source.cursor()),
            position: Position::START,
            finished: false,
        }
    }

    pub fn source(&self) -> &'src SourceBuffer {
        self.source
    }

    /// Source bytes of `token`.
    pub fn lexeme(&self, token: &Token) -> &'src [u8] {
        self.source.slice(token.span.start, token.span.end)
    }

    fn next_token(&mut self) -> Token {
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let end = start + raw.len;
            let lexeme = self.source.slice(start, end);
            let position = self.position;
            self.position = position.advance(lexeme);

            if raw.tag.is_trivia() {
                continue;
            }

            let span = Span::new(start, end);
            if raw.tag == RawTag::Eof {
                return Token::new(TokenKind::Eof, span, position);
            }
            return match cooker::cook(raw.tag, lexeme) {
                Ok(kind) => Token::new(kind, span, position),
                Err(flaw) => Token::invalid(flaw, span, position),
            };
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

impl std::iter::FusedIterator for Tokenizer<'_> {}
