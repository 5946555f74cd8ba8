use super::*;
use pretty_assertions::assert_eq;

#[test]
fn peek_does_not_consume() {
    let source = SourceBuffer::new("a + b");
    let mut buf = TokenBuffer::from_source(&source);
    assert_eq!(buf.peek(0).kind, TokenKind::Ident);
    assert_eq!(buf.peek(1).kind, TokenKind::Plus);
    assert_eq!(buf.peek(2).kind, TokenKind::Ident);
    assert_eq!(buf.current().kind, TokenKind::Ident);
    assert_eq!(buf.consumed(), 0);
}

#[test]
fn advance_returns_current_and_moves() {
    let source = SourceBuffer::new("a + b");
    let mut buf = TokenBuffer::from_source(&source);
    let first = buf.advance();
    assert_eq!(first.kind, TokenKind::Ident);
    assert_eq!(buf.lexeme(&first), b"a");
    assert_eq!(buf.current_kind(), TokenKind::Plus);
    assert_eq!(buf.previous(), Some(first));
    assert_eq!(buf.consumed(), 1);
}

#[test]
fn eof_repeats_forever() {
    let source = SourceBuffer::new("x");
    let mut buf = TokenBuffer::from_source(&source);
    buf.advance();
    for _ in 0..5 {
        assert!(buf.peek(0).is_eof());
        assert!(buf.peek(2).is_eof());
        assert!(buf.advance().is_eof());
    }
    assert_eq!(buf.consumed(), 1);
    assert_eq!(buf.current().span, Span::point(1));
}

#[test]
fn empty_source_starts_at_eof() {
    let source = SourceBuffer::new("");
    let mut buf = TokenBuffer::from_source(&source);
    assert!(buf.is_at_end());
    assert_eq!(buf.previous(), None);
}

#[test]
fn check_and_eat() {
    let source = SourceBuffer::new("( )");
    let mut buf = TokenBuffer::from_source(&source);
    assert!(buf.check(TokenKind::LParen));
    assert!(!buf.eat(TokenKind::RParen));
    assert!(buf.eat(TokenKind::LParen));
    assert!(buf.eat(TokenKind::RParen));
    assert!(buf.is_at_end());
}

#[test]
fn lookahead_of_one_still_works() {
    let source = SourceBuffer::new("let x;");
    let mut buf = TokenBuffer::with_lookahead(Tokenizer::new(&source), 1);
    let mut kinds = Vec::new();
    while !buf.is_at_end() {
        kinds.push(buf.advance().kind);
    }
    assert_eq!(
        kinds,
        vec![TokenKind::Let, TokenKind::Ident, TokenKind::Semicolon]
    );
}

#[test]
fn zero_lookahead_is_raised_to_one() {
    let source = SourceBuffer::new("x");
    let buf = TokenBuffer::with_lookahead(Tokenizer::new(&source), 0);
    assert_eq!(buf.lookahead(), 1);
}

#[test]
fn window_is_bounded_by_lookahead() {
    let source = SourceBuffer::new("a b c d e f");
    let mut buf = TokenBuffer::with_lookahead(Tokenizer::new(&source), 2);
    buf.peek(1);
    assert_eq!(buf.window.len(), 2);
    buf.advance();
    buf.peek(1);
    assert_eq!(buf.window.len(), 2);
}

#[test]
fn lexeme_str_replaces_invalid_utf8() {
    let source = SourceBuffer::new(b"\xFF");
    let mut buf = TokenBuffer::from_source(&source);
    let token = buf.current();
    assert_eq!(token.kind, TokenKind::Invalid);
    assert_eq!(buf.lexeme_str(&token), "\u{FFFD}");
}

#[test]
#[should_panic(expected = "beyond lookahead window")]
#[cfg(debug_assertions)]
fn peek_past_window_panics_in_debug() {
    let source = SourceBuffer::new("a b c d");
    let mut buf = TokenBuffer::from_source(&source);
    buf.peek(DEFAULT_LOOKAHEAD);
}
