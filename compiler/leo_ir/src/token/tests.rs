use super::*;

#[test]
fn indices_are_dense_and_round_trip() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(usize::from(kind.index()), i, "{kind:?} out of order");
        assert_eq!(TokenKind::from_index(kind.index()), Some(*kind));
    }
    assert_eq!(TokenKind::from_index(TokenKind::COUNT as u8), None);
}

#[test]
fn token_set_fits_in_u64() {
    assert!(TokenKind::COUNT <= 64);
}

#[test]
fn classes() {
    assert_eq!(TokenKind::Ident.class(), TokenClass::Identifier);
    assert_eq!(TokenKind::Int.class(), TokenClass::IntLiteral);
    assert_eq!(TokenKind::Str.class(), TokenClass::StringLiteral);
    assert_eq!(TokenKind::While.class(), TokenClass::Keyword);
    assert_eq!(TokenKind::StarStar.class(), TokenClass::Operator);
    assert_eq!(TokenKind::Semicolon.class(), TokenClass::Punctuation);
    assert_eq!(TokenKind::Eof.class(), TokenClass::EndOfInput);
    assert_eq!(TokenKind::Invalid.class(), TokenClass::Invalid);
}

#[test]
fn fixed_lexemes_are_unique() {
    let mut seen = std::collections::HashSet::new();
    for kind in TokenKind::ALL {
        if let Some(text) = kind.fixed_lexeme() {
            assert!(seen.insert(text), "duplicate lexeme {text:?}");
        }
    }
}

#[test]
fn display_quotes_fixed_lexemes() {
    assert_eq!(TokenKind::RParen.to_string(), "')'");
    assert_eq!(TokenKind::Ident.to_string(), "identifier");
    assert_eq!(TokenKind::Eof.to_string(), "end of input");
}

#[test]
fn invalid_token_carries_flaw() {
    let tok = Token::invalid(
        LexErrorKind::UnknownCharacter,
        Span::new(2, 3),
        Position::new(1, 3),
    );
    assert_eq!(tok.kind, TokenKind::Invalid);
    assert_eq!(tok.flaw, Some(LexErrorKind::UnknownCharacter));
    assert!(!tok.is_eof());
}

#[test]
fn lex_error_messages() {
    assert_eq!(
        LexErrorKind::UnterminatedString.to_string(),
        "unterminated string literal"
    );
    assert_eq!(LexErrorKind::UnknownCharacter.to_string(), "unknown character");
}
