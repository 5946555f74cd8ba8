use super::*;

#[test]
fn identifiers_and_keywords() {
    assert_eq!(cook(RawTag::Ident, b"foo"), Ok(TokenKind::Ident));
    assert_eq!(cook(RawTag::Ident, b"while"), Ok(TokenKind::While));
    assert_eq!(cook(RawTag::Ident, b"_"), Ok(TokenKind::Ident));
}

#[test]
fn integers() {
    assert_eq!(cook(RawTag::Int, b"42"), Ok(TokenKind::Int));
    assert_eq!(cook(RawTag::HexInt, b"0xFFFF_FFFF_FFFF_FFFF"), Ok(TokenKind::Int));
    assert_eq!(
        cook(RawTag::HexInt, b"0x1_0000_0000_0000_0000"),
        Err(LexErrorKind::IntegerOverflow)
    );
    assert_eq!(
        cook(RawTag::Int, b"99999999999999999999"),
        Err(LexErrorKind::IntegerOverflow)
    );
    let wide = format!("0b{}", "1".repeat(65));
    assert_eq!(
        cook(RawTag::BinInt, wide.as_bytes()),
        Err(LexErrorKind::IntegerOverflow)
    );
}

#[test]
fn strings() {
    assert_eq!(cook(RawTag::String, br#""ok\n""#), Ok(TokenKind::Str));
    assert_eq!(
        cook(RawTag::String, br#""a\qb""#),
        Err(LexErrorKind::InvalidEscape)
    );
}

#[test]
fn error_tags() {
    assert_eq!(cook(RawTag::InvalidByte, b"$"), Err(LexErrorKind::UnknownCharacter));
    assert_eq!(
        cook(RawTag::UnterminatedString, b"\"abc"),
        Err(LexErrorKind::UnterminatedString)
    );
    assert_eq!(
        cook(RawTag::UnterminatedBlockComment, b"/* x"),
        Err(LexErrorKind::UnterminatedComment)
    );
    assert_eq!(
        cook(RawTag::MalformedNumber, b"12abc"),
        Err(LexErrorKind::MalformedNumber)
    );
}

#[test]
fn string_content_strips_quotes() {
    assert_eq!(string_content(br#""abc""#), b"abc");
    assert_eq!(string_content(br#""""#), b"");
}
