#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;

use super::*;

fn run_lex(source: &str) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = lex(source.as_bytes(), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn lex_lists_tokens_with_positions() {
    let (outcome, text) = run_lex("let x = \"hi\";\n  x += 0x1F");
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        text,
        "\
1:1 Let Keyword 'let'
1:5 Ident Identifier 'x'
1:7 Eq Operator '='
1:9 Str StringLiteral '\"hi\"'
1:13 Semicolon Punctuation ';'
2:3 Ident Identifier 'x'
2:5 PlusEq Operator '+='
2:8 Int IntLiteral '0x1F'
2:12 Eof EndOfInput ''
"
    );
}

#[test]
fn lex_marks_invalid_tokens() {
    let (outcome, text) = run_lex("1 $");
    assert_eq!(outcome, Outcome::SyntaxErrors);
    assert!(text.contains("1:3 Invalid Invalid '$' (unknown character)"), "{text}");
}

#[test]
fn parse_prints_tree() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = parse("t", b"1 + 2", &mut out, &mut err, RenderOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::Success);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Binary {"), "{text}");
    assert!(text.contains("op: Add"), "{text}");
    assert!(err.is_empty());
}

#[test]
fn parse_reports_errors() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = parse("t", b"if (x", &mut out, &mut err, RenderOptions::default()).unwrap();
    assert_eq!(outcome, Outcome::SyntaxErrors);
    assert!(out.is_empty());
    let text = String::from_utf8(err).unwrap();
    assert!(text.contains("E1002"), "{text}");
}

#[test]
fn fmt_normalizes_layout() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let outcome = fmt(
        "t",
        b"fn f(a){return (a)*2}",
        &mut out,
        &mut err,
        RenderOptions::default(),
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "fn f(a) {\n    return a * 2;\n}\n"
    );
}

#[test]
fn read_missing_file() {
    let error = read_source(Path::new("/definitely/not/here.leo")).unwrap_err();
    assert!(matches!(error, CommandError::Read { .. }));
    assert!(error.to_string().starts_with("cannot read /definitely/not/here.leo"));
}

#[test]
fn source_length_limit() {
    let path = Path::new("big.leo");
    assert!(check_source_len(path, SourceBuffer::MAX_LEN as u64).is_ok());
    let error = check_source_len(path, SourceBuffer::MAX_LEN as u64 + 1).unwrap_err();
    assert!(matches!(error, CommandError::TooLarge { len, .. } if len == SourceBuffer::MAX_LEN as u64 + 1));
    assert!(error.to_string().starts_with("big.leo is "), "{error}");
}

#[test]
fn read_small_file() {
    let path = std::env::temp_dir().join(format!("leoc-read-{}.leo", std::process::id()));
    fs::write(&path, b"let x = 1;").unwrap();
    let bytes = read_source(&path);
    fs::remove_file(&path).unwrap();
    assert_eq!(bytes.unwrap(), b"let x = 1;");
}
