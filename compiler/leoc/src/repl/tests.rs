#![allow(clippy::unwrap_used)]

use std::io::Cursor;

use pretty_assertions::assert_eq;

use super::*;

struct Session {
    exit: ReplExit,
    output: String,
    errors: String,
}

fn session_with(input: &str, config: ReplConfig) -> Session {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let exit = Repl::with_config(Cursor::new(input), &mut output, &mut errors, config)
        .run()
        .unwrap();
    Session {
        exit,
        output: String::from_utf8(output).unwrap(),
        errors: String::from_utf8(errors).unwrap(),
    }
}

fn session(input: &str) -> Session {
    session_with(input, ReplConfig::default())
}

#[test]
fn end_of_input_stops() {
    let s = session("");
    assert_eq!(s.exit, ReplExit::EndOfInput);
    assert_eq!(s.output, "> ");
    assert_eq!(s.errors, "");
}

#[test]
fn exit_directive_stops_before_later_lines() {
    let s = session("1 + 2 * 3\nexit\n4\n");
    assert_eq!(s.exit, ReplExit::Directive);
    assert_eq!(s.output, "> 1 + 2 * 3;\n> ");
}

#[test]
fn exit_directive_is_a_substring_match() {
    let s = session("let exit_code = 1\n2\n");
    assert_eq!(s.exit, ReplExit::Directive);
    assert_eq!(s.output, "> ");
}

#[test]
fn blank_lines_parse_to_nothing() {
    let s = session("\n   \n// note\n");
    assert_eq!(s.output, "> > > > ");
    assert_eq!(s.errors, "");
}

#[test]
fn error_is_reported_and_loop_continues() {
    let s = session("1 $ 2\n3\n");
    assert_eq!(s.exit, ReplExit::EndOfInput);
    assert_eq!(s.output, "> > 3;\n> ");
    assert!(s.errors.contains("invalid token '$': unknown character"), "{}", s.errors);
}

#[test]
fn incomplete_input_continues() {
    let s = session("if (x\n) y;\n");
    assert_eq!(s.output, "> ... if (x) y;\n> ");
    assert_eq!(s.errors, "");
}

#[test]
fn unterminated_block_comment_continues() {
    let s = session("/* a\n b */ 1\n");
    assert_eq!(s.output, "> ... 1;\n> ");
}

#[test]
fn unterminated_string_is_an_error() {
    let s = session("\"abc\nx\n");
    assert_eq!(s.output, "> > x;\n> ");
    assert!(s.errors.contains("unterminated string"), "{}", s.errors);
}

#[test]
fn directive_ends_session_while_continuing() {
    let s = session("f(\nexit\n1\n");
    assert_eq!(s.exit, ReplExit::Directive);
    assert_eq!(s.output, "> ... ");
    assert!(!s.output.contains("1;"));
    assert!(s.errors.contains("unexpected end of input"), "{}", s.errors);
}

#[test]
fn blank_line_abandons_pending_input() {
    let s = session("fn f(\n\n1\n");
    assert_eq!(s.output, "> ... > 1;\n> ");
    assert!(s.errors.contains("unexpected end of input"), "{}", s.errors);
}

#[test]
fn end_of_input_reports_pending_input() {
    let s = session("while (true) {\n");
    assert_eq!(s.exit, ReplExit::EndOfInput);
    assert_eq!(s.output, "> ... ");
    assert!(s.errors.contains("unexpected end of input"), "{}", s.errors);
}

#[test]
fn multi_line_function() {
    let s = session("fn add(a, b) {\nreturn a + b\n}\n");
    assert_eq!(s.output, "> ... ... fn add(a, b) {\n    return a + b;\n}\n> ");
}

#[test]
fn debug_echo() {
    let config = ReplConfig {
        echo: EchoMode::Debug,
        ..ReplConfig::default()
    };
    let s = session_with("x\n", config);
    assert!(s.output.contains("Ident(\n"), "{}", s.output);
    assert!(s.output.contains("\"x\""), "{}", s.output);
}

#[test]
fn quiet_echo_still_reports_errors() {
    let config = ReplConfig {
        echo: EchoMode::None,
        ..ReplConfig::default()
    };
    let s = session_with("x\n+\n", config);
    assert_eq!(s.output, "> > > ");
    assert!(s.errors.contains("E1001"), "{}", s.errors);
}

#[test]
fn custom_prompts_and_directive() {
    let config = ReplConfig {
        prompt: "leo> ".to_string(),
        continuation_prompt: "   | ".to_string(),
        exit_directive: "quit".to_string(),
        ..ReplConfig::default()
    };
    let s = session_with("[1,\n2]\nexit\nquit\n", config);
    assert_eq!(s.exit, ReplExit::Directive);
    assert_eq!(s.output, "leo>    | [1, 2];\nleo> exit;\nleo> ");
}

#[test]
fn recovering_mode_reports_every_error() {
    let config = ReplConfig {
        recovery: RecoveryMode::Synchronize,
        ..ReplConfig::default()
    };
    let s = session_with("let = 1; let 2 = 3;\n", config);
    assert_eq!(s.errors.matches("[E1001]").count(), 2, "{}", s.errors);
}

#[test]
fn bail_mode_reports_first_error_only() {
    let s = session("let = 1; let 2 = 3;\n");
    assert_eq!(s.errors.matches("[E1001]").count(), 1, "{}", s.errors);
}

#[test]
fn non_utf8_input_is_accepted() {
    let mut output = Vec::new();
    let mut errors = Vec::new();
    let input: &[u8] = b"\"caf\xe9\"\n";
    Repl::new(input, &mut output, &mut errors).run().unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "> \"caf\u{fffd}\";\n> ");
}

struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn output_failure_is_returned() {
    let error = Repl::new(Cursor::new("1\n"), ClosedPipe, Vec::new())
        .run()
        .unwrap_err();
    let ReplError::Io(io) = error;
    assert_eq!(io.kind(), io::ErrorKind::BrokenPipe);
}
