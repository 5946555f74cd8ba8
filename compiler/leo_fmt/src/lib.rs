//! Leo pretty printer.
//!
//! Renders a syntax tree back to source text that parses to the same tree:
//! four-space indentation, one statement per line, `;` after simple
//! statements, and only the parentheses the operator table requires.
//!
//! # Modules
//!
//! - [`emitter`]: output abstraction for in-memory and streamed output
//! - [`printer`]: the tree walk

pub mod emitter;
pub mod printer;

pub use emitter::{Emitter, StringEmitter, WriteEmitter};
pub use printer::Printer;

use leo_ir::{Expr, Program};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Format a whole program. Every statement ends with a newline; an empty
/// program formats to the empty string.
pub fn format_program(program: &Program) -> String {
    let mut emitter = StringEmitter::new();
    Printer::new(&mut emitter).program(program);
    emitter.output()
}

/// Format a single expression, without a trailing newline.
pub fn format_expr(expr: &Expr) -> String {
    let mut emitter = StringEmitter::new();
    Printer::new(&mut emitter).expr(expr);
    emitter.output()
}

/// Escape a string value as a Leo string literal, quotes included.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\0"),
            c if c.is_control() => {
                out.push_str(&format!("\\u{{{:x}}}", u32::from(c)));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_plain_and_escaped() {
        assert_eq!(quote_string("hi"), "\"hi\"");
        assert_eq!(quote_string("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quote_string("\n\t\r\0"), r#""\n\t\r\0""#);
        assert_eq!(quote_string("\u{7}"), r#""\u{7}""#);
        assert_eq!(quote_string("it's é"), "\"it's é\"");
    }
}
