//! Terminal rendering of syntax errors.
//!
//! Errors carry byte spans; ariadne counts in characters, so spans are
//! converted against the lossily decoded source before rendering.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use leo_parse::SyntaxError;

/// Rendering options.
#[derive(Copy, Clone, Debug, Default)]
pub struct RenderOptions {
    pub color: bool,
}

/// Write one report per error, each with a labelled source snippet.
pub fn render_errors<W: Write>(
    out: &mut W,
    name: &str,
    source: &[u8],
    errors: &[SyntaxError],
    options: RenderOptions,
) -> io::Result<()> {
    let text = String::from_utf8_lossy(source);
    let cache = Source::from(text.as_ref());
    for error in errors {
        let range = char_range(source, error.span.to_range());
        let mut label = Label::new((name, range.clone())).with_message(error.message());
        if options.color {
            label = label.with_color(Color::Red);
        }
        Report::build(ReportKind::Error, name, range.start)
            .with_code(error.code)
            .with_message(error.to_string())
            .with_label(label)
            .with_config(Config::default().with_color(options.color))
            .finish()
            .write((name, cache.clone()), &mut *out)?;
    }
    Ok(())
}

/// Byte range to character range over `source`.
fn char_range(source: &[u8], bytes: Range<usize>) -> Range<usize> {
    let end = bytes.end.min(source.len());
    let start = bytes.start.min(end);
    let chars = |upto: usize| String::from_utf8_lossy(&source[..upto]).chars().count();
    chars(start)..chars(end)
}

#[cfg(test)]
mod tests;
