//! Output emitters.
//!
//! The printer writes through an [`Emitter`], so the same walk can build a
//! `String` or stream to any [`io::Write`].

use std::io::{self, Write};

use crate::INDENT_WIDTH;

/// Sink for formatted output.
pub trait Emitter {
    fn emit(&mut self, text: &str);

    /// Emit a Unix newline.
    fn emit_newline(&mut self) {
        self.emit("\n");
    }

    /// Emit indentation for `level`.
    fn emit_indent(&mut self, level: usize) {
        for _ in 0..level {
            self.emit("    ");
        }
    }

    fn emit_space(&mut self) {
        self.emit(" ");
    }
}

/// In-memory emitter.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output(self) -> String {
        self.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        self.buffer
            .extend(std::iter::repeat(' ').take(level * INDENT_WIDTH));
    }
}

/// Emitter streaming to a writer.
///
/// Write errors cannot surface mid-walk; the first one is kept and
/// returned by [`finish`](Self::finish). Later output is dropped.
pub struct WriteEmitter<W: Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> WriteEmitter<W> {
    pub fn new(writer: W) -> Self {
        WriteEmitter {
            writer,
            error: None,
        }
    }

    /// Flush and hand back the writer, or the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> Emitter for WriteEmitter<W> {
    fn emit(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_all(text.as_bytes()) {
            self.error = Some(error);
        }
    }
}
