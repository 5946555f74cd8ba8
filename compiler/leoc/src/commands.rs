//! Developer commands: `lex`, `parse`, `fmt` and `root`.
//!
//! Each command writes to the given streams and reports failure through
//! its return value; only `main` turns that into an exit status.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use leo_lexer::{SourceBuffer, Tokenizer};
use leo_parse::parse_recovering;

use crate::project::{project_dir, ProjectPathError};
use crate::reporting::{render_errors, RenderOptions};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{} is {len} bytes; at most {} are supported", .path.display(), SourceBuffer::MAX_LEN)]
    TooLarge { path: PathBuf, len: u64 },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Project(#[from] ProjectPathError),
}

/// Command outcome when no environmental error occurred.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Success,
    /// The input had syntax errors; they were written to the error stream.
    SyntaxErrors,
}

/// Read a whole source file, refusing files too long to tokenize.
pub fn read_source(path: &Path) -> Result<Vec<u8>, CommandError> {
    let read_error = |source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    };
    let len = fs::metadata(path).map_err(read_error)?.len();
    check_source_len(path, len)?;
    let bytes = fs::read(path).map_err(read_error)?;
    // The file may have grown since the metadata call.
    check_source_len(path, bytes.len() as u64)?;
    Ok(bytes)
}

fn check_source_len(path: &Path, len: u64) -> Result<(), CommandError> {
    if len > SourceBuffer::MAX_LEN as u64 {
        return Err(CommandError::TooLarge {
            path: path.to_path_buf(),
            len,
        });
    }
    Ok(())
}

/// One line per token, `line:col kind class 'lexeme'`, ending with `Eof`.
pub fn lex<W: Write>(source: &[u8], out: &mut W) -> Result<Outcome, CommandError> {
    let buffer = SourceBuffer::new(source);
    let tokenizer = Tokenizer::new(&buffer);
    let mut outcome = Outcome::Success;
    for token in tokenizer {
        let lexeme = String::from_utf8_lossy(&source[token.span.to_range()]);
        write!(
            out,
            "{}:{} {:?} {:?} '{}'",
            token.position.line,
            token.position.column,
            token.kind,
            token.kind.class(),
            lexeme,
        )?;
        if let Some(flaw) = token.flaw {
            outcome = Outcome::SyntaxErrors;
            write!(out, " ({flaw})")?;
        }
        writeln!(out)?;
    }
    Ok(outcome)
}

/// Print the `Debug` tree, or render every syntax error.
pub fn parse<W: Write, E: Write>(
    name: &str,
    source: &[u8],
    out: &mut W,
    err: &mut E,
    options: RenderOptions,
) -> Result<Outcome, CommandError> {
    let output = parse_recovering(source);
    if output.has_errors() {
        render_errors(err, name, source, &output.errors, options)?;
        return Ok(Outcome::SyntaxErrors);
    }
    writeln!(out, "{:#?}", output.program)?;
    Ok(Outcome::Success)
}

/// Print the program in canonical layout.
///
/// Nothing is printed for a file with syntax errors.
pub fn fmt<W: Write, E: Write>(
    name: &str,
    source: &[u8],
    out: &mut W,
    err: &mut E,
    options: RenderOptions,
) -> Result<Outcome, CommandError> {
    let output = parse_recovering(source);
    if output.has_errors() {
        render_errors(err, name, source, &output.errors, options)?;
        return Ok(Outcome::SyntaxErrors);
    }
    out.write_all(leo_fmt::format_program(&output.program).as_bytes())?;
    Ok(Outcome::Success)
}

/// Print the project root of the working directory.
pub fn root<W: Write>(marker: &str, out: &mut W) -> Result<Outcome, CommandError> {
    let root = project_dir(marker)?;
    writeln!(out, "{}", root.display())?;
    Ok(Outcome::Success)
}

#[cfg(test)]
mod tests;
