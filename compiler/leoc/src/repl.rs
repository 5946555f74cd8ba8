//! Line-oriented read-parse-print loop.
//!
//! Each line is parsed on its own with a fresh parser. Input that stops
//! mid-construct (an open paren, an unterminated block comment) is kept
//! and the next line is appended to it under the continuation prompt.

use std::io::{self, BufRead, Write};

use leo_ir::Program;
use leo_parse::{parse, parse_recovering, RecoveryMode, SyntaxError};

use crate::reporting::{render_errors, RenderOptions};

/// Source name used in rendered diagnostics.
const REPL_SOURCE_NAME: &str = "<repl>";

/// What to print after a line parses.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum EchoMode {
    /// The program in canonical layout.
    #[default]
    Pretty,
    /// The `Debug` tree.
    Debug,
    None,
}

#[derive(Clone, Debug)]
pub struct ReplConfig {
    pub prompt: String,
    /// Prompt shown while an incomplete unit is pending.
    pub continuation_prompt: String,
    /// A line containing this text ends the session.
    pub exit_directive: String,
    pub echo: EchoMode,
    pub recovery: RecoveryMode,
    /// Color in rendered diagnostics.
    pub color: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "> ".to_string(),
            continuation_prompt: "... ".to_string(),
            exit_directive: "exit".to_string(),
            echo: EchoMode::default(),
            recovery: RecoveryMode::default(),
            color: false,
        }
    }
}

/// Why the loop stopped.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ReplExit {
    EndOfInput,
    Directive,
}

#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Repl<R, W, E> {
    input: R,
    output: W,
    errors: E,
    config: ReplConfig,
    /// Lines of the unit being continued.
    pending: Vec<u8>,
}

impl<R: BufRead, W: Write, E: Write> Repl<R, W, E> {
    pub fn new(input: R, output: W, errors: E) -> Self {
        Self::with_config(input, output, errors, ReplConfig::default())
    }

    pub fn with_config(input: R, output: W, errors: E, config: ReplConfig) -> Self {
        Repl {
            input,
            output,
            errors,
            config,
            pending: Vec::new(),
        }
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Run until end of input or the exit directive.
    pub fn run(&mut self) -> Result<ReplExit, ReplError> {
        tracing::info!(recovery = ?self.config.recovery, "repl started");
        let mut line = Vec::new();
        loop {
            let prompt = if self.pending.is_empty() {
                &self.config.prompt
            } else {
                &self.config.continuation_prompt
            };
            self.output.write_all(prompt.as_bytes())?;
            self.output.flush()?;

            line.clear();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                if !self.pending.is_empty() {
                    self.abandon_pending()?;
                }
                tracing::info!("repl stopped at end of input");
                return Ok(ReplExit::EndOfInput);
            }

            if self.is_exit_directive(&line) {
                if !self.pending.is_empty() {
                    self.abandon_pending()?;
                }
                tracing::info!("repl stopped by exit directive");
                return Ok(ReplExit::Directive);
            }

            self.eval_line(&line)?;
        }
    }

    fn is_exit_directive(&self, line: &[u8]) -> bool {
        let directive = self.config.exit_directive.as_bytes();
        !directive.is_empty() && line.windows(directive.len()).any(|w| w == directive)
    }

    fn eval_line(&mut self, line: &[u8]) -> Result<(), ReplError> {
        if !self.pending.is_empty() && line.iter().all(u8::is_ascii_whitespace) {
            return self.abandon_pending();
        }

        self.pending.extend_from_slice(line);
        match self.parse_pending() {
            Ok(program) => {
                self.pending.clear();
                self.echo(&program)
            }
            Err(errors) if errors.iter().all(SyntaxError::is_incomplete) => {
                tracing::debug!(bytes = self.pending.len(), "input incomplete, continuing");
                Ok(())
            }
            Err(errors) => {
                self.report(&errors)?;
                self.pending.clear();
                Ok(())
            }
        }
    }

    /// Drop the pending unit, reporting why it could not be parsed.
    fn abandon_pending(&mut self) -> Result<(), ReplError> {
        tracing::warn!(bytes = self.pending.len(), "abandoning incomplete input");
        if let Err(errors) = self.parse_pending() {
            self.report(&errors)?;
        }
        self.pending.clear();
        Ok(())
    }

    fn parse_pending(&self) -> Result<Program, Vec<SyntaxError>> {
        match self.config.recovery {
            RecoveryMode::Bail => parse(&self.pending).map_err(|error| vec![error]),
            RecoveryMode::Synchronize => {
                let output = parse_recovering(&self.pending);
                if output.has_errors() {
                    Err(output.errors)
                } else {
                    Ok(output.program)
                }
            }
        }
    }

    fn echo(&mut self, program: &Program) -> Result<(), ReplError> {
        if program.is_empty() {
            return Ok(());
        }
        match self.config.echo {
            EchoMode::Pretty => {
                self.output
                    .write_all(leo_fmt::format_program(program).as_bytes())?;
            }
            EchoMode::Debug => writeln!(self.output, "{program:#?}")?,
            EchoMode::None => {}
        }
        Ok(())
    }

    fn report(&mut self, errors: &[SyntaxError]) -> Result<(), ReplError> {
        let options = RenderOptions {
            color: self.config.color,
        };
        render_errors(
            &mut self.errors,
            REPL_SOURCE_NAME,
            &self.pending,
            errors,
            options,
        )?;
        self.errors.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
