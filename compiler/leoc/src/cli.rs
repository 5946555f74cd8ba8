//! Command-line arguments for `leo`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "leo", version, about = "Leo tokenizer, parser and line REPL")]
pub struct LeoArgs {
    /// Directory name that marks the project root.
    #[arg(long, global = true, default_value = "leo")]
    pub marker: String,

    /// Disable colored diagnostics.
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read lines from stdin and parse each one (the default).
    Repl {
        /// Echo parsed programs as `Debug` trees instead of formatted source.
        #[arg(long)]
        debug: bool,
        /// Do not echo parsed programs.
        #[arg(long, conflicts_with = "debug")]
        quiet: bool,
        /// Report every error in a line instead of stopping at the first.
        #[arg(long)]
        recover: bool,
    },
    /// Print the token stream of a file.
    Lex {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Parse a file and print its syntax tree or errors.
    Parse {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print a file in canonical layout.
    Fmt {
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the project root for the current directory.
    Root,
}

impl LeoArgs {
    /// The subcommand, defaulting to the REPL.
    pub fn command(&self) -> &Command {
        static DEFAULT: Command = Command::Repl {
            debug: false,
            quiet: false,
            recover: false,
        };
        self.command.as_ref().unwrap_or(&DEFAULT)
    }
}
