//! `leo`: line REPL and developer commands for the Leo front end.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use leo_parse::RecoveryMode;
use leoc::cli::{Command, LeoArgs};
use leoc::commands::{self, CommandError, Outcome};
use leoc::reporting::RenderOptions;
use leoc::{EchoMode, Repl, ReplConfig, ReplError};

fn main() -> ExitCode {
    leoc::init_tracing();
    let args = LeoArgs::parse();

    match run(&args) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::SyntaxErrors) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &LeoArgs) -> Result<Outcome, CommandError> {
    let options = RenderOptions {
        color: !args.no_color && io::stderr().is_terminal(),
    };
    let stdout = io::stdout();
    let stderr = io::stderr();

    match args.command() {
        Command::Repl {
            debug,
            quiet,
            recover,
        } => {
            let echo = if *quiet {
                EchoMode::None
            } else if *debug {
                EchoMode::Debug
            } else {
                EchoMode::Pretty
            };
            let config = ReplConfig {
                echo,
                recovery: if *recover {
                    RecoveryMode::Synchronize
                } else {
                    RecoveryMode::Bail
                },
                color: options.color,
                ..ReplConfig::default()
            };
            let mut repl =
                Repl::with_config(io::stdin().lock(), stdout.lock(), stderr.lock(), config);
            match repl.run() {
                Ok(_) => Ok(Outcome::Success),
                Err(ReplError::Io(error)) => Err(CommandError::Io(error)),
            }
        }
        Command::Lex { file } => {
            let source = commands::read_source(file)?;
            commands::lex(&source, &mut stdout.lock())
        }
        Command::Parse { file } => {
            let source = commands::read_source(file)?;
            let name = file.display().to_string();
            commands::parse(
                &name,
                &source,
                &mut stdout.lock(),
                &mut stderr.lock(),
                options,
            )
        }
        Command::Fmt { file } => {
            let source = commands::read_source(file)?;
            let name = file.display().to_string();
            commands::fmt(
                &name,
                &source,
                &mut stdout.lock(),
                &mut stderr.lock(),
                options,
            )
        }
        Command::Root => commands::root(&args.marker, &mut stdout.lock()),
    }
}
