//! Leo front end driver.
//!
//! Glue around the lexer, parser and formatter: the line-oriented REPL,
//! project path helpers, diagnostic rendering, and the developer commands
//! behind the `leo` binary.

pub mod cli;
pub mod commands;
pub mod project;
pub mod repl;
pub mod reporting;

pub use project::{parent_path, project_dir, project_relative_path, project_root, ProjectPathError};
pub use repl::{EchoMode, Repl, ReplConfig, ReplError, ReplExit};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr log subscriber.
///
/// Does nothing unless `RUST_LOG` is set, e.g. `RUST_LOG=leo_parse=debug`.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
