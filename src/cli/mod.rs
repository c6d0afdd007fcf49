mod handlers;
pub mod parse;

use std::{io, process::ExitCode};

use clap::{CommandFactory, Parser, error::ErrorKind};
use env_logger::Env;
pub use parse::Cli;

use crate::core::error::GraphError;

/// The single nonzero status used for every fatal error.
pub const FAILURE: u8 = 1;

pub fn run(cli: &Cli) -> Result<(), GraphError> {
    let mut term = io::stdout().lock();
    handlers::plot(cli, &mut term)
}

/// Binary entry: parse arguments, set up logging, map errors to the exit code.
#[must_use]
pub fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            if !e.render().to_string().contains("Usage:") {
                eprintln!("\n{}", Cli::command().render_usage());
            }
            return ExitCode::from(FAILURE);
        }
    };

    let level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if matches!(e, GraphError::Config(_)) {
                eprintln!("run with -h for usage");
            }
            ExitCode::from(FAILURE)
        }
    }
}
