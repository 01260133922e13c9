use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;
mod output;

fn main() -> ExitCode {
    let cli = args::Cli::parse();
    output::init(cli.json);
    init_tracing(cli.verbose);

    match cmd::dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            output::eprintln_line(&format!("❌ Error: {e:#}"));
            ExitCode::from(cmd::EXIT_FAILURE)
        }
    }
}

// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .init();
}
