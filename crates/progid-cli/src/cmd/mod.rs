use std::process::ExitCode;

use anyhow::Result;

use crate::args::{Cli, Command, VerifyArgs};

mod export;
mod show;
mod verify;

/// Program id does not appear in the source.
pub const EXIT_MISMATCH: u8 = 1;

/// Keypair missing or any other error.
pub const EXIT_FAILURE: u8 = 2;

pub fn dispatch(cli: Cli) -> Result<ExitCode> {
    match cli.command.unwrap_or_else(|| Command::Verify(VerifyArgs::default())) {
        Command::Verify(args) => {
            tracing::debug!(
                command = "verify",
                keypair = %args.keypair.display(),
                source = %args.source.display(),
                "dispatching"
            );
            verify::run(&args)
        }
        Command::Show { keypair } => {
            tracing::debug!(command = "show", keypair = %keypair.display(), "dispatching");
            show::run(&keypair)
        }
        Command::Export { keypair } => {
            tracing::debug!(command = "export", keypair = ?keypair, "dispatching");
            export::run(keypair.as_deref())
        }
    }
}
