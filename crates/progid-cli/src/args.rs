use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use progid_core::prelude::{DEFAULT_KEYPAIR_PATH, DEFAULT_SOURCE_PATH};

#[derive(Parser, Debug, Clone)]
#[command(name = "progid", version, about = "Check a Solana program keypair against its declare_id!")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// Log debug events to stderr (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Defaults to `verify` when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Derive the program id from a keypair and look for it in the program source.
    Verify(VerifyArgs),

    /// Print the program id of a keypair.
    Show {
        #[arg(long, default_value = DEFAULT_KEYPAIR_PATH)]
        keypair: PathBuf,
    },

    /// Print a keypair as a base58 secret key for wallet import.
    Export {
        /// Keypair file (default: ~/.config/solana/id.json).
        #[arg(long)]
        keypair: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Keypair JSON written by `anchor build`.
    #[arg(long, default_value = DEFAULT_KEYPAIR_PATH)]
    pub keypair: PathBuf,

    /// Program source expected to contain the id.
    #[arg(long, default_value = DEFAULT_SOURCE_PATH)]
    pub source: PathBuf,

    /// Always exit 0 after printing, whatever the result.
    #[arg(long)]
    pub lenient: bool,
}

impl Default for VerifyArgs {
    fn default() -> Self {
        Self {
            keypair: PathBuf::from(DEFAULT_KEYPAIR_PATH),
            source: PathBuf::from(DEFAULT_SOURCE_PATH),
            lenient: false,
        }
    }
}
