use std::env;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use progid_core::prelude::{default_wallet_path, Keypair, ProgramId};
use serde::Serialize;

use crate::output;

#[derive(Debug, Serialize)]
pub struct ExportOut {
    pub secret_key: String,
    pub public_key: ProgramId,
}

pub fn run(keypair_path: Option<&Path>) -> Result<ExitCode> {
    let path = match keypair_path {
        Some(p) => p.to_path_buf(),
        None => default_wallet_path(&home_dir()?),
    };

    let keypair = Keypair::load(&path)
        .with_context(|| format!("make sure a keypair file exists at {}", path.display()))?;
    let public_key = keypair.check_consistency()?;
    let secret_key = keypair.secret_key_base58();

    if output::is_json() {
        output::print(&ExportOut { secret_key, public_key })?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("=== Private Key Export ===");
    println!();
    println!("1. Base58 format (for wallet import):");
    println!("{secret_key}");
    println!();
    println!("2. Public Key:");
    println!("{public_key}");
    println!();
    println!("=== How to import ===");
    println!("1. Open your wallet");
    println!("2. Go to Settings > Add/Connect Wallet > Import Private Key");
    println!("3. Paste the Base58 string above");
    println!();
    println!("⚠️  KEEP THIS PRIVATE KEY SECRET!");
    Ok(ExitCode::SUCCESS)
}

fn home_dir() -> Result<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("cannot locate home directory; pass --keypair"))
}
