//! Configuration structures for progid-core.
//!
//! The core crate does not read environment variables or CLI flags. Paths are
//! handed in explicitly by the caller so the verifier stays path-agnostic and
//! can run against temporary fixtures.

use std::path::{Path, PathBuf};

use crate::errors::{ProgidError, ProgidResult};

/// Keypair written by `anchor build` for the program.
pub const DEFAULT_KEYPAIR_PATH: &str = "target/deploy/pvp_program-keypair.json";

/// Program source holding the `declare_id!` invocation.
pub const DEFAULT_SOURCE_PATH: &str = "programs/pvp_program/src/lib.rs";

/// Solana CLI default wallet, relative to the home directory.
pub const DEFAULT_WALLET_PATH: &str = ".config/solana/id.json";

/// Inputs of a single verification pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifyConfig {
    pub keypair_path: PathBuf,
    pub source_path: PathBuf,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            keypair_path: PathBuf::from(DEFAULT_KEYPAIR_PATH),
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
        }
    }
}

impl VerifyConfig {
    pub fn new(keypair_path: impl Into<PathBuf>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            keypair_path: keypair_path.into(),
            source_path: source_path.into(),
        }
    }

    pub fn with_keypair(mut self, path: impl Into<PathBuf>) -> Self {
        self.keypair_path = path.into();
        self
    }

    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = path.into();
        self
    }

    /// File name shown in report lines (`lib.rs` for the default source).
    pub fn source_label(&self) -> String {
        file_label(&self.source_path)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Validate a configuration before running it.
pub fn validate_config(cfg: &VerifyConfig) -> ProgidResult<()> {
    if cfg.keypair_path.as_os_str().is_empty() {
        return Err(ProgidError::invalid_argument("keypair path must not be empty"));
    }

    if cfg.source_path.as_os_str().is_empty() {
        return Err(ProgidError::invalid_argument("source path must not be empty"));
    }

    Ok(())
}

/// Default wallet keypair path under `home`.
pub fn default_wallet_path(home: &Path) -> PathBuf {
    home.join(DEFAULT_WALLET_PATH)
}
