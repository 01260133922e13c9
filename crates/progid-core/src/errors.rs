//! Error types for progid-core.
//!
//! Every fallible step of the verifier reports one of these variants. The
//! verifier's outer boundary folds them into an [`Outcome`](crate::verify::Outcome),
//! so callers of [`verify`](crate::verify::verify) never see them directly.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type ProgidResult<T> = Result<T, ProgidError>;

#[derive(Debug, Error)]
pub enum ProgidError {
    #[error("keypair file not found: {}", path.display())]
    KeypairMissing { path: PathBuf },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid keypair json: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("keypair holds {len} bytes, expected at least 32")]
    KeypairTooShort { len: usize },

    #[error("keypair public key {embedded} does not match the key derived from its seed ({derived})")]
    KeypairMismatch { derived: String, embedded: String },

    #[error("invalid base58: {0}")]
    InvalidBase58(#[from] bs58::decode::Error),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ProgidError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Wrap an I/O error raised while reading `path`.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub fn is_keypair_missing(&self) -> bool {
        matches!(self, Self::KeypairMissing { .. })
    }
}
