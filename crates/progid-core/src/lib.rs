//! progid-core
//!
//! Core primitives for progid:
//! - Solana keypair file loading
//! - Ed25519 program id derivation and base58 encoding
//! - `declare_id!` literal scanning
//! - the verification pass and its outcome model

pub mod config;
pub mod declared;
pub mod errors;
pub mod keypair;
pub mod program_id;
pub mod verify;

pub use crate::errors::{ProgidError, ProgidResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::config::{
        default_wallet_path, validate_config, VerifyConfig, DEFAULT_KEYPAIR_PATH, DEFAULT_SOURCE_PATH,
    };
    pub use crate::declared::{find_declared_ids, DeclaredId};
    pub use crate::keypair::Keypair;
    pub use crate::program_id::{derive_program_id, ProgramId};
    pub use crate::verify::{verify, Outcome, ReportLine, Status};
    pub use crate::{ProgidError, ProgidResult};
}
