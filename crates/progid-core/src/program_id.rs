//! Program id derivation and base58 encoding.
//!
//! A program id is the Ed25519 public key of the program keypair, rendered in
//! base58 (Bitcoin/Solana alphabet). Derivation follows RFC 8032 §5.1.5 and is
//! pure: the same seed always yields the same id.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::SigningKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{ProgidError, ProgidResult};

/// Length of an Ed25519 seed and of a public key.
pub const KEY_LEN: usize = 32;

/// 32-byte Ed25519 public key naming a program.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProgramId([u8; KEY_LEN]);

impl ProgramId {
    pub fn from_seed(seed: &[u8; KEY_LEN]) -> Self {
        derive_program_id(seed)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        encode_base58(&self.0)
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProgramId({})", self.to_base58())
    }
}

impl FromStr for ProgramId {
    type Err = ProgidError;

    fn from_str(s: &str) -> ProgidResult<Self> {
        let bytes = decode_base58(s)?;
        let arr: [u8; KEY_LEN] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| ProgidError::InvalidLength { expected: KEY_LEN, actual: bytes.len() })?;
        Ok(Self(arr))
    }
}

impl Serialize for ProgramId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProgramId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Derive the public key for a 32-byte seed.
pub fn derive_program_id(seed: &[u8; KEY_LEN]) -> ProgramId {
    let signing_key = SigningKey::from_bytes(seed);
    ProgramId(signing_key.verifying_key().to_bytes())
}

pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

pub fn decode_base58(s: &str) -> ProgidResult<Vec<u8>> {
    Ok(bs58::decode(s).into_vec()?)
}
