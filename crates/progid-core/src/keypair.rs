//! Solana keypair files.
//!
//! A keypair file is a JSON array of byte values. The first 32 bytes are the
//! Ed25519 seed; Solana tooling writes 64 bytes, seed followed by the public
//! key. Anything past the seed is optional for derivation.

use std::fs;
use std::io;
use std::path::Path;

use zeroize::Zeroizing;

use crate::errors::{ProgidError, ProgidResult};
use crate::program_id::{derive_program_id, encode_base58, ProgramId, KEY_LEN};

/// Seed plus the public key stored next to it, if the file carried one.
#[derive(Clone)]
pub struct Keypair {
    seed: Zeroizing<[u8; KEY_LEN]>,
    embedded_public: Option<[u8; KEY_LEN]>,
}

impl Keypair {
    /// Read and parse a keypair file.
    ///
    /// A missing file maps to [`ProgidError::KeypairMissing`] so callers can
    /// tell it apart from other I/O failures.
    pub fn load<P: AsRef<Path>>(path: P) -> ProgidResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ProgidError::KeypairMissing { path: path.to_path_buf() },
            _ => ProgidError::io(path, e),
        })?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "read keypair file");
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ProgidResult<Self> {
        let bytes: Vec<u8> = serde_json::from_str(raw)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> ProgidResult<Self> {
        if bytes.len() < KEY_LEN {
            return Err(ProgidError::KeypairTooShort { len: bytes.len() });
        }

        let mut seed = [0u8; KEY_LEN];
        seed.copy_from_slice(&bytes[..KEY_LEN]);

        let embedded_public = bytes.get(KEY_LEN..2 * KEY_LEN).map(|tail| {
            let mut pk = [0u8; KEY_LEN];
            pk.copy_from_slice(tail);
            pk
        });

        Ok(Self { seed: Zeroizing::new(seed), embedded_public })
    }

    pub fn from_seed(seed: [u8; KEY_LEN]) -> Self {
        Self { seed: Zeroizing::new(seed), embedded_public: None }
    }

    pub fn seed(&self) -> &[u8; KEY_LEN] {
        &self.seed
    }

    pub fn program_id(&self) -> ProgramId {
        derive_program_id(&*self.seed)
    }

    /// Public key stored after the seed (bytes 32..64), if present.
    pub fn embedded_public(&self) -> Option<&[u8; KEY_LEN]> {
        self.embedded_public.as_ref()
    }

    /// Fail when the stored public key disagrees with the derived one.
    pub fn check_consistency(&self) -> ProgidResult<ProgramId> {
        let derived = self.program_id();
        match self.embedded_public {
            Some(embedded) if embedded != *derived.as_bytes() => Err(ProgidError::KeypairMismatch {
                derived: derived.to_base58(),
                embedded: encode_base58(&embedded),
            }),
            _ => Ok(derived),
        }
    }

    /// 64-byte secret key (seed followed by the derived public key).
    pub fn secret_key_bytes(&self) -> Zeroizing<[u8; 2 * KEY_LEN]> {
        let mut out = Zeroizing::new([0u8; 2 * KEY_LEN]);
        out[..KEY_LEN].copy_from_slice(&*self.seed);
        out[KEY_LEN..].copy_from_slice(self.program_id().as_bytes());
        out
    }

    /// Base58 of [`Keypair::secret_key_bytes`], the wallet import format.
    pub fn secret_key_base58(&self) -> String {
        encode_base58(self.secret_key_bytes().as_slice())
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("program_id", &self.program_id())
            .field("embedded_public", &self.embedded_public.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;

    fn zero_keypair_json(with_public: bool) -> String {
        let mut bytes = vec![0u8; KEY_LEN];
        if with_public {
            bytes.extend_from_slice(derive_program_id(&[0u8; KEY_LEN]).as_bytes());
        }
        serde_json::to_string(&bytes).unwrap()
    }

    #[test]
    fn parses_64_byte_solana_keypair() {
        let kp = Keypair::from_json_str(&zero_keypair_json(true)).unwrap();
        assert_eq!(kp.seed(), &[0u8; KEY_LEN]);
        assert!(kp.embedded_public().is_some());
        assert_eq!(
            kp.check_consistency().unwrap().to_string(),
            "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"
        );
    }

    #[test]
    fn seed_only_keypair_is_accepted() {
        let kp = Keypair::from_json_str(&zero_keypair_json(false)).unwrap();
        assert!(kp.embedded_public().is_none());
        assert!(kp.check_consistency().is_ok());
    }

    #[test]
    fn too_short_is_rejected() {
        let err = Keypair::from_json_str("[1, 2, 3, 4, 5]").unwrap_err();
        assert_matches!(err, ProgidError::KeypairTooShort { len: 5 });
    }

    #[test]
    fn out_of_range_value_is_json_error() {
        let mut bytes: Vec<u32> = vec![0; KEY_LEN];
        bytes[3] = 300;
        let raw = serde_json::to_string(&bytes).unwrap();
        assert_matches!(Keypair::from_json_str(&raw), Err(ProgidError::InvalidJson(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert_matches!(Keypair::from_json_str("not json"), Err(ProgidError::InvalidJson(_)));
    }

    #[test]
    fn inconsistent_public_key_detected() {
        let mut bytes = vec![0u8; KEY_LEN];
        bytes.extend_from_slice(&[7u8; KEY_LEN]);
        let kp = Keypair::from_bytes(&bytes).unwrap();
        assert_matches!(kp.check_consistency(), Err(ProgidError::KeypairMismatch { .. }));
        // Derivation still uses only the seed.
        assert_eq!(kp.program_id(), derive_program_id(&[0u8; KEY_LEN]));
    }

    #[test]
    fn secret_key_is_seed_then_public() {
        let kp = Keypair::from_seed([0u8; KEY_LEN]);
        let sk = kp.secret_key_bytes();
        assert_eq!(&sk[..KEY_LEN], &[0u8; KEY_LEN]);
        assert_eq!(&sk[KEY_LEN..], kp.program_id().as_bytes());
        assert_eq!(
            kp.secret_key_base58(),
            "111111111111111111111111111111114zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"
        );
    }

    #[test]
    fn load_missing_file_is_keypair_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Keypair::load(dir.path().join("absent.json")).unwrap_err();
        assert!(err.is_keypair_missing());
    }

    #[test]
    fn load_reads_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(zero_keypair_json(true).as_bytes()).unwrap();
        let kp = Keypair::load(f.path()).unwrap();
        assert_eq!(kp.program_id(), derive_program_id(&[0u8; KEY_LEN]));
    }

    #[test]
    fn debug_does_not_print_seed() {
        let kp = Keypair::from_seed([9u8; KEY_LEN]);
        let s = format!("{kp:?}");
        assert!(!s.contains("9, 9"));
        assert!(s.contains("program_id"));
    }
}
