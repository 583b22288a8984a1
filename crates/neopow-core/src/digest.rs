//! # Proof-of-Work Digest
//!
//! Defines `PowDigest`, the fixed 32-byte result of a hashing call,
//! tagged with the profile that produced it.
//!
//! ## Invariant
//!
//! A `PowDigest` always holds exactly `DIGEST_BYTES` bytes and owns them.
//! The bytes never alias the input buffer the digest was computed from;
//! the entry point copies the engine's scratch output into a fresh value
//! before returning.

use serde::{Deserialize, Serialize};

use crate::error::DigestParseError;
use crate::profile::Profile;

/// Size of a digest in bytes.
pub const DIGEST_BYTES: usize = 32;

/// A proof-of-work digest with its profile tag.
///
/// The profile tag makes digests self-describing: a scrypt digest and a
/// NeoScrypt digest over the same header are different values and never
/// compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PowDigest {
    /// The profile that produced this digest.
    pub profile: Profile,
    /// The raw 32-byte digest value.
    pub bytes: [u8; DIGEST_BYTES],
}

impl PowDigest {
    /// Create a digest from its profile tag and raw bytes.
    pub fn new(profile: Profile, bytes: [u8; DIGEST_BYTES]) -> Self {
        Self { profile, bytes }
    }

    /// Create a digest from a slice that must hold exactly `DIGEST_BYTES`.
    ///
    /// # Errors
    ///
    /// Returns `DigestParseError::WrongLength` for any other length.
    pub fn try_from_bytes(profile: Profile, value: &[u8]) -> Result<Self, DigestParseError> {
        if value.len() != DIGEST_BYTES {
            return Err(DigestParseError::WrongLength {
                expected: DIGEST_BYTES,
                actual: value.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_BYTES];
        bytes.copy_from_slice(value);
        Ok(Self { profile, bytes })
    }

    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_BYTES] {
        &self.bytes
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from a 64-character hex string.
    ///
    /// # Errors
    ///
    /// Returns `DigestParseError::WrongLength` when the string does not
    /// decode to exactly `DIGEST_BYTES` bytes, `DigestParseError::InvalidHex`
    /// when it contains non-hex characters.
    pub fn from_hex(profile: Profile, hex: &str) -> Result<Self, DigestParseError> {
        let hex = hex.trim().to_lowercase();
        let decoded = hex_to_bytes(&hex).map_err(DigestParseError::InvalidHex)?;
        Self::try_from_bytes(profile, &decoded)
    }
}

impl std::fmt::Display for PowDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.profile, self.to_hex())
    }
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_format() {
        let digest = PowDigest::new(Profile::Scrypt, [0xab; DIGEST_BYTES]);
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(&hex[..4], "abab");
    }

    #[test]
    fn test_display_is_profile_tagged() {
        let digest = PowDigest::new(Profile::Neoscrypt, [0u8; DIGEST_BYTES]);
        let s = format!("{digest}");
        assert!(s.starts_with("neoscrypt:"));
        assert_eq!(s.len(), "neoscrypt:".len() + 64);
    }

    #[test]
    fn test_try_from_bytes_exact_length() {
        let value = [7u8; DIGEST_BYTES];
        let digest = PowDigest::try_from_bytes(Profile::Scrypt, &value).unwrap();
        assert_eq!(digest.as_bytes(), &value);
    }

    #[test]
    fn test_try_from_bytes_wrong_length() {
        for len in [0, 31, 33, 64] {
            let value = vec![0u8; len];
            match PowDigest::try_from_bytes(Profile::Scrypt, &value) {
                Err(DigestParseError::WrongLength { expected, actual }) => {
                    assert_eq!(expected, DIGEST_BYTES);
                    assert_eq!(actual, len);
                }
                other => panic!("expected WrongLength, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_from_hex_roundtrip() {
        let digest = PowDigest::new(Profile::Neoscrypt, [0x5a; DIGEST_BYTES]);
        let parsed = PowDigest::from_hex(Profile::Neoscrypt, &digest.to_hex()).unwrap();
        assert_eq!(parsed, digest);
    }

    #[test]
    fn test_from_hex_accepts_uppercase_and_whitespace() {
        let digest = PowDigest::new(Profile::Scrypt, [0xcd; DIGEST_BYTES]);
        let shouty = format!("  {}  ", digest.to_hex().to_uppercase());
        let parsed = PowDigest::from_hex(Profile::Scrypt, &shouty).unwrap();
        assert_eq!(parsed, digest);
    }

    #[test]
    fn test_from_hex_invalid_input() {
        assert!(matches!(
            PowDigest::from_hex(Profile::Scrypt, &"zz".repeat(32)),
            Err(DigestParseError::InvalidHex(_))
        ));
        assert!(matches!(
            PowDigest::from_hex(Profile::Scrypt, "abc"),
            Err(DigestParseError::InvalidHex(_))
        ));
        assert!(matches!(
            PowDigest::from_hex(Profile::Scrypt, "aabb"),
            Err(DigestParseError::WrongLength { .. })
        ));
    }

    #[test]
    fn test_profile_tag_distinguishes_digests() {
        let bytes = [1u8; DIGEST_BYTES];
        let scrypt = PowDigest::new(Profile::Scrypt, bytes);
        let neoscrypt = PowDigest::new(Profile::Neoscrypt, bytes);
        assert_ne!(scrypt, neoscrypt);
    }

    #[test]
    fn test_serde_json_roundtrip() {
        let digest = PowDigest::new(Profile::Scrypt, [9u8; DIGEST_BYTES]);
        let json = serde_json::to_string(&digest).unwrap();
        let parsed: PowDigest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, digest);
    }
}
