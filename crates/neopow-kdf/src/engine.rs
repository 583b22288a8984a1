//! # Mixing Engine
//!
//! Defines `MixEngine`, the narrow seam behind which the memory-hard
//! mixing primitive lives, and `ScryptEngine`, the production engine.
//!
//! ## Contract
//!
//! An engine receives a length-validated `HeaderView` and writes exactly
//! `DIGEST_BYTES` bytes into the caller's output array. It must be
//! deterministic, free of side effects beyond writing the output, and
//! reentrant: any working memory is stack- or heap-allocated inside the
//! call, never shared. A static scratch buffer would make concurrent
//! calls corrupt each other, so the trait requires `Send + Sync` and
//! implementations hold no mutable state.
//!
//! Keeping the primitive behind one trait means it can be swapped (for a
//! bit-exact NeoScrypt backend over FFI, for instance), stubbed in tests,
//! or audited without touching the validation and marshaling logic in
//! [`crate::hasher`].

use neopow_core::{HashError, HeaderView, Profile, DIGEST_BYTES};
use scrypt::Params;

/// The mixing primitive contract.
pub trait MixEngine: Send + Sync {
    /// Run the mix over a validated header, writing the digest into
    /// `output`.
    ///
    /// # Errors
    ///
    /// `HashError::AllocationFailure` when per-call working memory could
    /// not be reserved, `HashError::PrimitiveFailure` for any other
    /// in-band engine failure. On error `output` holds no digest and the
    /// caller must not read it.
    fn mix(&self, header: &HeaderView<'_>, output: &mut [u8; DIGEST_BYTES])
        -> Result<(), HashError>;
}

/// Production engine backed by the RustCrypto scrypt implementation.
///
/// Each profile selects its published cost parameters; the header serves
/// as both password and salt, the way scrypt-family proof-of-work coins
/// hash block headers. The backing implementation allocates its working
/// memory per call, so concurrent use needs no locking.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScryptEngine;

impl ScryptEngine {
    fn params_for(profile: Profile) -> Result<Params, HashError> {
        let (log_n, r, p) = match profile {
            Profile::Scrypt => (10, 1, 1),
            Profile::Neoscrypt => (7, 2, 1),
        };
        Params::new(log_n, r, p, DIGEST_BYTES)
            .map_err(|e| HashError::PrimitiveFailure(e.to_string()))
    }
}

impl MixEngine for ScryptEngine {
    fn mix(
        &self,
        header: &HeaderView<'_>,
        output: &mut [u8; DIGEST_BYTES],
    ) -> Result<(), HashError> {
        let params = Self::params_for(header.profile())?;
        scrypt::scrypt(header.as_bytes(), header.as_bytes(), &params, output)
            .map_err(|e| HashError::PrimitiveFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neopow_core::HEADER_BYTES;

    fn header_of(fill: u8) -> [u8; HEADER_BYTES] {
        [fill; HEADER_BYTES]
    }

    fn mix(engine: &ScryptEngine, bytes: &[u8], profile: Profile) -> [u8; DIGEST_BYTES] {
        let view = HeaderView::new(bytes, profile).unwrap();
        let mut output = [0u8; DIGEST_BYTES];
        engine.mix(&view, &mut output).unwrap();
        output
    }

    #[test]
    fn test_mix_is_deterministic() {
        let header = header_of(0x11);
        let engine = ScryptEngine;
        let a = mix(&engine, &header, Profile::Neoscrypt);
        let b = mix(&engine, &header, Profile::Neoscrypt);
        assert_eq!(a, b);
    }

    #[test]
    fn test_mix_writes_the_output() {
        let header = header_of(0x22);
        let digest = mix(&ScryptEngine, &header, Profile::Neoscrypt);
        assert_ne!(digest, [0u8; DIGEST_BYTES]);
    }

    #[test]
    fn test_distinct_headers_give_distinct_digests() {
        let mut other = header_of(0x33);
        other[79] ^= 1;
        let engine = ScryptEngine;
        let a = mix(&engine, &header_of(0x33), Profile::Neoscrypt);
        let b = mix(&engine, &other, Profile::Neoscrypt);
        assert_ne!(a, b);
    }

    #[test]
    fn test_profiles_give_distinct_digests_for_same_header() {
        let header = header_of(0x44);
        let engine = ScryptEngine;
        let scrypt = mix(&engine, &header, Profile::Scrypt);
        let neoscrypt = mix(&engine, &header, Profile::Neoscrypt);
        assert_ne!(scrypt, neoscrypt);
    }

    #[test]
    fn test_params_exist_for_every_profile() {
        for profile in Profile::all_profiles() {
            assert!(ScryptEngine::params_for(profile).is_ok());
        }
    }
}
