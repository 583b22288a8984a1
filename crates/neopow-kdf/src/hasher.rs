//! # Hashing Entry Point
//!
//! The boundary function that takes a caller-owned byte buffer and a raw
//! profile selector, validates both, delegates to a mixing engine, and
//! returns a freshly owned digest.
//!
//! ## Invariant
//!
//! All validation happens before the engine runs, in a fixed order:
//! absent input, then unknown profile, then wrong length. The engine
//! writes into a call-local scratch array, which is copied into the
//! returned `PowDigest`, so the result never aliases the input buffer
//! and a failed call never yields a partial or zeroed digest.

use neopow_core::{HashError, HeaderView, PowDigest, Profile, DIGEST_BYTES};

use crate::engine::{MixEngine, ScryptEngine};

/// Compute the proof-of-work digest of a caller buffer.
///
/// This is the host-facing boundary: `input` mirrors a host convention
/// where the buffer may be absent, and `raw_profile` is the untrusted
/// 32-bit selector as it travels on the wire. Callers holding typed
/// values should prefer [`hash_header`].
///
/// The input is borrowed for the duration of the call only; the returned
/// digest owns its bytes independently of the caller's buffer.
///
/// # Errors
///
/// - `HashError::NullInput` when `input` is `None`.
/// - `HashError::InvalidProfile` when `raw_profile` is not a supported
///   identifier.
/// - `HashError::InvalidLength` when the buffer is not the length the
///   profile requires.
/// - `HashError::AllocationFailure` / `HashError::PrimitiveFailure`
///   re-signaled from the engine.
pub fn compute_hash<E: MixEngine>(
    engine: &E,
    input: Option<&[u8]>,
    raw_profile: u32,
) -> Result<PowDigest, HashError> {
    let bytes = input.ok_or(HashError::NullInput)?;
    let profile = Profile::from_raw(raw_profile)?;
    let header = HeaderView::new(bytes, profile)?;
    let mut scratch = [0u8; DIGEST_BYTES];
    engine.mix(&header, &mut scratch)?;
    Ok(PowDigest::new(profile, scratch))
}

/// Compute the proof-of-work digest of a block header with the default
/// engine.
///
/// # Errors
///
/// Returns `HashError::InvalidLength` when `header` is not the length
/// the profile requires, or a re-signaled engine failure.
pub fn hash_header(header: &[u8], profile: Profile) -> Result<PowDigest, HashError> {
    compute_hash(&ScryptEngine, Some(header), profile.raw())
}
