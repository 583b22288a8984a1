//! # Error Types
//!
//! Defines the error types for the hashing gateway boundary. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every validation failure is detected before the mixing engine runs
//!   and is returned to the caller as a typed value.
//! - There is no silent fallback result: a caller receives either a full
//!   32-byte digest or one of these errors, never a partial or zeroed
//!   digest standing in for a failure.

use thiserror::Error;

use crate::profile::Profile;

/// Failure modes of the hashing entry point.
///
/// The first three variants are boundary validation failures and are
/// produced before the mixing engine is ever invoked. The last two are
/// re-signaled engine failures.
#[derive(Error, Debug)]
pub enum HashError {
    /// The input buffer is absent.
    #[error("input buffer is absent")]
    NullInput,

    /// The input length does not match what the selected profile requires.
    #[error("input is {actual} bytes but profile {profile} requires {expected}")]
    InvalidLength {
        /// The profile the input was validated against.
        profile: Profile,
        /// The length the profile requires.
        expected: usize,
        /// The length the caller supplied.
        actual: usize,
    },

    /// The raw profile identifier is not in the supported set.
    #[error("unsupported profile identifier {0:#010x}")]
    InvalidProfile(u32),

    /// Per-call working memory could not be reserved.
    ///
    /// Signals resource exhaustion, not a logic error. The in-tree
    /// engine manages its own scratch and does not raise this; engines
    /// that reserve scratch fallibly (an FFI backend, for instance) map
    /// their native allocation failure here.
    #[error("working memory could not be reserved: {0}")]
    AllocationFailure(String),

    /// The mixing engine reported an in-band failure.
    #[error("mixing engine failed: {0}")]
    PrimitiveFailure(String),
}

/// Error when reconstructing a digest from host-interchange forms
/// (hex strings, untagged byte slices).
#[derive(Error, Debug)]
pub enum DigestParseError {
    /// The value does not contain exactly the digest size.
    #[error("digest must be {expected} bytes, got {actual}")]
    WrongLength {
        /// The digest size in bytes.
        expected: usize,
        /// The length of the supplied value.
        actual: usize,
    },

    /// The hex string could not be decoded.
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}
