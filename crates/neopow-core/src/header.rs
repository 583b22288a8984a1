//! # Header View
//!
//! Defines `HeaderView`, a validated read-only borrow of the caller's
//! input buffer. This is the only input type the mixing engine accepts.
//!
//! ## Invariant
//!
//! The inner slice is private and the only constructor is
//! `HeaderView::new()`, which checks the length against the selected
//! profile. A mixing engine therefore never sees an input of the wrong
//! size; passing one is a compile error, not a runtime hazard.
//!
//! The view borrows the caller's memory for the duration of the call and
//! cannot outlive it. Nothing in this workspace stores a `HeaderView`,
//! so the caller's buffer is released the moment the hashing call
//! returns, on success and error paths alike.

use crate::error::HashError;
use crate::profile::Profile;

/// Length of a block header in bytes.
///
/// Proof-of-work hashing consumes the fixed 80-byte block header; this
/// is the only input length either profile accepts.
pub const HEADER_BYTES: usize = 80;

/// A length-validated, read-only view of a caller-owned header buffer.
#[derive(Debug, Clone, Copy)]
pub struct HeaderView<'a> {
    bytes: &'a [u8],
    profile: Profile,
}

impl<'a> HeaderView<'a> {
    /// Validate a caller buffer against the selected profile.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidLength` with the expected and actual
    /// lengths when the buffer is not exactly the size the profile
    /// requires.
    pub fn new(bytes: &'a [u8], profile: Profile) -> Result<Self, HashError> {
        let expected = profile.input_len();
        if bytes.len() != expected {
            return Err(HashError::InvalidLength {
                profile,
                expected,
                actual: bytes.len(),
            });
        }
        Ok(Self { bytes, profile })
    }

    /// Access the validated header bytes.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The length of the view, always `profile().input_len()`.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The profile this view was validated against.
    pub fn profile(&self) -> Profile {
        self.profile
    }
}

impl AsRef<[u8]> for HeaderView<'_> {
    fn as_ref(&self) -> &[u8] {
        self.bytes
    }
}
