//! # Hashing Profiles
//!
//! Defines the `Profile` enum with the supported tuning variants of the
//! mixing primitive. This is the one definition used across the
//! workspace. Every `match` on `Profile` must be exhaustive, so adding a
//! profile forces every consumer to handle it at compile time.
//!
//! ## Raw Identifiers
//!
//! Callers on the host side select a profile with a raw 32-bit value,
//! using the identifiers Feathercoin's NeoScrypt integration defines:
//!
//! | Raw value      | Profile   | Cost parameters       |
//! |----------------|-----------|-----------------------|
//! | `0x0000_0003`  | Scrypt    | N = 1024, r = 1, p = 1 |
//! | `0x8000_0620`  | NeoScrypt | N = 128, r = 2, p = 1  |
//!
//! Any other raw value is rejected with `HashError::InvalidProfile`
//! before the mixing engine runs.

use serde::{Deserialize, Serialize};

use crate::error::HashError;
use crate::header::HEADER_BYTES;

/// Number of supported profiles.
pub const PROFILE_COUNT: usize = 2;

/// Raw identifier for the Scrypt profile.
pub const RAW_PROFILE_SCRYPT: u32 = 0x0000_0003;

/// Raw identifier for the NeoScrypt profile.
pub const RAW_PROFILE_NEOSCRYPT: u32 = 0x8000_0620;

/// A tuning variant of the mixing primitive.
///
/// A profile fixes the cost parameters of the memory-hard mix and the
/// input length the entry point accepts. Profiles are closed: the raw
/// identifier space is validated into this enum at the boundary and no
/// other value exists past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Profile {
    /// Classic scrypt proof-of-work tuning (N = 1024, r = 1, p = 1).
    Scrypt,
    /// NeoScrypt tuning as deployed by Feathercoin (N = 128, r = 2, p = 1).
    Neoscrypt,
}

impl Profile {
    /// Validate a raw 32-bit profile identifier.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidProfile` carrying the rejected value
    /// when it is not in the supported set.
    pub fn from_raw(raw: u32) -> Result<Self, HashError> {
        match raw {
            RAW_PROFILE_SCRYPT => Ok(Self::Scrypt),
            RAW_PROFILE_NEOSCRYPT => Ok(Self::Neoscrypt),
            other => Err(HashError::InvalidProfile(other)),
        }
    }

    /// The raw identifier this profile travels as on the host side.
    pub const fn raw(&self) -> u32 {
        match self {
            Self::Scrypt => RAW_PROFILE_SCRYPT,
            Self::Neoscrypt => RAW_PROFILE_NEOSCRYPT,
        }
    }

    /// The input length this profile requires, in bytes.
    ///
    /// Both profiles consume the fixed-size block header.
    pub const fn input_len(&self) -> usize {
        match self {
            Self::Scrypt | Self::Neoscrypt => HEADER_BYTES,
        }
    }

    /// Returns the profile name string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scrypt => "scrypt",
            Self::Neoscrypt => "neoscrypt",
        }
    }

    /// All supported profiles, in declaration order.
    pub fn all_profiles() -> [Profile; PROFILE_COUNT] {
        [Self::Scrypt, Self::Neoscrypt]
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
