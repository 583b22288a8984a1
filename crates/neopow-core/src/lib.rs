//! # neopow-core
//!
//! Foundational types for the neopow hashing gateway. This crate defines
//! the boundary contract that the engine crate implements; it contains
//! no cryptography of its own and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes at the boundary.** `HeaderView` is the only
//!    input type a mixing engine accepts, and its sole constructor checks
//!    the length against the selected profile. Unvalidated input past the
//!    boundary is unrepresentable.
//!
//! 2. **One `Profile` enum.** The raw 32-bit identifier space is
//!    validated into `Profile` once, at the boundary. Every downstream
//!    `match` is exhaustive, so adding a profile forces every consumer to
//!    handle it.
//!
//! 3. **Self-describing digests.** `PowDigest` carries its profile tag
//!    next to the 32 raw bytes, so digests produced under different
//!    tunings never compare equal.
//!
//! 4. **Typed failures only.** `HashError` enumerates every way a call
//!    can fail. There is no zeroed or partial digest standing in for an
//!    error.
//!
//! ## Crate Policy
//!
//! - No dependencies on other workspace crates (this is the leaf).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug` and `Clone`; the value types also
//!   implement `Serialize`/`Deserialize`.

pub mod digest;
pub mod error;
pub mod header;
pub mod profile;

// Re-export primary types for ergonomic imports.
pub use digest::{PowDigest, DIGEST_BYTES};
pub use error::{DigestParseError, HashError};
pub use header::{HeaderView, HEADER_BYTES};
pub use profile::{Profile, PROFILE_COUNT, RAW_PROFILE_NEOSCRYPT, RAW_PROFILE_SCRYPT};
