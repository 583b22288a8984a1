//! # neopow-kdf
//!
//! The hashing side of the neopow gateway:
//!
//! - **`MixEngine`**, the narrow trait isolating the memory-hard mixing
//!   primitive so it can be swapped, stubbed, or audited independently
//!   of the boundary logic.
//! - **`ScryptEngine`**, the production engine, realizing both profiles
//!   over the RustCrypto scrypt implementation with per-profile cost
//!   parameters.
//! - **`compute_hash`** / **`hash_header`**, the validated entry points
//!   that marshal a caller-owned buffer through the engine and return a
//!   freshly owned 32-byte [`PowDigest`](neopow_core::PowDigest).
//!
//! ## Crate Policy
//!
//! - Depends only on `neopow-core` internally.
//! - The compute path performs no I/O and no logging; its only side
//!   effect is the returned digest.
//! - Engines hold no shared mutable state: hashing is safe to invoke
//!   concurrently from independent threads without locking.
//! - `unsafe` prohibited.

pub mod engine;
pub mod hasher;

pub use engine::{MixEngine, ScryptEngine};
pub use hasher::{compute_hash, hash_header};
