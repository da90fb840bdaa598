//! A portable implementation of the [SHA-2][1] hash functions SHA-256 and
//! SHA-512, built on one engine parameterized by a per-variant constant table.
//!
//! ```
//! use sha2_engine::{hash, Variant};
//!
//! let digest = hash(b"abc", Variant::Sha256).expect("hash failed");
//! assert_eq!(
//!     digest.to_hex(),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/SHA-2

#![deny(clippy::all, clippy::perf, clippy::correctness, rust_2018_idioms)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]
#![warn(clippy::unwrap_used)]

pub mod batch;
pub mod compress;
pub mod consts;
pub mod digest;
pub mod error;
pub mod padding;
pub mod schedule;
pub mod variant;
pub mod word;

mod hasher;

pub use batch::hash_many;
pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::{hash, hash_with, sha256, sha512, Engine, Hasher};
pub use padding::{pad, PaddedMessage};
pub use variant::{Variant, VariantConfig, SHA256, SHA512};
pub use word::{SigmaParams, Word};
