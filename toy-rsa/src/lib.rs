//! Textbook RSA: key generation from two given primes, and raw modular
//! exponentiation for encryption and decryption.
//!
//! There is no primality testing, no padding scheme and no side-channel
//! protection. Do not use this for anything but illustration.

#![deny(clippy::all, clippy::perf, clippy::correctness, rust_2018_idioms)]
#![warn(clippy::unwrap_used)]

mod cipher;
mod error;
mod keys;

pub use cipher::{decrypt, encrypt};
pub use error::{Error, Result};
pub use keys::{generate_keys, mod_inverse, PrivateKey, PublicKey};
pub use num_bigint::BigUint;
