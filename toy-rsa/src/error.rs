use num_bigint::BigUint;

pub use anyhow::Result;

/// Custom error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("p = {p} and q = {q} do not yield a usable modulus")]
    DegenerateModulus { p: BigUint, q: BigUint },
    #[error("value {value} is not below the modulus {modulus}")]
    MessageOutOfRange { value: BigUint, modulus: BigUint },
    #[error("{value} has no inverse modulo {modulus}")]
    NoInverse { value: BigUint, modulus: BigUint },
}
