pub use anyhow::Result;

/// Custom error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// `bytes` is the attempted total, saturating at `u128::MAX`.
    #[error("input of {bytes} bytes overflows the {limit_bits}-bit length field")]
    InputTooLarge { bytes: u128, limit_bits: u32 },
    #[error("unsupported hash variant: {}", _0)]
    InvalidVariant(String),
    #[error("internal arithmetic fault: {}", _0)]
    InternalArithmeticFault(&'static str),
    #[error("invalid digest encoding: {}", _0)]
    InvalidDigest(String),
}
