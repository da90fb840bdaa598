use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use anyhow::ensure;

use crate::consts::{BLOCK_WORDS, H256, H512, K32, K64, MAX_ROUNDS, STATE_LEN};
use crate::error::{Error, Result};
use crate::word::{SigmaParams, Word};

/// Selects a member of the SHA-2 family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variant {
    Sha256,
    Sha512,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::Sha256, Variant::Sha512];

    /// Digest size in bits.
    pub fn bits(self) -> u32 {
        match self {
            Variant::Sha256 => 256,
            Variant::Sha512 => 512,
        }
    }

    /// Digest size in bytes.
    pub fn digest_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// Block size in bytes.
    pub fn block_len(self) -> usize {
        match self {
            Variant::Sha256 => SHA256.block_len,
            Variant::Sha512 => SHA512.block_len,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Variant::Sha256 => "sha256",
            Variant::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts `sha256`, `SHA-256`, `sha_512`, `512` and similar spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "sha256" | "256" => Ok(Variant::Sha256),
            "sha512" | "512" => Ok(Variant::Sha512),
            _ => Err(Error::InvalidVariant(s.to_string())),
        }
    }
}

impl TryFrom<u32> for Variant {
    type Error = Error;

    fn try_from(bits: u32) -> Result<Self, Self::Error> {
        match bits {
            256 => Ok(Variant::Sha256),
            512 => Ok(Variant::Sha512),
            other => Err(Error::InvalidVariant(other.to_string())),
        }
    }
}

/// Every constant that distinguishes one member of the family from another.
///
/// The word width comes from `W`; everything else is a plain table so that
/// both variants run through the same compression code. Only [`SHA256`] and
/// [`SHA512`] exist; the tables cannot be assembled outside this crate.
///
/// ```compile_fail
/// use sha2_engine::{VariantConfig, SHA256};
///
/// let wide = VariantConfig::<u32> {
///     block_len: 128,
///     ..SHA256
/// };
/// ```
#[derive(Debug)]
pub struct VariantConfig<W: Word> {
    pub(crate) variant: Variant,
    /// Block size in bytes.
    pub(crate) block_len: usize,
    /// Width in bytes of the trailing message-length field.
    pub(crate) length_field_len: usize,
    pub(crate) sigma: SigmaParams,
    pub(crate) iv: [W; STATE_LEN],
    /// One constant per round; its length is the schedule length.
    pub(crate) k: &'static [W],
}

impl<W: Word> VariantConfig<W> {
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Block size in bytes.
    pub fn block_len(&self) -> usize {
        self.block_len
    }

    /// Width in bytes of the trailing message-length field.
    pub fn length_field_len(&self) -> usize {
        self.length_field_len
    }

    pub fn sigma(&self) -> &SigmaParams {
        &self.sigma
    }

    pub fn iv(&self) -> &[W; STATE_LEN] {
        &self.iv
    }

    /// Round constants, one per schedule word.
    pub fn k(&self) -> &[W] {
        self.k
    }

    pub fn word_bits(&self) -> u32 {
        W::BITS
    }

    pub fn block_bits(&self) -> usize {
        self.block_len * 8
    }

    pub fn length_field_bits(&self) -> u32 {
        (self.length_field_len * 8) as u32
    }

    pub fn rounds(&self) -> usize {
        self.k.len()
    }

    pub fn digest_len(&self) -> usize {
        STATE_LEN * W::BYTES
    }

    /// Fails unless the table fits the fixed-size buffers of the engine.
    pub(crate) fn check_geometry(&self) -> Result<()> {
        ensure!(
            self.block_len == BLOCK_WORDS * W::BYTES,
            Error::InternalArithmeticFault("block length does not match the word width")
        );
        ensure!(
            self.length_field_len <= 16 && self.length_field_len < self.block_len,
            Error::InternalArithmeticFault("length field does not fit a block")
        );
        ensure!(
            (BLOCK_WORDS..=MAX_ROUNDS).contains(&self.rounds()),
            Error::InternalArithmeticFault("round count outside the schedule bounds")
        );
        Ok(())
    }
}

pub static SHA256: VariantConfig<u32> = VariantConfig {
    variant: Variant::Sha256,
    block_len: 64,
    length_field_len: 8,
    sigma: SigmaParams {
        big0: [2, 13, 22],
        big1: [6, 11, 25],
        small0: ([7, 18], 3),
        small1: ([17, 19], 10),
    },
    iv: H256,
    k: &K32,
};

pub static SHA512: VariantConfig<u64> = VariantConfig {
    variant: Variant::Sha512,
    block_len: 128,
    length_field_len: 16,
    sigma: SigmaParams {
        big0: [28, 34, 39],
        big1: [14, 18, 41],
        small0: ([1, 8], 7),
        small1: ([19, 61], 6),
    },
    iv: H512,
    k: &K64,
};
