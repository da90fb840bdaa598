use std::fmt::{self, Debug, Display, Formatter};
use std::str::FromStr;

use anyhow::ensure;

use crate::compress::HashState;
use crate::error::{Error, Result};
use crate::variant::{Variant, VariantConfig};
use crate::word::Word;

/// Largest digest of the family (SHA-512), in bytes.
pub const MAX_DIGEST_LEN: usize = 64;

/// The final hash value: the state words concatenated big-endian.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Digest {
    variant: Variant,
    bytes: [u8; MAX_DIGEST_LEN],
}

impl Digest {
    /// Serializes a final hash state.
    pub fn assemble<W: Word>(state: &HashState<W>, config: &VariantConfig<W>) -> Self {
        let mut bytes = [0u8; MAX_DIGEST_LEN];
        W::write_be_into(state.words(), &mut bytes[..config.digest_len()]);

        Digest {
            variant: config.variant,
            bytes,
        }
    }

    /// Parses a hex rendering produced by `variant`.
    pub fn from_hex(variant: Variant, s: &str) -> Result<Self> {
        let raw = hex::decode(s.trim()).map_err(|err| Error::InvalidDigest(err.to_string()))?;
        Self::from_slice(variant, &raw)
    }

    pub fn from_slice(variant: Variant, raw: &[u8]) -> Result<Self> {
        ensure!(
            raw.len() == variant.digest_len(),
            Error::InvalidDigest(format!(
                "{} digests are {} bytes, got {}",
                variant,
                variant.digest_len(),
                raw.len()
            ))
        );

        let mut bytes = [0u8; MAX_DIGEST_LEN];
        bytes[..raw.len()].copy_from_slice(raw);
        Ok(Digest { variant, bytes })
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.variant.digest_len()]
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Display for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for Digest {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({}:{})", self.variant, self.to_hex())
    }
}

impl FromStr for Digest {
    type Err = Error;

    /// Infers the variant from the length of the hex string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let variant = Variant::ALL
            .iter()
            .copied()
            .find(|v| v.digest_len() * 2 == s.len())
            .ok_or_else(|| Error::InvalidDigest(format!("unexpected hex length {}", s.len())))?;

        Digest::from_hex(variant, s).map_err(|err| match err.downcast::<Error>() {
            Ok(err) => err,
            Err(err) => Error::InvalidDigest(err.to_string()),
        })
    }
}
