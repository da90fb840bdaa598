use anyhow::ensure;

use crate::error::{Error, Result};
use crate::variant::VariantConfig;
use crate::word::Word;

/// A message padded to a whole number of blocks.
///
/// The full blocks of the original message are borrowed as-is; only the
/// final one or two blocks, which hold the leftover bytes, the `1` bit, the
/// zero fill and the length field, are owned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedMessage<'a> {
    body: &'a [u8],
    tail: Vec<u8>,
    block_len: usize,
    length_field_len: usize,
}

impl<'a> PaddedMessage<'a> {
    /// Iterates over the padded stream one block at a time, in order.
    pub fn blocks(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.body
            .chunks_exact(self.block_len)
            .chain(self.tail.chunks_exact(self.block_len))
    }

    pub fn block_count(&self) -> usize {
        self.byte_len() / self.block_len
    }

    pub fn byte_len(&self) -> usize {
        self.body.len() + self.tail.len()
    }

    pub fn bit_len(&self) -> u128 {
        self.byte_len() as u128 * 8
    }

    /// Decodes the trailing length field.
    pub fn encoded_bit_len(&self) -> u128 {
        let field = &self.tail[self.tail.len() - self.length_field_len..];
        field
            .iter()
            .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte))
    }

    /// Materializes the whole padded stream.
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.byte_len());
        out.extend_from_slice(self.body);
        out.extend_from_slice(&self.tail);
        out
    }
}

/// Pads `message` for hashing with `config`.
pub fn pad<'a, W: Word>(
    message: &'a [u8],
    config: &VariantConfig<W>,
) -> Result<PaddedMessage<'a>> {
    config.check_geometry()?;
    let split = message.len() - message.len() % config.block_len;
    let (body, remainder) = message.split_at(split);
    let tail = padding_tail(remainder, message.len() as u128, config)?;

    Ok(PaddedMessage {
        body,
        tail,
        block_len: config.block_len,
        length_field_len: config.length_field_len,
    })
}

/// Builds the final blocks of a message of `total_len` bytes whose last
/// `remainder` bytes did not fill a block.
pub fn padding_tail<W: Word>(
    remainder: &[u8],
    total_len: u128,
    config: &VariantConfig<W>,
) -> Result<Vec<u8>> {
    config.check_geometry()?;
    let block_len = config.block_len;
    let field_len = config.length_field_len;
    ensure!(
        remainder.len() < block_len,
        Error::InternalArithmeticFault("padding remainder spans a whole block")
    );

    let bit_len = checked_bit_len(total_len, config)?;

    // One byte for the `1` bit, then the length field, must fit after the
    // leftover bytes, otherwise the padding spills into a second block.
    let blocks = if remainder.len() + 1 + field_len <= block_len {
        1
    } else {
        2
    };

    let mut tail = vec![0u8; blocks * block_len];
    tail[..remainder.len()].copy_from_slice(remainder);
    tail[remainder.len()] = 0b1000_0000;

    let end = tail.len();
    tail[end - field_len..].copy_from_slice(&bit_len.to_be_bytes()[16 - field_len..]);

    ensure!(
        tail.len() % block_len == 0,
        Error::InternalArithmeticFault("padded tail is not block aligned")
    );

    Ok(tail)
}

/// Converts a byte count to the bit count stored in the length field,
/// failing when it cannot be represented there.
pub(crate) fn checked_bit_len<W: Word>(
    total_len: u128,
    config: &VariantConfig<W>,
) -> Result<u128> {
    let limit_bits = config.length_field_bits();
    let too_large = Error::InputTooLarge {
        bytes: total_len,
        limit_bits,
    };

    let bits = match total_len.checked_mul(8) {
        Some(bits) => bits,
        None => return Err(too_large.into()),
    };
    ensure!(limit_bits >= 128 || bits >> limit_bits == 0, too_large);

    Ok(bits)
}
