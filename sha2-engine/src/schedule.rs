use anyhow::ensure;

use crate::consts::{BLOCK_WORDS, MAX_ROUNDS};
use crate::error::{Error, Result};
use crate::variant::VariantConfig;
use crate::word::Word;

/// The per-block expansion consumed one word per compression round.
#[derive(Clone, Copy, Debug)]
pub struct MessageSchedule<W: Word> {
    words: [W; MAX_ROUNDS],
    len: usize,
}

impl<W: Word> MessageSchedule<W> {
    /// Reads the block's sixteen big-endian words and extends them to the
    /// variant's schedule length.
    pub fn expand(block: &[u8], config: &VariantConfig<W>) -> Result<Self> {
        config.check_geometry()?;
        ensure!(
            block.len() == config.block_len,
            Error::InternalArithmeticFault("block length does not match the variant")
        );

        let len = config.rounds();
        let mut words = [W::default(); MAX_ROUNDS];
        W::read_be_into(block, &mut words[..BLOCK_WORDS]);

        let sigma = &config.sigma;
        for i in BLOCK_WORDS..len {
            let s0 = words[i - 15].small_sigma(sigma.small0);
            let s1 = words[i - 2].small_sigma(sigma.small1);
            words[i] = words[i - 16]
                .add_mod(s0)
                .add_mod(words[i - 7])
                .add_mod(s1);
        }

        Ok(MessageSchedule { words, len })
    }

    pub fn words(&self) -> &[W] {
        &self.words[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::padding::pad;
    use crate::variant::{SHA256, SHA512};

    #[test]
    fn test_abc_schedule() {
        let padded = pad(b"abc", &SHA256).expect("pad failed");
        let block = padded.blocks().next().expect("no block");
        let schedule = MessageSchedule::expand(block, &SHA256).expect("expand failed");
        let w = schedule.words();

        assert_eq!(w.len(), 64);
        assert_eq!(w[0], 0x61626380);
        assert_eq!(w[15], 0x00000018);
        // Published intermediate values for "abc".
        assert_eq!(w[16], 0x61626380);
        assert_eq!(w[17], 0x000f0000);
        assert_eq!(w[18], 0x7da86405);
    }

    #[test]
    fn test_sha512_schedule_length() {
        let padded = pad(b"", &SHA512).expect("pad failed");
        let block = padded.blocks().next().expect("no block");
        let schedule = MessageSchedule::expand(block, &SHA512).expect("expand failed");

        assert_eq!(schedule.words().len(), 80);
        assert_eq!(schedule.words()[0], 0x8000_0000_0000_0000);
        // With only the leading bit set, w[16] = w[0] + σ0(w[1]) + w[9] + σ1(w[14]).
        assert_eq!(schedule.words()[16], 0x8000_0000_0000_0000);
    }

    #[test]
    fn test_short_block_is_rejected() {
        let err = MessageSchedule::expand(&[0u8; 63], &SHA256).expect_err("should fail");
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::InternalArithmeticFault(_))
        ));
    }
}
