use crate::consts::STATE_LEN;
use crate::error::Result;
use crate::schedule::MessageSchedule;
use crate::variant::VariantConfig;
use crate::word::{SigmaParams, Word};

/// The running digest accumulator `h0..h7`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState<W: Word>([W; STATE_LEN]);

impl<W: Word> HashState<W> {
    pub fn new(config: &VariantConfig<W>) -> Self {
        HashState(config.iv)
    }

    pub fn words(&self) -> &[W; STATE_LEN] {
        &self.0
    }

    /// Adds the compressed block into the state. Called exactly once per
    /// block, after its last round.
    pub fn accumulate(&mut self, vars: &WorkingVariables<W>) {
        for (h, v) in self.0.iter_mut().zip(vars.0.iter()) {
            *h = h.add_mod(*v);
        }
    }
}

/// The eight round registers `a..h` of a single block compression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkingVariables<W: Word>([W; STATE_LEN]);

impl<W: Word> WorkingVariables<W> {
    pub fn seed(state: &HashState<W>) -> Self {
        WorkingVariables(state.0)
    }

    pub fn words(&self) -> &[W; STATE_LEN] {
        &self.0
    }

    /// One compression round with round constant `k` and schedule word `w`.
    #[inline]
    pub fn round(&mut self, k: W, w: W, sigma: &SigmaParams) {
        let [a, b, c, d, e, f, g, h] = self.0;

        let temp1 = h
            .add_mod(e.big_sigma(sigma.big1))
            .add_mod(e.ch(f, g))
            .add_mod(k)
            .add_mod(w);
        let temp2 = a.big_sigma(sigma.big0).add_mod(a.maj(b, c));

        self.0 = [temp1.add_mod(temp2), a, b, c, d.add_mod(temp1), e, f, g];
    }
}

/// Runs every round of one block over `state`, then accumulates.
pub fn compress<W: Word>(
    state: &mut HashState<W>,
    schedule: &MessageSchedule<W>,
    config: &VariantConfig<W>,
) {
    let mut vars = WorkingVariables::seed(state);
    for (k, w) in config.k.iter().zip(schedule.words()) {
        vars.round(*k, *w, &config.sigma);
    }
    state.accumulate(&vars);
}

/// Expands and compresses a single block.
pub fn compress_block<W: Word>(
    state: &mut HashState<W>,
    block: &[u8],
    config: &VariantConfig<W>,
) -> Result<()> {
    let schedule = MessageSchedule::expand(block, config)?;
    compress(state, &schedule, config);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::padding::pad;
    use crate::variant::SHA256;

    #[test]
    fn test_first_round_of_abc() {
        let padded = pad(b"abc", &SHA256).expect("pad failed");
        let block = padded.blocks().next().expect("no block");
        let schedule = MessageSchedule::expand(block, &SHA256).expect("expand failed");

        let state = HashState::new(&SHA256);
        let mut vars = WorkingVariables::seed(&state);
        vars.round(SHA256.k[0], schedule.words()[0], &SHA256.sigma);

        // Published register values after round 0.
        assert_eq!(
            vars.words(),
            &[
                0x5d6aebcd, 0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xfa2a4622, 0x510e527f,
                0x9b05688c, 0x1f83d9ab
            ]
        );
    }

    #[test]
    fn test_abc_single_block_state() {
        let padded = pad(b"abc", &SHA256).expect("pad failed");
        let mut state = HashState::new(&SHA256);
        for block in padded.blocks() {
            compress_block(&mut state, block, &SHA256).expect("compress failed");
        }

        assert_eq!(
            state.words(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c,
                0xb410ff61, 0xf20015ad
            ]
        );
    }

    #[test]
    fn test_accumulate_wraps() {
        let mut state = HashState::new(&SHA256);
        let vars = WorkingVariables([u32::MAX; STATE_LEN]);
        state.accumulate(&vars);

        let expected = SHA256.iv.map(|h| h.wrapping_sub(1));
        assert_eq!(state.words(), &expected);
    }
}
