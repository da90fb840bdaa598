use log::trace;

use crate::compress::{compress_block, HashState};
use crate::digest::Digest;
use crate::error::Result;
use crate::padding::{checked_bit_len, pad, padding_tail};
use crate::variant::{Variant, VariantConfig, SHA256, SHA512};
use crate::word::Word;

/// Largest block of the family (SHA-512), in bytes.
const MAX_BLOCK_LEN: usize = 128;

/// Incremental hashing over one variant's configuration.
///
/// Input is compressed as soon as a whole block is available; at most one
/// partial block is buffered between calls to `update`.
#[derive(Clone)]
pub struct Engine<W: Word> {
    config: &'static VariantConfig<W>,
    state: HashState<W>,
    buffer: [u8; MAX_BLOCK_LEN],
    buffered: usize,
    len: u128,
}

impl<W: Word> Engine<W> {
    pub fn new(config: &'static VariantConfig<W>) -> Self {
        Engine {
            config,
            state: HashState::new(config),
            buffer: [0u8; MAX_BLOCK_LEN],
            buffered: 0,
            len: 0,
        }
    }

    pub fn update(&mut self, mut data: &[u8]) -> Result<()> {
        // Saturated totals are far past every length field and still fail below.
        let len = self.len.saturating_add(data.len() as u128);
        checked_bit_len(len, self.config)?;
        self.len = len;

        let block_len = self.config.block_len;

        if self.buffered > 0 {
            let take = (block_len - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < block_len {
                return Ok(());
            }
            compress_block(&mut self.state, &self.buffer[..block_len], self.config)?;
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(block_len);
        for block in &mut blocks {
            compress_block(&mut self.state, block, self.config)?;
        }

        let remainder = blocks.remainder();
        self.buffer[..remainder.len()].copy_from_slice(remainder);
        self.buffered = remainder.len();

        Ok(())
    }

    pub fn finalize(mut self) -> Result<Digest> {
        let tail = padding_tail(&self.buffer[..self.buffered], self.len, self.config)?;
        for block in tail.chunks_exact(self.config.block_len) {
            compress_block(&mut self.state, block, self.config)?;
        }

        trace!(
            "finalized {} digest over {} bytes",
            self.config.variant,
            self.len
        );

        Ok(Digest::assemble(&self.state, self.config))
    }

    pub fn reset(&mut self) {
        *self = Engine::new(self.config);
    }

    pub fn bytes_processed(&self) -> u128 {
        self.len
    }
}

/// A hasher for any supported variant.
#[derive(Clone)]
pub enum Hasher {
    Sha256(Engine<u32>),
    Sha512(Engine<u64>),
}

impl Hasher {
    pub fn new(variant: Variant) -> Self {
        match variant {
            Variant::Sha256 => Hasher::Sha256(Engine::new(&SHA256)),
            Variant::Sha512 => Hasher::Sha512(Engine::new(&SHA512)),
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Hasher::Sha256(_) => Variant::Sha256,
            Hasher::Sha512(_) => Variant::Sha512,
        }
    }

    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        match self {
            Hasher::Sha256(engine) => engine.update(data),
            Hasher::Sha512(engine) => engine.update(data),
        }
    }

    pub fn finalize(self) -> Result<Digest> {
        match self {
            Hasher::Sha256(engine) => engine.finalize(),
            Hasher::Sha512(engine) => engine.finalize(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Hasher::Sha256(engine) => engine.reset(),
            Hasher::Sha512(engine) => engine.reset(),
        }
    }

    pub fn bytes_processed(&self) -> u128 {
        match self {
            Hasher::Sha256(engine) => engine.bytes_processed(),
            Hasher::Sha512(engine) => engine.bytes_processed(),
        }
    }
}

opaque_debug::implement!(Hasher);

/// Hashes `message` with `variant`.
pub fn hash(message: &[u8], variant: Variant) -> Result<Digest> {
    match variant {
        Variant::Sha256 => hash_with(message, &SHA256),
        Variant::Sha512 => hash_with(message, &SHA512),
    }
}

/// Pads the whole message up front, then compresses its blocks in order.
pub fn hash_with<W: Word>(message: &[u8], config: &VariantConfig<W>) -> Result<Digest> {
    let padded = pad(message, config)?;

    let mut state = HashState::new(config);
    for block in padded.blocks() {
        compress_block(&mut state, block, config)?;
    }

    Ok(Digest::assemble(&state, config))
}

pub fn sha256(message: &[u8]) -> Result<[u8; 32]> {
    let mut out = [0u8; 32];
    out.copy_from_slice(hash(message, Variant::Sha256)?.as_bytes());
    Ok(out)
}

pub fn sha512(message: &[u8]) -> Result<[u8; 64]> {
    let mut out = [0u8; 64];
    out.copy_from_slice(hash(message, Variant::Sha512)?.as_bytes());
    Ok(out)
}
