use std::fmt::{Debug, LowerHex};
use std::ops::{BitAnd, BitXor, Not};

use byteorder::{BigEndian, ByteOrder};

/// Rotation and shift amounts of the four mixing functions.
///
/// `Σ0`/`Σ1` are three right-rotations each, used by the compression rounds.
/// `σ0`/`σ1` are two right-rotations and one right-shift each, used by the
/// message schedule expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SigmaParams {
    pub big0: [u32; 3],
    pub big1: [u32; 3],
    pub small0: ([u32; 2], u32),
    pub small1: ([u32; 2], u32),
}

/// A machine word of the SHA-2 family.
///
/// All arithmetic is unsigned and reduced modulo `2^BITS`. Rotations and
/// shifts never leave the word width; every amount must be below `BITS`.
pub trait Word:
    Copy
    + Default
    + Eq
    + Debug
    + LowerHex
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + 'static
{
    const BITS: u32;
    const BYTES: usize;

    /// Reads one big-endian word from exactly `BYTES` bytes.
    fn read_be(src: &[u8]) -> Self;

    /// Fills `dst` with big-endian words; `src.len()` must be `dst.len() * BYTES`.
    fn read_be_into(src: &[u8], dst: &mut [Self]);

    /// Writes `src` as consecutive big-endian words into `dst`.
    fn write_be_into(src: &[Self], dst: &mut [u8]);

    fn add_mod(self, rhs: Self) -> Self;

    fn rotr(self, n: u32) -> Self;

    fn shr(self, n: u32) -> Self;

    #[inline]
    fn big_sigma(self, rotations: [u32; 3]) -> Self {
        self.rotr(rotations[0]) ^ self.rotr(rotations[1]) ^ self.rotr(rotations[2])
    }

    #[inline]
    fn small_sigma(self, (rotations, shift): ([u32; 2], u32)) -> Self {
        self.rotr(rotations[0]) ^ self.rotr(rotations[1]) ^ self.shr(shift)
    }

    /// `e` chooses between `f` and `g` bit by bit.
    #[inline]
    fn ch(self, f: Self, g: Self) -> Self {
        (self & f) ^ (!self & g)
    }

    /// Bitwise majority of three words.
    #[inline]
    fn maj(self, b: Self, c: Self) -> Self {
        (self & b) ^ (self & c) ^ (b & c)
    }
}

macro_rules! impl_word {
    ($ty:ty, $read:ident, $read_into:ident, $write_into:ident) => {
        impl Word for $ty {
            const BITS: u32 = <$ty>::BITS;
            const BYTES: usize = std::mem::size_of::<$ty>();

            #[inline]
            fn read_be(src: &[u8]) -> Self {
                BigEndian::$read(src)
            }

            #[inline]
            fn read_be_into(src: &[u8], dst: &mut [Self]) {
                BigEndian::$read_into(src, dst)
            }

            #[inline]
            fn write_be_into(src: &[Self], dst: &mut [u8]) {
                BigEndian::$write_into(src, dst)
            }

            #[inline]
            fn add_mod(self, rhs: Self) -> Self {
                self.wrapping_add(rhs)
            }

            #[inline]
            fn rotr(self, n: u32) -> Self {
                debug_assert!(n < Self::BITS);
                self.rotate_right(n)
            }

            #[inline]
            fn shr(self, n: u32) -> Self {
                debug_assert!(n < Self::BITS);
                self >> n
            }
        }
    };
}

impl_word!(u32, read_u32, read_u32_into, write_u32_into);
impl_word!(u64, read_u64, read_u64_into, write_u64_into);
