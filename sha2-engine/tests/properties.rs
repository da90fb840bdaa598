use proptest::collection::vec;
use proptest::prelude::*;
use sha2_engine::{hash, pad, Hasher, Variant, SHA256, SHA512};

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::Sha256), Just(Variant::Sha512)]
}

fn bit_distance(a: &[u8], b: &[u8]) -> u32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x ^ y).count_ones()).sum()
}

proptest! {
    #[test]
    fn padded_length_is_block_aligned(message in vec(any::<u8>(), 0..600)) {
        let padded = pad(&message, &SHA256).expect("pad failed");
        prop_assert!(padded.byte_len() > message.len());
        prop_assert_eq!(padded.byte_len() % SHA256.block_len(), 0);
        prop_assert_eq!(padded.encoded_bit_len(), message.len() as u128 * 8);
        let bytes = padded.to_vec();
        prop_assert_eq!(&bytes[..message.len()], &message[..]);

        let padded = pad(&message, &SHA512).expect("pad failed");
        prop_assert!(padded.block_count() >= 1);
        prop_assert_eq!(padded.bit_len() % SHA512.block_bits() as u128, 0);
        prop_assert_eq!(padded.encoded_bit_len(), message.len() as u128 * 8);
    }

    #[test]
    fn digest_length_is_fixed(message in vec(any::<u8>(), 0..400), variant in variant()) {
        let digest = hash(&message, variant).expect("hash failed");
        prop_assert_eq!(digest.as_bytes().len(), variant.digest_len());
        prop_assert_eq!(digest.variant(), variant);
        prop_assert_eq!(digest, hash(&message, variant).expect("hash failed"));
    }

    #[test]
    fn chunked_updates_match_one_shot(
        message in vec(any::<u8>(), 0..700),
        cuts in vec(0usize..700, 0..8),
        variant in variant(),
    ) {
        let mut cuts = cuts
            .into_iter()
            .map(|cut| cut.min(message.len()))
            .collect::<Vec<_>>();
        cuts.sort_unstable();

        let mut hasher = Hasher::new(variant);
        let mut start = 0;
        for cut in cuts.into_iter().chain(std::iter::once(message.len())) {
            hasher.update(&message[start..cut]).expect("update failed");
            start = cut;
        }

        prop_assert_eq!(
            hasher.finalize().expect("finalize failed"),
            hash(&message, variant).expect("hash failed")
        );
    }

    #[test]
    fn single_bit_flip_avalanches(
        message in vec(any::<u8>(), 1..300),
        bit in any::<prop::sample::Index>(),
        variant in variant(),
    ) {
        let mut flipped = message.clone();
        let bit = bit.index(message.len() * 8);
        flipped[bit / 8] ^= 1 << (bit % 8);

        let a = hash(&message, variant).expect("hash failed");
        let b = hash(&flipped, variant).expect("hash failed");
        let out_bits = variant.bits();

        // Half the output bits should flip on average; a quarter is a loose floor.
        prop_assert!(bit_distance(a.as_bytes(), b.as_bytes()) > out_bits / 4);
    }
}
