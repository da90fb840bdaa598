use pretty_assertions::assert_eq;
use rand::{Rng, RngCore, SeedableRng};
use rand_xorshift::XorShiftRng;
use sha2::Digest as _;
use sha2_engine::{hash, hash_many, Hasher, Variant};

const TEST_SEED: [u8; 16] = [
    0x59, 0x62, 0xbe, 0x5d, 0x76, 0x3d, 0x31, 0x8d, 0x17, 0xdb, 0x37, 0x32, 0x54, 0x06, 0xbc, 0xe5,
];

fn hex_digest(message: &[u8], variant: Variant) -> String {
    hash(message, variant).expect("hash failed").to_hex()
}

fn reference(message: &[u8], variant: Variant) -> Vec<u8> {
    match variant {
        Variant::Sha256 => sha2::Sha256::digest(message).to_vec(),
        Variant::Sha512 => sha2::Sha512::digest(message).to_vec(),
    }
}

#[test]
fn test_sha256_known_vectors() {
    assert_eq!(
        hex_digest(b"", Variant::Sha256),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex_digest(b"abc", Variant::Sha256),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    // 56 bytes: the padding spills into a second block.
    assert_eq!(
        hex_digest(
            b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            Variant::Sha256
        ),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn test_sha512_known_vectors() {
    assert_eq!(
        hex_digest(b"", Variant::Sha512),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
    assert_eq!(
        hex_digest(b"abc", Variant::Sha512),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
    // 112 bytes: the padding spills into a second block.
    assert_eq!(
        hex_digest(
            b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmnhijklmno\
              ijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu",
            Variant::Sha512
        ),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
}

#[test]
fn test_million_a() {
    fil_logger::maybe_init();

    let mut sha256 = Hasher::new(Variant::Sha256);
    let mut sha512 = Hasher::new(Variant::Sha512);
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        sha256.update(&chunk).expect("update failed");
        sha512.update(&chunk).expect("update failed");
    }

    assert_eq!(
        sha256.finalize().expect("finalize failed").to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
    assert_eq!(
        sha512.finalize().expect("finalize failed").to_hex(),
        "e718483d0ce769644e2e42c7bc15b4638e1f98b13b2044285632a803afa973eb\
         de0ff244877ea60a4cb0432ce577c31beb009c5c2c49aa2e4eadb217ad8cc09b"
    );
}

#[test]
fn test_text_is_hashed_as_utf8_bytes() {
    // Multi-byte characters contribute every one of their bytes.
    let text = "h\u{e9}llo w\u{f6}rld \u{2603}";
    assert_eq!(text.len(), 17);
    for variant in Variant::ALL.iter().copied() {
        assert_eq!(
            hash(text.as_bytes(), variant).expect("hash failed").as_bytes(),
            &reference(text.as_bytes(), variant)[..]
        );
    }
}

#[test]
fn test_block_boundaries_match_reference() {
    for variant in Variant::ALL.iter().copied() {
        let block = variant.block_len();
        let length_field = if variant == Variant::Sha256 { 8 } else { 16 };
        let lengths = [
            0,
            1,
            block - length_field - 2,
            // One byte short of needing an extra padding block.
            block - length_field - 1,
            block - length_field,
            block - 1,
            // Exactly one block: a full extra padding block follows.
            block,
            block + 1,
            2 * block,
        ];

        for len in lengths.iter().copied() {
            let message = (0..len).map(|i| (i * 7) as u8).collect::<Vec<_>>();
            assert_eq!(
                hash(&message, variant).expect("hash failed").as_bytes(),
                &reference(&message, variant)[..],
                "{} mismatch at {} bytes",
                variant,
                len
            );
        }
    }
}

#[test]
fn test_random_messages_match_reference() {
    let rng = &mut XorShiftRng::from_seed(TEST_SEED);

    for variant in Variant::ALL.iter().copied() {
        for _ in 0..200 {
            let len = rng.gen_range(0..4 * variant.block_len() + 3);
            let mut message = vec![0u8; len];
            rng.fill_bytes(&mut message);

            assert_eq!(
                hash(&message, variant).expect("hash failed").as_bytes(),
                &reference(&message, variant)[..]
            );
        }
    }
}

#[test]
fn test_batch_matches_reference() {
    fil_logger::maybe_init();

    let rng = &mut XorShiftRng::from_seed(TEST_SEED);
    let messages = (0..32)
        .map(|_| {
            let mut message = vec![0u8; rng.gen_range(0..1024)];
            rng.fill_bytes(&mut message);
            message
        })
        .collect::<Vec<_>>();

    let digests = hash_many(&messages, Variant::Sha512).expect("batch failed");
    for (message, digest) in messages.iter().zip(digests.iter()) {
        assert_eq!(digest.as_bytes(), &reference(message, Variant::Sha512)[..]);
    }
}
