use std::io::Write;

use anyhow::Result;
use sha2_engine::{hash, Variant};
use toy_rsa::{decrypt, encrypt, generate_keys, BigUint};

/// Prints the SHA-512 digest of `"test"`.
pub fn hash_demo<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", hash(b"test", Variant::Sha512)?)?;
    Ok(())
}

/// Walks through key generation with `p = 37, q = 97` and a round trip of
/// the message `808`, printing each intermediate value.
pub fn rsa_demo<W: Write>(out: &mut W) -> Result<()> {
    let (public, private) = generate_keys(&BigUint::from(37u32), &BigUint::from(97u32))?;
    writeln!(out, "{}", public)?;
    writeln!(out, "{}", private)?;

    let message = BigUint::from(808u32);
    writeln!(out, "{}", message)?;

    let encrypted = encrypt(&message, &public)?;
    writeln!(out, "{}", encrypted)?;

    let decrypted = decrypt(&encrypted, &private)?;
    writeln!(out, "{}", decrypted)?;

    Ok(())
}
