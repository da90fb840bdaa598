use anyhow::ensure;
use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::keys::{PrivateKey, PublicKey};

/// Computes `message^e mod n`.
pub fn encrypt(message: &BigUint, key: &PublicKey) -> Result<BigUint> {
    modpow_below(message, &key.e, &key.n)
}

/// Computes `ciphertext^d mod n`.
pub fn decrypt(ciphertext: &BigUint, key: &PrivateKey) -> Result<BigUint> {
    modpow_below(ciphertext, &key.d, &key.n)
}

fn modpow_below(value: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    ensure!(
        value < modulus,
        Error::MessageOutOfRange {
            value: value.clone(),
            modulus: modulus.clone(),
        }
    );

    Ok(value.modpow(exponent, modulus))
}
