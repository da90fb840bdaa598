use std::fmt;
use std::mem;

use anyhow::ensure;
use log::debug;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{Error, Result};

/// `(e, n)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub e: BigUint,
    pub n: BigUint,
}

/// `(d, n)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    pub d: BigUint,
    pub n: BigUint,
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

/// Derives a key pair from the primes `p` and `q`.
///
/// `e` is the largest value below `φ(n)` that is coprime to it, found by
/// counting down; `d` is its inverse modulo `φ(n)`. The primes are taken on
/// trust.
pub fn generate_keys(p: &BigUint, q: &BigUint) -> Result<(PublicKey, PrivateKey)> {
    let two = BigUint::from(2u8);
    let degenerate = || Error::DegenerateModulus {
        p: p.clone(),
        q: q.clone(),
    };
    ensure!(p >= &two && q >= &two && p != q, degenerate());

    let n = p * q;
    let phi = (p - 1u32) * (q - 1u32);
    ensure!(phi > two, degenerate());

    let mut e = &phi - 1u32;
    while !e.gcd(&phi).is_one() {
        e -= 1u32;
    }

    let d = mod_inverse(&e, &phi)?;
    debug!("generated rsa keys with a {} bit modulus", n.bits());

    Ok((PublicKey { e, n: n.clone() }, PrivateKey { d, n }))
}

/// The inverse of `value` modulo `modulus`, by the extended Euclidean
/// algorithm.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let no_inverse = || Error::NoInverse {
        value: value.clone(),
        modulus: modulus.clone(),
    };
    ensure!(!modulus.is_zero(), no_inverse());

    let m = BigInt::from(modulus.clone());
    let (mut old_r, mut r) = (BigInt::from(value.clone()), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    while !r.is_zero() {
        let quotient = &old_r / &r;

        let next_r = &old_r - &quotient * &r;
        old_r = mem::replace(&mut r, next_r);

        let next_s = &old_s - &quotient * &s;
        old_s = mem::replace(&mut s, next_s);
    }

    ensure!(old_r.is_one(), no_inverse());

    old_s.mod_floor(&m).to_biguint().ok_or_else(|| no_inverse().into())
}
