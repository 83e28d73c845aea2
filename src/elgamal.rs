//! ElGamal-style encryption on the curve group
//!
//! Classic ElGamal with curve-point addition in place of modular
//! multiplication. The shared secret is k·Q = k·d·P = d·(k·P), so the
//! receiver can strip k·Q off C2 without knowing k:
//!
//! - encrypt: C1 = k·P, C2 = M + k·Q
//! - decrypt: M = C2 + (-(d·C1))
//!
//! The ephemeral scalar k is an input; `random_ephemeral` draws one from a
//! caller-supplied RNG, and it must be fresh for each encryption.

use crate::curve::{BinaryCurve, CurvePoint};
use rand::Rng;

/// Ciphertext pair (C1, C2) produced by encryption
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CipherText {
    pub c1: CurvePoint,
    pub c2: CurvePoint,
}

/// Private scalar and the matching public point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: u64,
    pub public_key: CurvePoint,
}

/// Domain parameters for the scheme: the curve and a generator point
#[derive(Clone, Copy, Debug)]
pub struct ElGamal {
    pub curve: BinaryCurve,
    pub generator: CurvePoint,
}

impl ElGamal {
    pub fn new(curve: BinaryCurve, generator: CurvePoint) -> Self {
        Self { curve, generator }
    }

    /// Derive the key pair Q = d·P for a private scalar d
    pub fn keypair(&self, private_key: u64) -> KeyPair {
        KeyPair {
            private_key,
            public_key: self.curve.scalar_mul(private_key, &self.generator),
        }
    }

    /// Draw an ephemeral scalar uniformly from [1, n-1], n the group order
    pub fn random_ephemeral<R: Rng>(&self, rng: &mut R) -> u64 {
        rng.gen_range(1..self.curve.group_order())
    }

    /// Encrypt a message point under a public key with ephemeral scalar k
    pub fn encrypt(&self, message: &CurvePoint, public_key: &CurvePoint, k: u64) -> CipherText {
        let c1 = self.curve.scalar_mul(k, &self.generator);
        let shared = self.curve.scalar_mul(k, public_key);
        let c2 = self.curve.add(message, &shared);
        CipherText { c1, c2 }
    }

    /// Decrypt a ciphertext with the private scalar d
    pub fn decrypt(&self, cipher: &CipherText, private_key: u64) -> CurvePoint {
        let shared = self.curve.scalar_mul(private_key, &cipher.c1);
        self.curve.add(&cipher.c2, &self.curve.negate(&shared))
    }
}
