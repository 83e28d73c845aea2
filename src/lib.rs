//! # binary-ecc - Elliptic Curve Cryptography over GF(2^4)
//!
//! A small library demonstrating elliptic-curve cryptography over the binary
//! extension field GF(2^4). It is a teaching toolkit, not a hardened
//! cryptographic library: the field is tiny, scalars are plain integers, and
//! nothing is constant-time.
//!
//! ## Features
//!
//! - **Field Arithmetic**: GF(2^4) with addition = XOR and multiplication
//!   modulo x^4 + x + 1, plus a precomputed inverse table
//! - **Binary Curves**: the characteristic-2 group law (addition, doubling,
//!   negation, identity) on y² + xy = x³ + ax² + b
//! - **Scalar Multiplication**: double-and-add in both bit-traversal orders
//! - **ElGamal Encryption**: point-based encryption and decryption
//! - **Subgroup Analysis**: point order and generator detection
//!
//! ## Quick Start
//!
//! ```rust
//! use binary_ecc::{BinaryCurve, Gf16};
//!
//! // The 22-element curve group y² + xy = x³ + 0b1000·x² + 0b1001
//! let curve = BinaryCurve::new(Gf16::new(0b1000), Gf16::new(0b1001));
//!
//! let p = curve.point(Gf16::new(0b0101), Gf16::new(0b0000)).unwrap();
//! let q = curve.scalar_mul(7, &p);
//! assert_eq!(q, curve.point(Gf16::new(0b0010), Gf16::new(0b1101)).unwrap());
//!
//! // P generates the whole group
//! let report = curve.analyze_subgroup(&p, 30).unwrap();
//! assert!(report.is_generator);
//! ```
//!
//! ## Module Overview
//!
//! - [`gf16`] - GF(2^4) field arithmetic and the inverse table
//! - [`curve`] - binary elliptic curve points and the group law
//! - [`scalar`] - double-and-add scalar multiplication strategies
//! - [`elgamal`] - ElGamal-style encryption on the curve group
//! - [`order`] - cyclic subgroup order and generator detection
//! - [`error`] - the shared error type

pub mod curve;
pub mod elgamal;
pub mod error;
pub mod gf16;
pub mod order;
pub mod scalar;

// Re-export commonly used types for convenience
pub use curve::{BinaryCurve, CurvePoint};
pub use elgamal::{CipherText, ElGamal, KeyPair};
pub use error::CurveError;
pub use gf16::{inverse_table, Gf16};
pub use order::OrderReport;
pub use scalar::BitOrder;
