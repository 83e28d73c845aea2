//! Binary field GF(2^4) arithmetic
//!
//! Elements are degree-<4 polynomials over F_2, stored as the low four bits of
//! a byte (bit i is the coefficient of x^i). Addition is XOR; multiplication
//! is carry-less polynomial multiplication reduced modulo the irreducible
//! polynomial x^4 + x + 1.
//!
//! Inverses come from a table built once by exhaustive search. At 16 elements
//! the O(n^2) search is fine; a larger binary field would switch to the
//! extended Euclidean algorithm over F_2[x].

use crate::error::CurveError;
use once_cell::sync::Lazy;
use std::fmt;
use std::ops::{Add, BitXor, Div, Mul, Neg, Sub};

/// Reduction polynomial x^4 + x + 1
const IRREDUCIBLE: u16 = 0b10011;

/// Extension degree of the field
const DEGREE: usize = 4;

/// An element of GF(2^4)
///
/// The value is always in [0, 15]; constructors mask away the high bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Gf16(u8);

impl Gf16 {
    /// Create an element from the low four bits of `value`
    pub const fn new(value: u8) -> Self {
        Gf16(value & 0x0F)
    }

    /// Additive identity
    pub const fn zero() -> Self {
        Gf16(0)
    }

    /// Multiplicative identity
    pub const fn one() -> Self {
        Gf16(1)
    }

    /// The 4-bit value of this element
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if this is the additive identity
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Multiply two field elements
    ///
    /// Carry-less shift-and-XOR multiplication produces an up-to-8-bit
    /// intermediate, which is then reduced by XOR-ing in the shifted
    /// irreducible polynomial wherever a bit at position >= 4 is set,
    /// from the highest bit down.
    pub fn mul(self, other: Gf16) -> Gf16 {
        let mut product: u16 = 0;

        for i in 0..DEGREE {
            if (other.0 >> i) & 1 == 1 {
                product ^= (self.0 as u16) << i;
            }
        }

        // Modular reduction
        for i in (DEGREE..2 * DEGREE).rev() {
            if (product >> i) & 1 == 1 {
                product ^= IRREDUCIBLE << (i - DEGREE);
            }
        }

        Gf16((product & 0x0F) as u8)
    }

    /// Multiplicative inverse, from the precomputed table
    ///
    /// Returns `CurveError::NoInverse` for the zero element.
    pub fn inv(self) -> Result<Gf16, CurveError> {
        INVERSE_TABLE[self.0 as usize].ok_or(CurveError::NoInverse)
    }
}

/// Inverse of each nonzero element, indexed by element value; entry 0 is `None`
///
/// Built once on first use and read-only afterwards, so concurrent readers
/// need no locking.
static INVERSE_TABLE: Lazy<[Option<Gf16>; 16]> = Lazy::new(build_inverse_table);

/// Build the inverse table by exhaustive search
///
/// For each nonzero `a` the first `b` with `a * b == 1` is recorded. Every
/// nonzero element of a field has exactly one inverse, so the search always
/// succeeds and the table is deterministic.
fn build_inverse_table() -> [Option<Gf16>; 16] {
    let mut table = [None; 16];

    for a in 1..16u8 {
        for b in 1..16u8 {
            if Gf16(a).mul(Gf16(b)) == Gf16::one() {
                table[a as usize] = Some(Gf16(b));
                break;
            }
        }
    }

    table
}

/// The full inverse table, indexed by element value
pub fn inverse_table() -> &'static [Option<Gf16>; 16] {
    &INVERSE_TABLE
}

// Field addition and subtraction are both XOR in characteristic 2.
impl Add for Gf16 {
    type Output = Gf16;

    fn add(self, other: Gf16) -> Gf16 {
        Gf16(self.0 ^ other.0)
    }
}

impl Sub for Gf16 {
    type Output = Gf16;

    fn sub(self, other: Gf16) -> Gf16 {
        Gf16(self.0 ^ other.0)
    }
}

impl BitXor for Gf16 {
    type Output = Gf16;

    fn bitxor(self, other: Gf16) -> Gf16 {
        Gf16(self.0 ^ other.0)
    }
}

impl Mul for Gf16 {
    type Output = Gf16;

    fn mul(self, other: Gf16) -> Gf16 {
        Gf16::mul(self, other)
    }
}

impl Div for Gf16 {
    type Output = Result<Gf16, CurveError>;

    fn div(self, other: Gf16) -> Result<Gf16, CurveError> {
        Ok(self.mul(other.inv()?))
    }
}

impl Neg for Gf16 {
    type Output = Gf16;

    /// Negation is the identity since -x = x in characteristic 2
    fn neg(self) -> Gf16 {
        self
    }
}

impl fmt::Display for Gf16 {
    /// Four binary digits, e.g. `0101`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04b}", self.0)
    }
}
