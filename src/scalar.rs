//! Scalar multiplication by double-and-add
//!
//! Two equivalent bit-traversal orders are exposed so their agreement can be
//! checked: most-significant-bit-first (left-to-right) and
//! least-significant-bit-first (right-to-left). Both satisfy `0·P = O`
//! explicitly; the left-to-right loop alone would fall out with `P` for a
//! zero scalar, which is wrong.

use crate::curve::{BinaryCurve, CurvePoint};

/// Bit-traversal order for double-and-add
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitOrder {
    /// Left-to-right: start from the point, double then conditionally add
    MsbFirst,
    /// Right-to-left: accumulate into infinity while doubling a running base
    LsbFirst,
}

impl BinaryCurve {
    /// Compute d·P
    pub fn scalar_mul(&self, d: u64, p: &CurvePoint) -> CurvePoint {
        self.scalar_mul_lsb(d, p)
    }

    /// Compute d·P with an explicit bit-traversal order
    pub fn scalar_mul_with(&self, d: u64, p: &CurvePoint, order: BitOrder) -> CurvePoint {
        match order {
            BitOrder::MsbFirst => self.scalar_mul_msb(d, p),
            BitOrder::LsbFirst => self.scalar_mul_lsb(d, p),
        }
    }

    fn scalar_mul_lsb(&self, d: u64, p: &CurvePoint) -> CurvePoint {
        if d == 0 {
            return CurvePoint::Infinity;
        }

        let mut result = CurvePoint::Infinity;
        let mut base = *p;
        let mut scalar = d;

        while scalar > 0 {
            if scalar & 1 == 1 {
                result = self.add(&result, &base);
            }
            base = self.double(&base);
            scalar >>= 1;
        }

        result
    }

    fn scalar_mul_msb(&self, d: u64, p: &CurvePoint) -> CurvePoint {
        if d == 0 {
            return CurvePoint::Infinity;
        }

        // Start at the top bit; it contributes the initial copy of P.
        let top = 63 - d.leading_zeros();
        let mut result = *p;

        for i in (0..top).rev() {
            result = self.double(&result);
            if (d >> i) & 1 == 1 {
                result = self.add(&result, p);
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf16::Gf16;

    fn demo_curve() -> BinaryCurve {
        BinaryCurve::new(Gf16::new(0b1000), Gf16::new(0b1001))
    }

    fn generator(curve: &BinaryCurve) -> CurvePoint {
        curve.point(Gf16::new(0b0101), Gf16::new(0b0000)).unwrap()
    }

    #[test]
    fn test_zero_scalar_is_infinity() {
        let curve = demo_curve();
        let p = generator(&curve);
        assert!(curve.scalar_mul_with(0, &p, BitOrder::MsbFirst).is_infinity());
        assert!(curve.scalar_mul_with(0, &p, BitOrder::LsbFirst).is_infinity());
    }

    #[test]
    fn test_small_multiples() {
        let curve = demo_curve();
        let p = generator(&curve);

        assert_eq!(curve.scalar_mul(1, &p), p);
        assert_eq!(curve.scalar_mul(2, &p), curve.double(&p));

        let three = curve.add(&curve.double(&p), &p);
        assert_eq!(curve.scalar_mul(3, &p), three);
    }

    #[test]
    fn test_multiples_of_generator() {
        // d·(0101, 0000) fixtures from walking the 22-element cyclic group
        let curve = demo_curve();
        let p = generator(&curve);
        let expected: [(u8, u8); 7] = [
            (0b0101, 0b0000), // 1P
            (0b1111, 0b1011), // 2P
            (0b0001, 0b0000), // 3P
            (0b1100, 0b1100), // 4P
            (0b0011, 0b1100), // 5P
            (0b1000, 0b0001), // 6P
            (0b0010, 0b1101), // 7P
        ];
        for (d, (x, y)) in expected.iter().enumerate() {
            let m = curve.scalar_mul(d as u64 + 1, &p);
            assert_eq!(m, curve.point(Gf16::new(*x), Gf16::new(*y)).unwrap());
        }
        assert!(curve.scalar_mul(22, &p).is_infinity());
        assert_eq!(curve.scalar_mul(23, &p), p);
    }

    #[test]
    fn test_variants_agree() {
        let curve = demo_curve();
        for p in curve.points() {
            for d in 0..50u64 {
                assert_eq!(
                    curve.scalar_mul_with(d, &p, BitOrder::MsbFirst),
                    curve.scalar_mul_with(d, &p, BitOrder::LsbFirst),
                    "disagreement at d = {} for {}",
                    d,
                    p
                );
            }
        }
    }

    #[test]
    fn test_scalar_linearity() {
        let curve = demo_curve();
        let p = generator(&curve);
        for a in 0..30u64 {
            for b in 0..30u64 {
                let lhs = curve.scalar_mul(a + b, &p);
                let rhs = curve.add(&curve.scalar_mul(a, &p), &curve.scalar_mul(b, &p));
                assert_eq!(lhs, rhs, "a = {}, b = {}", a, b);
            }
        }
    }

    #[test]
    fn test_infinity_base() {
        let curve = demo_curve();
        let inf = curve.infinity();
        for d in 0..10u64 {
            assert!(curve.scalar_mul_with(d, &inf, BitOrder::MsbFirst).is_infinity());
            assert!(curve.scalar_mul_with(d, &inf, BitOrder::LsbFirst).is_infinity());
        }
    }
}
