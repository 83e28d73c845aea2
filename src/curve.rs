//! Binary elliptic curve group law over GF(2^4)
//!
//! Curve form: y² + xy = x³ + ax² + b (characteristic 2)
//!
//! Binary curves need different addition formulas than the Short Weierstrass
//! form used for characteristic > 3.
//!
//! References:
//! [1] Guide to Elliptic Curve Cryptography - Hankerson, Menezes, Vanstone

use crate::error::CurveError;
use crate::gf16::Gf16;
use std::fmt;

/// A point on a binary elliptic curve
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurvePoint {
    /// The point at infinity (identity element)
    Infinity,
    /// An affine point (x, y) on the curve
    Affine { x: Gf16, y: Gf16 },
}

impl CurvePoint {
    /// Build a point from raw coordinates, mapping the `(0, 0)` sentinel to
    /// the point at infinity
    ///
    /// `(0, 0)` never satisfies the curve equation for the parameters used
    /// here, so it is free to stand in for the identity in tabular data.
    pub fn from_coords(x: Gf16, y: Gf16) -> CurvePoint {
        if x.is_zero() && y.is_zero() {
            CurvePoint::Infinity
        } else {
            CurvePoint::Affine { x, y }
        }
    }

    /// Check if this is the point at infinity
    pub fn is_infinity(&self) -> bool {
        matches!(self, CurvePoint::Infinity)
    }

    /// The x-coordinate, unless this is infinity
    pub fn x(&self) -> Option<Gf16> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { x, .. } => Some(*x),
        }
    }

    /// The y-coordinate, unless this is infinity
    pub fn y(&self) -> Option<Gf16> {
        match self {
            CurvePoint::Infinity => None,
            CurvePoint::Affine { y, .. } => Some(*y),
        }
    }
}

impl fmt::Display for CurvePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CurvePoint::Infinity => write!(f, "O"),
            CurvePoint::Affine { x, y } => write!(f, "({}, {})", x, y),
        }
    }
}

/// A binary elliptic curve y² + xy = x³ + ax² + b over GF(2^4)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryCurve {
    pub a: Gf16,
    pub b: Gf16,
}

impl BinaryCurve {
    /// Create a curve with coefficients `a` and `b`
    pub const fn new(a: Gf16, b: Gf16) -> Self {
        Self { a, b }
    }

    /// The point at infinity
    pub fn infinity(&self) -> CurvePoint {
        CurvePoint::Infinity
    }

    /// Check whether a point satisfies y² + xy = x³ + ax² + b
    pub fn is_on_curve(&self, point: &CurvePoint) -> bool {
        match point {
            CurvePoint::Infinity => true,
            CurvePoint::Affine { x, y } => {
                let lhs = *y * *y + *x * *y;
                let x_squared = *x * *x;
                let rhs = x_squared * *x + self.a * x_squared + self.b;
                lhs == rhs
            }
        }
    }

    /// Create a validated point on this curve
    ///
    /// Returns `CurveError::InvalidPoint` if the coordinates do not satisfy
    /// the curve equation.
    pub fn point(&self, x: Gf16, y: Gf16) -> Result<CurvePoint, CurveError> {
        let p = CurvePoint::Affine { x, y };
        if self.is_on_curve(&p) {
            Ok(p)
        } else {
            Err(CurveError::InvalidPoint { x, y })
        }
    }

    /// Add two points using the characteristic-2 group law
    ///
    /// Case 1: P + O = P and O + Q = Q (identity)
    /// Case 2: P = Q (point doubling)
    /// Case 3: x₁ = x₂, y₁ ≠ y₂ (mutual inverses, sum is O)
    /// Case 4: P ≠ Q (chord)
    ///
    /// The identity cases must come first; skipping them sends `P + O` into
    /// the chord branch and breaks the identity axiom.
    pub fn add(&self, p: &CurvePoint, q: &CurvePoint) -> CurvePoint {
        match (p, q) {
            (CurvePoint::Infinity, _) => *q,
            (_, CurvePoint::Infinity) => *p,

            (CurvePoint::Affine { x: x1, y: y1 }, CurvePoint::Affine { x: x2, y: y2 }) => {
                if x1 == x2 {
                    if y1 == y2 {
                        return self.double(p);
                    }
                    // Same x, different y: the points are mutual inverses
                    return CurvePoint::Infinity;
                }

                // λ = (y₁ + y₂) / (x₁ + x₂)
                let dx = *x1 + *x2;
                let dy = *y1 + *y2;
                let lambda = dy
                    * dx.inv()
                        .expect("Division by zero in binary curve addition");

                // x₃ = λ² + λ + x₁ + x₂ + a
                let x3 = lambda * lambda + lambda + *x1 + *x2 + self.a;

                // y₃ = λ(x₁ + x₃) + x₃ + y₁
                let y3 = lambda * (*x1 + x3) + x3 + *y1;

                CurvePoint::Affine { x: x3, y: y3 }
            }
        }
    }

    /// Double a point using the characteristic-2 tangent formulas
    ///
    /// For P = (x₁, y₁) with x₁ = 0, 2P = O. Otherwise:
    ///   λ = x₁ + y₁/x₁
    ///   x₃ = λ² + λ + a
    ///   y₃ = x₁² + λ·x₃ + x₃
    pub fn double(&self, p: &CurvePoint) -> CurvePoint {
        match p {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => {
                // x = 0 means the tangent is vertical, so 2P = O
                if x.is_zero() {
                    return CurvePoint::Infinity;
                }

                let lambda = *x
                    + *y * x
                        .inv()
                        .expect("Division by zero in binary curve doubling");

                let x3 = lambda * lambda + lambda + self.a;
                let y3 = *x * *x + lambda * x3 + x3;

                CurvePoint::Affine { x: x3, y: y3 }
            }
        }
    }

    /// Negate a point: -(x, y) = (x, x + y) in characteristic 2
    pub fn negate(&self, p: &CurvePoint) -> CurvePoint {
        match p {
            CurvePoint::Infinity => CurvePoint::Infinity,
            CurvePoint::Affine { x, y } => CurvePoint::Affine {
                x: *x,
                y: *x + *y,
            },
        }
    }

    /// Enumerate every finite point on the curve, in ascending (x, y) order
    pub fn points(&self) -> Vec<CurvePoint> {
        let mut points = Vec::new();
        for x in 0..16u8 {
            for y in 0..16u8 {
                let p = CurvePoint::Affine {
                    x: Gf16::new(x),
                    y: Gf16::new(y),
                };
                if self.is_on_curve(&p) {
                    points.push(p);
                }
            }
        }
        points
    }

    /// Cardinality of the curve group: finite points plus infinity
    pub fn group_order(&self) -> u64 {
        self.points().len() as u64 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_curve() -> BinaryCurve {
        BinaryCurve::new(Gf16::new(0b1000), Gf16::new(0b1001))
    }

    #[test]
    fn test_point_enumeration() {
        let expected: [(u8, u8); 21] = [
            (0b0000, 0b1011),
            (0b0001, 0b0000),
            (0b0001, 0b0001),
            (0b0010, 0b1101),
            (0b0010, 0b1111),
            (0b0011, 0b1100),
            (0b0011, 0b1111),
            (0b0101, 0b0000),
            (0b0101, 0b0101),
            (0b0111, 0b1011),
            (0b0111, 0b1100),
            (0b1000, 0b0001),
            (0b1000, 0b1001),
            (0b1001, 0b0110),
            (0b1001, 0b1111),
            (0b1011, 0b0010),
            (0b1011, 0b1001),
            (0b1100, 0b0000),
            (0b1100, 0b1100),
            (0b1111, 0b0100),
            (0b1111, 0b1011),
        ];

        let curve = demo_curve();
        let points = curve.points();
        assert_eq!(points.len(), 21);
        for (p, (x, y)) in points.iter().zip(expected.iter()) {
            assert_eq!(p.x().unwrap().value(), *x);
            assert_eq!(p.y().unwrap().value(), *y);
        }
        assert_eq!(curve.group_order(), 22);
    }

    #[test]
    fn test_invalid_point_rejected() {
        let curve = demo_curve();
        // (0, 0) is not a solution of the curve equation
        assert_eq!(
            curve.point(Gf16::zero(), Gf16::zero()),
            Err(CurveError::InvalidPoint {
                x: Gf16::zero(),
                y: Gf16::zero(),
            })
        );
        assert!(curve.point(Gf16::new(0b0100), Gf16::new(0b0001)).is_err());
    }

    #[test]
    fn test_identity_law() {
        let curve = demo_curve();
        let inf = curve.infinity();
        for p in curve.points() {
            assert_eq!(curve.add(&p, &inf), p);
            assert_eq!(curve.add(&inf, &p), p);
        }
        assert_eq!(curve.add(&inf, &inf), inf);
    }

    #[test]
    fn test_doubling_consistency() {
        let curve = demo_curve();
        for p in curve.points() {
            assert_eq!(curve.add(&p, &p), curve.double(&p));
        }
    }

    #[test]
    fn test_negation_law() {
        let curve = demo_curve();
        for p in curve.points() {
            let neg = curve.negate(&p);
            assert!(curve.is_on_curve(&neg));
            assert!(curve.add(&p, &neg).is_infinity());
        }
    }

    #[test]
    fn test_closure() {
        let curve = demo_curve();
        let points = curve.points();
        for p in &points {
            for q in &points {
                assert!(curve.is_on_curve(&curve.add(p, q)));
            }
        }
    }

    #[test]
    fn test_commutativity() {
        let curve = demo_curve();
        let points = curve.points();
        for p in &points {
            for q in &points {
                assert_eq!(curve.add(p, q), curve.add(q, p));
            }
        }
    }

    #[test]
    fn test_doubling_at_x_zero_is_infinity() {
        let curve = demo_curve();
        let p = curve.point(Gf16::zero(), Gf16::new(0b1011)).unwrap();
        assert!(curve.double(&p).is_infinity());
    }

    #[test]
    fn test_known_sum() {
        // (1000, 0001) + (0101, 0000): chord case checked against the
        // addition table of the 21-point curve
        let curve = demo_curve();
        let p = curve.point(Gf16::new(0b1000), Gf16::new(0b0001)).unwrap();
        let q = curve.point(Gf16::new(0b0101), Gf16::new(0b0000)).unwrap();
        let sum = curve.add(&p, &q);
        assert_eq!(sum, curve.point(Gf16::new(0b0010), Gf16::new(0b1101)).unwrap());
        assert_eq!(sum, curve.add(&q, &p));
    }

    #[test]
    fn test_from_coords_sentinel() {
        assert!(CurvePoint::from_coords(Gf16::zero(), Gf16::zero()).is_infinity());
        let p = CurvePoint::from_coords(Gf16::new(0b0101), Gf16::zero());
        assert_eq!(p.x().map(Gf16::value), Some(0b0101));
    }

    #[test]
    fn test_display() {
        let p = CurvePoint::Affine {
            x: Gf16::new(0b1011),
            y: Gf16::new(0b1001),
        };
        assert_eq!(p.to_string(), "(1011, 1001)");
        assert_eq!(CurvePoint::Infinity.to_string(), "O");
    }
}
