//! Cyclic subgroup order and generator detection
//!
//! The order of a point G is the first positive n with n·G = O, found by
//! repeated self-addition. G generates the whole group exactly when that
//! order equals the group cardinality.

use crate::curve::{BinaryCurve, CurvePoint};
use crate::error::CurveError;

/// Result of analyzing the subgroup generated by a point
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderReport {
    /// Order of the point: smallest n > 0 with n·G = O
    pub order: u64,
    /// Whether the order equals the full group cardinality
    pub is_generator: bool,
}

impl BinaryCurve {
    /// Find the order of `g` by repeated self-addition
    ///
    /// The accumulator starts at `g` (representing 1·G) and `g` is added
    /// until the accumulator reaches infinity. Returns
    /// `CurveError::OrderNotFound` if infinity is not reached within
    /// `max_iterations` additions, which signals a bound that is too small
    /// or a point outside the group.
    pub fn point_order(&self, g: &CurvePoint, max_iterations: u64) -> Result<u64, CurveError> {
        let mut accumulator = *g;
        let mut count = 1u64;

        while !accumulator.is_infinity() {
            if count >= max_iterations {
                return Err(CurveError::OrderNotFound { max_iterations });
            }
            accumulator = self.add(&accumulator, g);
            count += 1;
        }

        Ok(count)
    }

    /// Find the order of `g` and report whether it generates the full group
    pub fn analyze_subgroup(
        &self,
        g: &CurvePoint,
        max_iterations: u64,
    ) -> Result<OrderReport, CurveError> {
        let order = self.point_order(g, max_iterations)?;
        Ok(OrderReport {
            order,
            is_generator: order == self.group_order(),
        })
    }
}
