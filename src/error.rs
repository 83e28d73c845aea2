//! Error types for field and curve operations

use crate::gf16::Gf16;

/// Errors raised by the arithmetic core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveError {
    /// Attempted to invert the additive identity of GF(2^4)
    NoInverse,
    /// Coordinates that do not satisfy the curve equation
    InvalidPoint { x: Gf16, y: Gf16 },
    /// Repeated self-addition did not reach infinity within the bound
    OrderNotFound { max_iterations: u64 },
}

impl std::fmt::Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::NoInverse => write!(f, "0 has no multiplicative inverse in GF(2^4)"),
            CurveError::InvalidPoint { x, y } => {
                write!(f, "({}, {}) does not satisfy the curve equation", x, y)
            }
            CurveError::OrderNotFound { max_iterations } => {
                write!(
                    f,
                    "point order not found within {} iterations",
                    max_iterations
                )
            }
        }
    }
}

impl std::error::Error for CurveError {}
