//! Error taxonomy for vector construction and arithmetic.

use std::fmt;

use super::operand::OperandKind;

/// The vector operation that was being evaluated when a [`VectorError`] was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Componentwise addition (`+`, `try_add`)
    Add,
    /// Componentwise subtraction (`-`, `try_sub`)
    Sub,
    /// Scalar multiplication (`*`, `try_mul`)
    Mul,
    /// Scalar division (`checked_div`, `try_div`)
    Div,
    /// Normalization to unit length
    Unit,
    /// Angle between two vectors
    AngleTo,
    /// Magnitude of the cross product via `|a||b|sin(θ)`
    CrossMagnitude,
    /// Area of the triangle spanned by two edges
    TriangleArea,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "add",
            Operation::Sub => "subtract",
            Operation::Mul => "multiply",
            Operation::Div => "divide",
            Operation::Unit => "unit",
            Operation::AngleTo => "angle_to",
            Operation::CrossMagnitude => "cross_magnitude",
            Operation::TriangleArea => "triangle_area",
        };
        f.write_str(name)
    }
}

/// Errors produced by fallible vector operations.
///
/// Every error is raised at the call that caused it; no operation returns a
/// partially computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A vector was built from a sequence that does not hold exactly three components.
    InvalidArgument {
        /// Number of components that were supplied
        found: usize,
    },

    /// An arithmetic operator received a right-hand operand of a shape it does not support.
    UnsupportedOperand {
        /// The operator that rejected the operand
        operation: Operation,
        /// Shape of the rejected operand
        operand: OperandKind,
    },

    /// A scalar divisor was zero, or a zero-length vector had to be normalized.
    DivisionByZero {
        /// The operation that needed the division
        operation: Operation,
    },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument { found } => {
                write!(f, "Invalid argument: expected 3 components, got {found}")
            }
            VectorError::UnsupportedOperand { operation, operand } => {
                write!(f, "Unsupported operand: cannot {operation} a vector and {operand}")
            }
            VectorError::DivisionByZero { operation } => {
                write!(f, "Division by zero in {operation}")
            }
        }
    }
}

impl std::error::Error for VectorError {}
