//! Arithmetic on [`Vector3`].
//!
//! Right-hand operands whose type is known at compile time go through the
//! `std::ops` impls below, one impl per supported shape:
//!
//! | Operator | `Vector3` | `f64` | `[f64; 3]` / `(f64, f64, f64)` |
//! |----------|-----------|-------|--------------------------------|
//! | `+`, `-` | yes       | yes   | yes                            |
//! | `*`, `/` | no        | yes   | no                             |
//!
//! Operands whose shape is only known at runtime are wrapped in [`Operand`]
//! and passed to the fallible `try_*` methods, which report unsupported shapes
//! as [`VectorError::UnsupportedOperand`].
//!
//! Division by zero: the `/` operator follows IEEE-754 and yields infinite or
//! NaN components. [`Vector3::checked_div`] and [`Vector3::try_div`] return
//! [`VectorError::DivisionByZero`] instead.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::debug;

use super::error::{Operation, VectorError};
use super::vec3::Vector3;

/// Shape of a right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Vector,
    Scalar,
    Sequence {
        /// Number of elements in the sequence
        len: usize,
    },
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::Vector => f.write_str("a vector"),
            OperandKind::Scalar => f.write_str("a scalar"),
            OperandKind::Sequence { len } => write!(f, "a {len}-element sequence"),
        }
    }
}

/// A right-hand operand whose shape is decided at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Vector(Vector3),
    Scalar(f64),
    /// Raw components; only a sequence of exactly three is accepted.
    Sequence(Vec<f64>),
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::Vector(_) => OperandKind::Vector,
            Operand::Scalar(_) => OperandKind::Scalar,
            Operand::Sequence(seq) => OperandKind::Sequence { len: seq.len() },
        }
    }
}

impl From<Vector3> for Operand {
    fn from(v: Vector3) -> Self {
        Operand::Vector(v)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<[f64; 3]> for Operand {
    fn from(seq: [f64; 3]) -> Self {
        Operand::Sequence(seq.to_vec())
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Operand::Sequence(vec![x, y, z])
    }
}

impl From<Vec<f64>> for Operand {
    fn from(seq: Vec<f64>) -> Self {
        Operand::Sequence(seq)
    }
}

impl From<&[f64]> for Operand {
    fn from(seq: &[f64]) -> Self {
        Operand::Sequence(seq.to_vec())
    }
}

fn unsupported(operation: Operation, operand: &Operand) -> VectorError {
    let operand = operand.kind();
    debug!(%operation, %operand, "Rejected right-hand operand");
    VectorError::UnsupportedOperand { operation, operand }
}

// ============================================================================
// FALLIBLE (RUNTIME-SHAPED) ARITHMETIC
// ============================================================================

impl Vector3 {
    /// Add a vector, a scalar, or a three-element sequence.
    ///
    /// # Errors
    /// Returns [`VectorError::UnsupportedOperand`] for a sequence whose length is not 3.
    pub fn try_add(self, rhs: impl Into<Operand>) -> Result<Vector3, VectorError> {
        self.componentwise(Operation::Add, &rhs.into(), |a, b| a + b)
    }

    /// Subtract a vector, a scalar, or a three-element sequence.
    ///
    /// # Errors
    /// Returns [`VectorError::UnsupportedOperand`] for a sequence whose length is not 3.
    pub fn try_sub(self, rhs: impl Into<Operand>) -> Result<Vector3, VectorError> {
        self.componentwise(Operation::Sub, &rhs.into(), |a, b| a - b)
    }

    /// Scale by a scalar.
    ///
    /// # Errors
    /// Returns [`VectorError::UnsupportedOperand`] unless `rhs` is a scalar.
    pub fn try_mul(self, rhs: impl Into<Operand>) -> Result<Vector3, VectorError> {
        match rhs.into() {
            Operand::Scalar(s) => Ok(self * s),
            other => Err(unsupported(Operation::Mul, &other)),
        }
    }

    /// Divide by a non-zero scalar.
    ///
    /// # Errors
    /// Returns [`VectorError::UnsupportedOperand`] unless `rhs` is a scalar, and
    /// [`VectorError::DivisionByZero`] if that scalar is zero.
    pub fn try_div(self, rhs: impl Into<Operand>) -> Result<Vector3, VectorError> {
        match rhs.into() {
            Operand::Scalar(s) => self.checked_div(s),
            other => Err(unsupported(Operation::Div, &other)),
        }
    }

    /// Divide every component by `divisor`, refusing a zero divisor.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `divisor == 0.0`.
    pub fn checked_div(self, divisor: f64) -> Result<Vector3, VectorError> {
        if divisor == 0.0 {
            debug!(vector = %self, "Refused division by a zero scalar");
            return Err(VectorError::DivisionByZero {
                operation: Operation::Div,
            });
        }
        Ok(self / divisor)
    }

    fn componentwise(
        self,
        operation: Operation,
        rhs: &Operand,
        op: impl Fn(f64, f64) -> f64,
    ) -> Result<Vector3, VectorError> {
        match rhs {
            Operand::Vector(v) => Ok(self.zip_with(v.to_array(), op)),
            Operand::Scalar(s) => Ok(self.map(|a| op(a, *s))),
            Operand::Sequence(seq) => match *seq.as_slice() {
                [x, y, z] => Ok(self.zip_with([x, y, z], op)),
                _ => Err(unsupported(operation, rhs)),
            },
        }
    }
}

// ============================================================================
// OPERATOR OVERLOADS
// ============================================================================

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        self.zip_with(rhs.to_array(), |a, b| a + b)
    }
}

impl Add<f64> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: f64) -> Vector3 {
        self.map(|a| a + rhs)
    }
}

impl Add<[f64; 3]> for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: [f64; 3]) -> Vector3 {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Add<(f64, f64, f64)> for Vector3 {
    type Output = Vector3;
    fn add(self, (x, y, z): (f64, f64, f64)) -> Vector3 {
        self + [x, y, z]
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        self.zip_with(rhs.to_array(), |a, b| a - b)
    }
}

impl Sub<f64> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: f64) -> Vector3 {
        self.map(|a| a - rhs)
    }
}

impl Sub<[f64; 3]> for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: [f64; 3]) -> Vector3 {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl Sub<(f64, f64, f64)> for Vector3 {
    type Output = Vector3;
    fn sub(self, (x, y, z): (f64, f64, f64)) -> Vector3 {
        self - [x, y, z]
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        self.map(|a| a * rhs)
    }
}

// Scalar on the left: 2.0 * v
impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        self.map(|a| a / rhs)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        self.map(|a| -a)
    }
}
