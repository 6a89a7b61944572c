//! Three-dimensional vector value type
//!
//! An immutable `Vector3` of `f64` components with componentwise arithmetic,
//! magnitude, normalization, dot and cross products, angle-between,
//! cross-product magnitude, and triangle area.
//!
//! ## Arithmetic contract
//! - `+` and `-` accept a vector, a scalar, or a raw `[x, y, z]` triple
//! - `*` and `/` accept a scalar only
//! - Operands of runtime shape go through [`Operand`] and the `try_*` methods,
//!   which report anything unsupported as [`VectorError::UnsupportedOperand`]
//!
//! ## Failure modes
//! Normalizing a zero-length vector (directly or inside `angle_to`,
//! `cross_magnitude`, `triangle_area`) fails with
//! [`VectorError::DivisionByZero`] instead of producing NaN.
//!
//! ```
//! use vector3_core::Vector3;
//!
//! let v = Vector3::new(1.0, 2.0, 3.0) + Vector3::new(4.0, 5.0, 6.0);
//! assert_eq!(v, Vector3::new(5.0, 7.0, 9.0));
//! assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
//! assert!(Vector3::zero().unit().is_err());
//! ```

// Core types and utilities
pub mod core_types;

// Geometric operations and numeric helpers
pub mod geometry;

// Re-export core types
pub use core_types::{Operand, OperandKind, Operation, Vector3, VectorError};
pub use geometry::{clamp, UNIT_DECIMAL_PLACES, UNIT_TOLERANCE};
