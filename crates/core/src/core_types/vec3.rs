//! Immutable 3D vector value type.
//!
//! `Vector3` stores three `f64` components behind read-only accessors. Every
//! operation returns a fresh value; nothing mutates a vector in place.
//!
//! # Construction
//! ```
//! use vector3_core::{Vector3, VectorError};
//!
//! let a = Vector3::new(1.0, 2.0, 3.0);
//! let b = Vector3::from_slice(&[1.0, 2.0, 3.0]).unwrap();
//! assert_eq!(a, b);
//!
//! assert_eq!(
//!     Vector3::from_slice(&[1.0, 2.0]),
//!     Err(VectorError::InvalidArgument { found: 2 })
//! );
//! ```
//!
//! # Formatting
//! - `{:?}` renders `Vector3(1.0, 2.0, 3.0)`
//! - `{}` renders `(1.0, 2.0, 3.0)`
//! - [`Vector3::to_fixed_string`] renders `1.0000 2.0000 3.0000 ` for log lines

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::error::VectorError;

/// A three-component vector of `f64`.
///
/// Serializes as a plain `[x, y, z]` array. Deserializing a sequence of any
/// other length fails with the [`VectorError::InvalidArgument`] message.
#[derive(Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "[f64; 3]", try_from = "Vec<f64>")]
pub struct Vector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl Vector3 {
    /// The zero vector (0, 0, 0)
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along the x axis
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from three components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// The zero vector.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create a vector from a slice holding exactly three components.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidArgument`] if `components.len() != 3`.
    pub fn from_slice(components: &[f64]) -> Result<Self, VectorError> {
        match *components {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => {
                debug!(
                    found = components.len(),
                    "Rejected vector construction: wrong component count"
                );
                Err(VectorError::InvalidArgument {
                    found: components.len(),
                })
            }
        }
    }

    /// Create a vector from a variadic argument list.
    ///
    /// An empty list yields the zero vector and three arguments are taken as
    /// `(x, y, z)`.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidArgument`] for any other arity.
    pub fn from_args(args: &[f64]) -> Result<Self, VectorError> {
        if args.is_empty() {
            Ok(Self::ZERO)
        } else {
            Self::from_slice(args)
        }
    }

    /// Create a vector from an iterator that yields exactly three components.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidArgument`] if the iterator yields more or fewer.
    pub fn try_from_iter<I>(components: I) -> Result<Self, VectorError>
    where
        I: IntoIterator<Item = f64>,
    {
        let collected: Vec<f64> = components.into_iter().collect();
        Self::from_slice(&collected)
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// The components as a plain `(x, y, z)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// The components as an `[x, y, z]` array.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Fixed-point rendering with four decimals per component, each followed
    /// by a space. Intended for column-aligned log output.
    pub fn to_fixed_string(self) -> String {
        format!("{:.4} {:.4} {:.4} ", self.x, self.y, self.z)
    }

    /// Apply `f` to every component.
    #[inline]
    pub(crate) fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Vector3::new(f(self.x), f(self.y), f(self.z))
    }

    /// Combine each component with the matching entry of `rhs`.
    #[inline]
    pub(crate) fn zip_with(self, rhs: [f64; 3], f: impl Fn(f64, f64) -> f64) -> Self {
        Vector3::new(f(self.x, rhs[0]), f(self.y, rhs[1]), f(self.z, rhs[2]))
    }
}

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?}, {:?})", self.x, self.y, self.z)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vector3::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

impl From<[i32; 3]> for Vector3 {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Vector3::new(f64::from(x), f64::from(y), f64::from(z))
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        v.to_array()
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> (f64, f64, f64) {
        v.to_tuple()
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Vector3::from_slice(components)
    }
}

impl TryFrom<Vec<f64>> for Vector3 {
    type Error = VectorError;

    fn try_from(components: Vec<f64>) -> Result<Self, Self::Error> {
        Vector3::from_slice(&components)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

// ============================================================================
// APPROXIMATE EQUALITY
// ============================================================================

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_constructors_agree() {
        assert_eq!(Vector3::zero(), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(Vector3::from_args(&[]), Ok(Vector3::ZERO));
    }

    #[test]
    fn test_accessors() {
        let v = Vector3::new(1.5, -2.0, 3.25);
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);
        assert_eq!(v.z(), 3.25);
        assert_eq!(v.to_tuple(), (1.5, -2.0, 3.25));
        assert_eq!(v.to_array(), [1.5, -2.0, 3.25]);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        assert_eq!(
            Vector3::from_slice(&[]),
            Err(VectorError::InvalidArgument { found: 0 })
        );
        assert_eq!(
            Vector3::from_slice(&[1.0, 2.0, 3.0, 4.0]),
            Err(VectorError::InvalidArgument { found: 4 })
        );
    }

    #[test]
    fn test_from_args_arity() {
        assert_eq!(
            Vector3::from_args(&[4.0, 5.0, 6.0]),
            Ok(Vector3::new(4.0, 5.0, 6.0))
        );
        assert_eq!(
            Vector3::from_args(&[4.0]),
            Err(VectorError::InvalidArgument { found: 1 })
        );
        assert_eq!(
            Vector3::from_args(&[4.0, 5.0]),
            Err(VectorError::InvalidArgument { found: 2 })
        );
    }

    #[test]
    fn test_try_from_iter() {
        let v = Vector3::try_from_iter((1..=3).map(f64::from)).unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let err = Vector3::try_from_iter([1.0; 5]).unwrap_err();
        assert_eq!(err, VectorError::InvalidArgument { found: 5 });
    }

    #[test]
    fn test_try_from_vec_and_slice() {
        let from_vec = Vector3::try_from(vec![7.0, 8.0, 9.0]).unwrap();
        let from_slice = Vector3::try_from(&[7.0, 8.0, 9.0][..]).unwrap();
        assert_eq!(from_vec, from_slice);
        assert!(Vector3::try_from(vec![7.0]).is_err());
    }

    #[test]
    fn test_numeric_array_conversions() {
        assert_eq!(Vector3::from([1, -2, 3]), Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(
            Vector3::from([0.5_f32, 0.25, 0.125]),
            Vector3::new(0.5, 0.25, 0.125)
        );
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), Vector3::new(1.0, 2.0, 3.0));

        let arr: [f64; 3] = Vector3::new(1.0, 2.0, 3.0).into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_nalgebra_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let n: nalgebra::Vector3<f64> = v.into();
        assert_eq!(n, nalgebra::Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(n), v);
        assert_eq!(Vector3::from(nalgebra::Point3::new(1.0, 2.0, 3.0)), v);
    }

    #[test]
    fn test_debug_and_display_forms() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(format!("{v:?}"), "Vector3(1.0, 2.0, 3.0)");
        assert_eq!(format!("{v}"), "(1.0, 2.0, 3.0)");

        let v = Vector3::new(-0.5, 2.25, 1e-3);
        assert_eq!(v.to_string(), "(-0.5, 2.25, 0.001)");
    }

    #[test]
    fn test_fixed_string() {
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.0).to_fixed_string(),
            "1.0000 2.0000 3.0000 "
        );
        assert_eq!(
            Vector3::new(-0.123456, 10.5, 0.00004).to_fixed_string(),
            "-0.1235 10.5000 0.0000 "
        );
    }

    #[test]
    fn test_approx_traits() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(1.0 + 1e-12, 2.0, 3.0 - 1e-12);
        assert_relative_eq!(a, b, epsilon = 1e-9);
        assert!(!a.abs_diff_eq(&Vector3::new(1.1, 2.0, 3.0), 1e-3));
    }
}
