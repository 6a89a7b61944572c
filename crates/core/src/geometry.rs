//! Geometric operations on [`Vector3`]: magnitude, normalization, dot and
//! cross products, angles, and triangle area.
//!
//! Operations that must normalize a vector fail with
//! [`VectorError::DivisionByZero`] when handed the zero vector rather than
//! returning NaN components.
//!
//! ```
//! use vector3_core::Vector3;
//!
//! let a = Vector3::new(1.0, 0.0, 0.0);
//! let b = Vector3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(&b), Vector3::new(0.0, 0.0, 1.0));
//! assert!((a.angle_to(&b).unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! assert!((a.triangle_area(&b).unwrap() - 0.5).abs() < 1e-12);
//! ```

use tracing::{debug, trace};

use crate::core_types::{Operation, Vector3, VectorError};

/// Decimal places at which a magnitude must round to 1.0 for a vector to be
/// treated as already normalized.
pub const UNIT_DECIMAL_PLACES: i32 = 5;

/// `10^-UNIT_DECIMAL_PLACES`, for callers comparing magnitudes against 1.0.
/// [`Vector3::is_unit`] rounds at [`UNIT_DECIMAL_PLACES`] and does not read it.
pub const UNIT_TOLERANCE: f64 = 1e-5;

/// Constrain `value` to the inclusive range `[low, high]`.
///
/// Total for any `PartialOrd` input: unlike [`f64::clamp`] it never panics,
/// even when `low > high`. Values that compare unordered (NaN) pass through.
///
/// ```
/// use vector3_core::clamp;
///
/// assert_eq!(clamp(-1.0, 1.0, 1.5), 1.0);
/// assert_eq!(clamp(-1.0, 1.0, -1.5), -1.0);
/// assert_eq!(clamp(-1.0, 1.0, 0.3), 0.3);
/// ```
pub fn clamp<T: PartialOrd>(low: T, high: T, value: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

#[inline]
fn round_to_places(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

impl Vector3 {
    /// Squared Euclidean length.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length `sqrt(x² + y² + z²)`.
    ///
    /// Computed with `hypot` so that very small components never underflow to
    /// zero. The result is exactly zero only for the zero vector, and is
    /// infinite only when the true length exceeds `f64::MAX`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.x().hypot(self.y()).hypot(self.z())
    }

    /// Whether the magnitude rounds to 1.0 at [`UNIT_DECIMAL_PLACES`] decimals.
    pub fn is_unit(&self) -> bool {
        round_to_places(self.magnitude(), UNIT_DECIMAL_PLACES) == 1.0
    }

    /// The vector scaled to unit length.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] for the zero vector.
    pub fn unit(&self) -> Result<Vector3, VectorError> {
        self.normalized(Operation::Unit)
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x() * other.x() + self.y() * other.y() + self.z() * other.z()
    }

    /// Cross product. The result is the zero vector iff the inputs are parallel.
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        let (ax, ay, az) = self.to_tuple();
        let (bx, by, bz) = other.to_tuple();
        Vector3::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// Each operand is normalized unless [`Vector3::is_unit`] already holds.
    /// The cosine is clamped to `[-1, 1]` before `acos` so rounding error can
    /// never push it out of the function's domain.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if either vector has zero length.
    pub fn angle_to(&self, other: &Vector3) -> Result<f64, VectorError> {
        self.angle_for(other, Operation::AngleTo)
    }

    /// `|a| |b| sin(θ)`: the area of the parallelogram spanned by the two
    /// vectors. Agrees with `self.cross(other).magnitude()` up to rounding.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if either vector has zero length.
    pub fn cross_magnitude(&self, other: &Vector3) -> Result<f64, VectorError> {
        self.cross_magnitude_for(other, Operation::CrossMagnitude)
    }

    /// Area of the triangle whose two edges are `self` and `other`.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if either vector has zero length.
    pub fn triangle_area(&self, other: &Vector3) -> Result<f64, VectorError> {
        Ok(self.cross_magnitude_for(other, Operation::TriangleArea)? / 2.0)
    }

    /// Largest absolute component.
    fn max_abs_component(&self) -> f64 {
        self.x().abs().max(self.y().abs()).max(self.z().abs())
    }

    fn normalized(&self, operation: Operation) -> Result<Vector3, VectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            debug!(%operation, "Zero-length vector has no direction");
            return Err(VectorError::DivisionByZero { operation });
        }
        if magnitude.is_finite() {
            return Ok(*self / magnitude);
        }
        // Length overflowed: rescale by the largest component first.
        trace!(vector = %self, "Rescaling before normalization");
        let scaled = *self / self.max_abs_component();
        Ok(scaled / scaled.magnitude())
    }

    /// Unit-length direction, skipping the division when already normalized.
    fn direction(&self, operation: Operation) -> Result<Vector3, VectorError> {
        if self.is_unit() {
            trace!(vector = %self, "Operand already unit length");
            return Ok(*self);
        }
        self.normalized(operation)
    }

    fn angle_for(&self, other: &Vector3, operation: Operation) -> Result<f64, VectorError> {
        let a = self.direction(operation)?;
        let b = other.direction(operation)?;
        let cosine = clamp(-1.0, 1.0, a.dot(&b) / (a.magnitude() * b.magnitude()));
        Ok(cosine.acos())
    }

    fn cross_magnitude_for(
        &self,
        other: &Vector3,
        operation: Operation,
    ) -> Result<f64, VectorError> {
        let angle = self.angle_for(other, operation)?;
        // |a| |b| as scale * |a / scale| so finite results never pass through inf
        let (scale_a, scale_b) = (self.max_abs_component(), other.max_abs_component());
        let norm_a = (*self / scale_a).magnitude();
        let norm_b = (*other / scale_b).magnitude();
        Ok(norm_a * norm_b * angle.sin() * scale_a * scale_b)
    }
}
