//! FFI-exposed vector type and operations.
//!
//! Infallible operations return their result directly. Fallible ones write
//! through an out-pointer and return a `Vector3ErrorCode`; on failure the out
//! value is left untouched and `vector3_get_last_error()` describes the cause.

use std::slice;
use vector3_core::{clamp, Vector3};

use crate::error::{DefaultVector3Error, Vector3ErrorCode};
use crate::helpers::{track_error, write_result};

/// C-compatible three-component vector.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3Ffi {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Vector3> for Vector3Ffi {
    fn from(v: Vector3) -> Self {
        let (x, y, z) = v.to_tuple();
        Vector3Ffi { x, y, z }
    }
}

impl From<Vector3Ffi> for Vector3 {
    fn from(v: Vector3Ffi) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

/// Create a vector from three components.
#[no_mangle]
pub extern "C" fn vector3_new(x: f64, y: f64, z: f64) -> Vector3Ffi {
    Vector3::new(x, y, z).into()
}

/// The zero vector.
#[no_mangle]
pub extern "C" fn vector3_zero() -> Vector3Ffi {
    Vector3::zero().into()
}

/// Create a vector from a component array.
///
/// Returns
/// - `Vector3ErrorCode::Ok` - `out` holds the vector
/// - `Vector3ErrorCode::NullPointer` - `components` or `out` is null
/// - `Vector3ErrorCode::InvalidArgument` - `len` is not 3
///
/// # Safety
/// - `components` must point to `len` readable `double` values.
/// - `out` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn vector3_from_array(
    components: *const f64,
    len: usize,
    out: *mut Vector3Ffi,
) -> Vector3ErrorCode {
    if components.is_null() {
        return track_error(&DefaultVector3Error::null_pointer("components"));
    }

    // SAFETY: `components` is non-null and the caller guarantees `len` readable values.
    let components = unsafe { slice::from_raw_parts(components, len) };

    // SAFETY: forwarded caller contract on `out`.
    unsafe { write_result(out, "out", || Vector3::from_slice(components).map(Into::into)) }
}

/// Componentwise sum.
#[no_mangle]
pub extern "C" fn vector3_add(a: Vector3Ffi, b: Vector3Ffi) -> Vector3Ffi {
    (Vector3::from(a) + Vector3::from(b)).into()
}

/// Componentwise difference.
#[no_mangle]
pub extern "C" fn vector3_sub(a: Vector3Ffi, b: Vector3Ffi) -> Vector3Ffi {
    (Vector3::from(a) - Vector3::from(b)).into()
}

/// Add `scalar` to every component.
#[no_mangle]
pub extern "C" fn vector3_add_scalar(v: Vector3Ffi, scalar: f64) -> Vector3Ffi {
    (Vector3::from(v) + scalar).into()
}

/// Subtract `scalar` from every component.
#[no_mangle]
pub extern "C" fn vector3_sub_scalar(v: Vector3Ffi, scalar: f64) -> Vector3Ffi {
    (Vector3::from(v) - scalar).into()
}

/// Scale every component by `scalar`.
#[no_mangle]
pub extern "C" fn vector3_mul_scalar(v: Vector3Ffi, scalar: f64) -> Vector3Ffi {
    (Vector3::from(v) * scalar).into()
}

/// Divide every component by `scalar`.
///
/// Returns `Vector3ErrorCode::DivisionByZero` if `scalar` is zero.
///
/// # Safety
/// `out` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn vector3_div_scalar(
    v: Vector3Ffi,
    scalar: f64,
    out: *mut Vector3Ffi,
) -> Vector3ErrorCode {
    // SAFETY: forwarded caller contract on `out`.
    unsafe {
        write_result(out, "out", || {
            Vector3::from(v).checked_div(scalar).map(Into::into)
        })
    }
}

/// Euclidean length.
#[no_mangle]
pub extern "C" fn vector3_magnitude(v: Vector3Ffi) -> f64 {
    Vector3::from(v).magnitude()
}

/// Normalize to unit length.
///
/// Returns `Vector3ErrorCode::DivisionByZero` for the zero vector.
///
/// # Safety
/// `out` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn vector3_unit(v: Vector3Ffi, out: *mut Vector3Ffi) -> Vector3ErrorCode {
    // SAFETY: forwarded caller contract on `out`.
    unsafe { write_result(out, "out", || Vector3::from(v).unit().map(Into::into)) }
}

/// Dot product.
#[no_mangle]
pub extern "C" fn vector3_dot(a: Vector3Ffi, b: Vector3Ffi) -> f64 {
    Vector3::from(a).dot(&Vector3::from(b))
}

/// Cross product.
#[no_mangle]
pub extern "C" fn vector3_cross(a: Vector3Ffi, b: Vector3Ffi) -> Vector3Ffi {
    Vector3::from(a).cross(&Vector3::from(b)).into()
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
///
/// Returns `Vector3ErrorCode::DivisionByZero` if either vector has zero length.
///
/// # Safety
/// `out` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn vector3_angle_to(
    a: Vector3Ffi,
    b: Vector3Ffi,
    out: *mut f64,
) -> Vector3ErrorCode {
    // SAFETY: forwarded caller contract on `out`.
    unsafe { write_result(out, "out", || Vector3::from(a).angle_to(&b.into())) }
}

/// `|a| |b| sin(θ)`.
///
/// Returns `Vector3ErrorCode::DivisionByZero` if either vector has zero length.
///
/// # Safety
/// `out` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn vector3_cross_magnitude(
    a: Vector3Ffi,
    b: Vector3Ffi,
    out: *mut f64,
) -> Vector3ErrorCode {
    // SAFETY: forwarded caller contract on `out`.
    unsafe { write_result(out, "out", || Vector3::from(a).cross_magnitude(&b.into())) }
}

/// Area of the triangle with edges `a` and `b`.
///
/// Returns `Vector3ErrorCode::DivisionByZero` if either vector has zero length.
///
/// # Safety
/// `out` must be a valid, non-null pointer to writable memory.
#[no_mangle]
pub unsafe extern "C" fn vector3_triangle_area(
    a: Vector3Ffi,
    b: Vector3Ffi,
    out: *mut f64,
) -> Vector3ErrorCode {
    // SAFETY: forwarded caller contract on `out`.
    unsafe { write_result(out, "out", || Vector3::from(a).triangle_area(&b.into())) }
}

/// Constrain `value` to `[low, high]`. Never fails.
#[no_mangle]
pub extern "C" fn vector3_clamp(low: f64, high: f64, value: f64) -> f64 {
    clamp(low, high, value)
}
