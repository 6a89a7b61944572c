//! C ABI for `vector3-core`.
//!
//! Vectors cross the boundary by value as `Vector3Ffi`. Fallible calls return
//! a `Vector3ErrorCode` and write their result through an out-pointer; the
//! message for the most recent failure on the calling thread is available from
//! `vector3_get_last_error()`.
//!
//! Example (C):
//! ```c
//! Vector3Ffi a = vector3_new(1.0, 0.0, 0.0);
//! Vector3Ffi b = vector3_new(0.0, 1.0, 0.0);
//! double area;
//! if (vector3_triangle_area(a, b, &area) != Vector3ErrorCode_Ok) {
//!     fprintf(stderr, "%s\n", vector3_get_last_error());
//! }
//! ```

mod error;
mod helpers;
mod vector;

pub use error::{vector3_get_last_error, vector3_get_last_error_code, Vector3ErrorCode};
pub use vector::{
    vector3_add, vector3_add_scalar, vector3_angle_to, vector3_clamp, vector3_cross,
    vector3_cross_magnitude, vector3_div_scalar, vector3_dot, vector3_from_array,
    vector3_magnitude, vector3_mul_scalar, vector3_new, vector3_sub, vector3_sub_scalar,
    vector3_triangle_area, vector3_unit, vector3_zero, Vector3Ffi,
};
