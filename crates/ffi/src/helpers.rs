use crate::error::{with_last_error_mut, DefaultVector3Error, Vector3Error, Vector3ErrorCode};
use std::ffi::CString;
use vector3_core::VectorError;

/// Set the thread-local error message and code.
/// Accepts any type implementing `Vector3Error` trait.
pub(crate) fn set_last_error(error: &impl Vector3Error) {
    tracing::debug!(code = ?error.code(), msg = error.msg(), "FFI call failed");
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl Vector3Error) -> Vector3ErrorCode {
    set_last_error(error);
    error.code()
}

/// Record the outcome of a core call: failures are stored as the last error,
/// successes clear it.
pub(crate) fn track_result<T>(result: Result<T, VectorError>) -> Result<T, Vector3ErrorCode> {
    match result {
        Ok(value) => {
            clear_last_error();
            Ok(value)
        }
        Err(err) => Err(track_error(&DefaultVector3Error::from(err))),
    }
}

/// Clear the thread-local error message and code.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = Vector3ErrorCode::Ok;
    });
}

/// Run a fallible core computation and write its value through `out`.
///
/// # Safety
/// `out` must be null or valid for a write of `T`.
pub(crate) unsafe fn write_result<T>(
    out: *mut T,
    param_name: &str,
    compute: impl FnOnce() -> Result<T, VectorError>,
) -> Vector3ErrorCode {
    if out.is_null() {
        return track_error(&DefaultVector3Error::null_pointer(param_name));
    }

    match track_result(compute()) {
        Ok(value) => {
            // SAFETY: `out` is non-null and the caller guarantees it is writable.
            unsafe {
                out.write(value);
            }
            Vector3ErrorCode::Ok
        }
        Err(code) => code,
    }
}
