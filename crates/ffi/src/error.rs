use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use vector3_core::VectorError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
pub(crate) trait Vector3Error {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> Vector3ErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `Vector3Error` for FFI failures.
///
/// Wraps a `Vector3ErrorCode` together with its message. Core errors convert
/// into it through `From<VectorError>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultVector3Error {
    code: Vector3ErrorCode,
    msg: String,
}

impl DefaultVector3Error {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"components"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: Vector3ErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }
}

impl From<VectorError> for DefaultVector3Error {
    fn from(error: VectorError) -> Self {
        let code = match error {
            VectorError::InvalidArgument { .. } => Vector3ErrorCode::InvalidArgument,
            VectorError::UnsupportedOperand { .. } => Vector3ErrorCode::UnsupportedOperand,
            VectorError::DivisionByZero { .. } => Vector3ErrorCode::DivisionByZero,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl Vector3Error for DefaultVector3Error {
    fn code(&self) -> Vector3ErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by fallible vector functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vector3ErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// A vector was built from a component array whose length is not 3.
    InvalidArgument = 2,

    /// An arithmetic operator received an operand shape it does not support.
    UnsupportedOperand = 3,

    /// Division by a zero scalar, or normalization of a zero-length vector.
    DivisionByZero = 4,
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The `CString` is stored so the pointer handed out by `vector3_get_last_error`
    /// stays valid until the next failing or succeeding fallible call.
    static LAST_ERROR: RefCell<(Option<CString>, Vector3ErrorCode)> = const { RefCell::new((None, Vector3ErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, Vector3ErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last fallible call failed.
/// - `null` if it succeeded or no fallible call has been made on this thread.
///
/// # Lifetime
/// The returned pointer is valid until the next fallible FFI call on this
/// thread. **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```c
/// Vector3Ffi unit;
/// if (vector3_unit(v, &unit) != Vector3ErrorCode_Ok) {
///     printf("normalize failed: %s\n", vector3_get_last_error());
/// }
/// ```
#[no_mangle]
pub extern "C" fn vector3_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `Vector3ErrorCode::Ok` (0) if the last fallible call on this thread
/// succeeded, otherwise the code it returned.
#[no_mangle]
pub extern "C" fn vector3_get_last_error_code() -> Vector3ErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
