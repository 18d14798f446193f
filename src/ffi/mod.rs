//! FFI layer – each sub-module exposes one domain area of the C API.
//!
//! Types and helper functions that are shared across sub-modules live here
//! (macros, pointer helpers).

use std::ffi::{c_char, CStr};
use std::path::Path;

// Domain modules
pub mod convert;
pub mod engine;


pub use convert::*;
pub use engine::*;

// --- Generic owned-pointer helpers for FFI resource management ---

/// Allocate a value on the heap and return a raw pointer suitable for FFI.
/// The caller is responsible for eventually passing the pointer to [`owned_drop`].
pub(crate) fn owned_new<T>(value: T) -> *mut T {
    Box::into_raw(Box::new(value))
}

/// Free a heap-allocated value previously created by [`owned_new`].
/// No-op if `ptr` is null.
///
/// # Safety
/// `ptr` must have been produced by [`owned_new`] (i.e. `Box::into_raw`)
/// and must not have been freed already.
pub(crate) unsafe fn owned_drop<T>(ptr: *mut T) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Safely convert a C string pointer to a `&str`.
/// Returns `None` if the pointer is null or contains invalid UTF-8.
pub(crate) unsafe fn cptr_to_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

// ---------------------------------------------------------------------------
// FFI boilerplate-reduction macros (crate-internal)
// ---------------------------------------------------------------------------

/// Validate one or more FFI arguments and bind them as safe Rust values,
/// returning `$on_err` from the **calling** function if any check fails.
///
/// # Supported argument forms
///
/// | Syntax | What it does |
/// |--------|--------------|
/// | `str: $name = $ptr` | Null-check `$ptr: *const c_char`, convert via [`cptr_to_str`] to `&str`, bind as `$name`. |
/// | `ref: $name = $ptr` | Null-check `$ptr: *const T`, dereference to `&T`, bind as `$name`. |
/// | `nonnull: $ptr`      | Assert `$ptr` is non-null (no new binding is introduced). |
macro_rules! ffi_guard {
    ($on_err:expr ; ) => {};

    ($on_err:expr ; str: $name:ident = $ptr:expr , $($rest:tt)*) => {
        let Some($name) = (unsafe { $crate::ffi::cptr_to_str($ptr) }) else {
            return $on_err;
        };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; ref: $name:ident = $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        let $name = unsafe { &*$ptr };
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };

    ($on_err:expr ; nonnull: $ptr:expr , $($rest:tt)*) => {
        if $ptr.is_null() {
            return $on_err;
        }
        $crate::ffi::ffi_guard!($on_err ; $($rest)*);
    };
}

/// Define an `extern "C"` function that closes (frees) a heap-allocated resource.
macro_rules! ffi_close {
    ($fn_name:ident, $T:ty) => {
        #[no_mangle]
        pub extern "C" fn $fn_name(ptr: *mut $T) {
            unsafe { $crate::ffi::owned_drop(ptr) };
        }
    };
}

// Make macros available to sub-modules.
pub(crate) use ffi_close;
pub(crate) use ffi_guard;

// --- Top-level FFI functions ---

#[no_mangle]
pub extern "C" fn harf_engine_version() -> *const c_char {
    c"0.1.0".as_ptr()
}

#[no_mangle]
#[allow(clippy::unused_unit)]
pub extern "C" fn harf_trace_init(log_dir: *const c_char) {
    ffi_guard!(();
        str: dir_str = log_dir,
    );
    crate::trace_init::init_tracing(Path::new(dir_str));
}
