//! C-compatible FFI API for hosts written in other languages.
//!
//! # ABI Contract
//!
//! All exported functions use `extern "C"` calling convention and `#[no_mangle]`
//! to ensure stable symbol names.
//!
//! ## Memory management
//! - Strings returned through `out_*` pointers are allocated on the Rust heap.
//! - Callers **must** free them with `ap_free_string`.
//! - Passing a null pointer to `ap_free_string` is a no-op.
//!
//! ## Error handling
//! - Functions that can fail return a `c_int`:
//!   `0` success, `1` null pointer, `2` invalid UTF-8, `3` invalid argument,
//!   `4` output contained a NUL byte.
//! - Error details can be retrieved via `ap_last_error`.
//!
//! ## Thread safety
//! - Pagination keeps no shared state and `ap_last_error` uses a thread-local,
//!   so every function is safe to call from multiple threads.
//!
//! ## Usage from PHP (FFI extension)
//! ```php
//! $ap = FFI::cdef(file_get_contents('include/autopaginate.h'), 'libautopaginate.so');
//! $out = FFI::new('char*');
//! if ($ap->ap_paginate($content, strlen($content), 700, FFI::addr($out)) === 0) {
//!     $paged = FFI::string($out);
//!     $ap->ap_free_string($out);
//! }
//! ```

use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::{c_char, c_int};
use std::ptr;
use std::slice;

use crate::pipeline::{paginate, paginate_with_report, unpaginate, PaginateConfig};

const AP_OK: c_int = 0;
const AP_NULL_POINTER: c_int = 1;
const AP_INVALID_UTF8: c_int = 2;
const AP_INVALID_ARGUMENT: c_int = 3;
const AP_INTERIOR_NUL: c_int = 4;

thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Borrow `len` bytes at `ptr` as UTF-8.
///
/// # Safety
/// `ptr` must point to `len` readable bytes that outlive the returned slice.
unsafe fn str_from_raw<'a>(ptr: *const u8, len: usize) -> Result<&'a str, c_int> {
    let bytes = slice::from_raw_parts(ptr, len);
    std::str::from_utf8(bytes).map_err(|e| {
        set_last_error(&format!("Invalid UTF-8: {e}"));
        AP_INVALID_UTF8
    })
}

/// Hand `s` to the caller through `out`.
///
/// # Safety
/// `out` must be a valid pointer.
unsafe fn write_string(s: String, out: *mut *mut c_char) -> c_int {
    match CString::new(s) {
        Ok(cs) => {
            *out = cs.into_raw();
            AP_OK
        }
        Err(_) => {
            *out = ptr::null_mut();
            set_last_error("Output contained null byte");
            AP_INTERIOR_NUL
        }
    }
}

// ---------------------------------------------------------------------------
// Core API
// ---------------------------------------------------------------------------

/// Paginate UTF-8 content with the given word budget.
///
/// # Parameters
/// - `content_ptr`: pointer to UTF-8 bytes (not necessarily null-terminated)
/// - `content_len`: length of the content in bytes
/// - `word_budget`: preferred words per page; must be greater than zero
/// - `out_text`: on success, receives a null-terminated paginated string
///
/// # Returns
/// `0` on success, non-zero on error. On error, call `ap_last_error`.
///
/// # Safety
/// - `content_ptr` must point to `content_len` valid bytes.
/// - `out_text` must be a valid pointer.
/// - The caller must free `*out_text` by calling `ap_free_string`.
#[no_mangle]
pub unsafe extern "C" fn ap_paginate(
    content_ptr: *const u8,
    content_len: usize,
    word_budget: i64,
    out_text: *mut *mut c_char,
) -> c_int {
    if content_ptr.is_null() || out_text.is_null() {
        set_last_error("Null pointer argument");
        return AP_NULL_POINTER;
    }

    let content = match str_from_raw(content_ptr, content_len) {
        Ok(s) => s,
        Err(rc) => return rc,
    };

    match paginate(content, word_budget) {
        Ok(text) => write_string(text, out_text),
        Err(e) => {
            set_last_error(&e.to_string());
            AP_INVALID_ARGUMENT
        }
    }
}

/// Paginate and also return a JSON [`crate::report::PaginationReport`].
///
/// # Parameters
/// - `content_ptr`, `content_len`, `word_budget`: as for `ap_paginate`
/// - `out_text`: paginated content (free with `ap_free_string`)
/// - `out_json`: report JSON (free with `ap_free_string`)
///
/// # Returns
/// `0` on success.
///
/// # Safety
/// Same as `ap_paginate`. Additionally, `out_json` must be a valid pointer.
#[no_mangle]
pub unsafe extern "C" fn ap_paginate_with_report(
    content_ptr: *const u8,
    content_len: usize,
    word_budget: i64,
    out_text: *mut *mut c_char,
    out_json: *mut *mut c_char,
) -> c_int {
    if content_ptr.is_null() || out_text.is_null() || out_json.is_null() {
        set_last_error("Null pointer argument");
        return AP_NULL_POINTER;
    }

    let content = match str_from_raw(content_ptr, content_len) {
        Ok(s) => s,
        Err(rc) => return rc,
    };

    let config = PaginateConfig::with_word_budget(word_budget);
    match paginate_with_report(content, &config) {
        Ok((text, report)) => {
            let rc = write_string(report.to_json(), out_json);
            if rc != AP_OK {
                return rc;
            }
            let rc = write_string(text, out_text);
            if rc != AP_OK {
                ap_free_string(*out_json);
                *out_json = ptr::null_mut();
            }
            rc
        }
        Err(e) => {
            set_last_error(&e.to_string());
            AP_INVALID_ARGUMENT
        }
    }
}

/// Strip every page-break marker from UTF-8 content.
///
/// # Returns
/// `0` on success.
///
/// # Safety
/// Same as `ap_paginate`.
#[no_mangle]
pub unsafe extern "C" fn ap_remove_markers(
    content_ptr: *const u8,
    content_len: usize,
    out_text: *mut *mut c_char,
) -> c_int {
    if content_ptr.is_null() || out_text.is_null() {
        set_last_error("Null pointer argument");
        return AP_NULL_POINTER;
    }

    match str_from_raw(content_ptr, content_len) {
        Ok(content) => write_string(unpaginate(content), out_text),
        Err(rc) => rc,
    }
}

// ---------------------------------------------------------------------------
// Memory management
// ---------------------------------------------------------------------------

/// Free a string returned through an `out_*` pointer.
///
/// # Safety
/// `s` must have been returned by one of the `ap_*` functions and not freed
/// already.
#[no_mangle]
pub unsafe extern "C" fn ap_free_string(s: *mut c_char) {
    if !s.is_null() {
        let _ = CString::from_raw(s);
    }
}

/// Retrieve the last error message. Returns a null-terminated string.
///
/// The returned pointer is valid until the next failing `ap_*` call on the
/// same thread. The caller should **not** free this pointer.
///
/// Returns null if no error has occurred.
#[no_mangle]
pub extern "C" fn ap_last_error() -> *const c_char {
    LAST_ERROR.with(|e| {
        let borrow = e.borrow();
        match borrow.as_ref() {
            Some(cs) => cs.as_ptr(),
            None => ptr::null(),
        }
    })
}

/// Return the library version as a null-terminated string.
/// The caller must **not** free this pointer.
#[no_mangle]
pub extern "C" fn ap_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
