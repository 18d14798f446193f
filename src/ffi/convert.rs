use std::ffi::{c_char, CString};
use std::ptr;

use super::ffi_guard;
use crate::rules::{self, RuleTable};

// --- Stateless transliteration FFI ---

/// A single owned string crossing the FFI boundary.
#[repr(C)]
pub struct HarfTextResult {
    pub text: *const c_char,
    _owned: *mut CString,
}

impl HarfTextResult {
    pub(crate) fn empty() -> Self {
        Self {
            text: ptr::null(),
            _owned: ptr::null_mut(),
        }
    }

    pub(crate) fn from_string(s: String) -> Self {
        let Ok(cs) = CString::new(s) else {
            return Self::empty();
        };
        let text = cs.as_ptr();
        let owned = Box::into_raw(Box::new(cs));
        Self { text, _owned: owned }
    }
}

#[no_mangle]
pub extern "C" fn harf_transliterate(text: *const c_char) -> HarfTextResult {
    ffi_guard!(HarfTextResult::empty();
        str: text_str = text,
    );
    HarfTextResult::from_string(rules::transliterate(text_str))
}

#[no_mangle]
pub extern "C" fn harf_text_free(result: HarfTextResult) {
    if !result._owned.is_null() {
        unsafe {
            drop(Box::from_raw(result._owned));
        }
    }
}

// --- Rule table config FFI ---

/// Load a custom rule table TOML. Must happen before the first
/// conversion call; returns 0 on success, -1 on error.
#[no_mangle]
pub extern "C" fn harf_rules_load_config(path: *const c_char) -> i32 {
    ffi_guard!(-1;
        str: path_str = path,
    );
    let Ok(content) = std::fs::read_to_string(path_str) else {
        return -1;
    };
    match RuleTable::init_custom(content) {
        Ok(()) => 0,
        Err(_) => -1,
    }
}

#[no_mangle]
pub extern "C" fn harf_rules_default_config() -> HarfTextResult {
    HarfTextResult::from_string(rules::default_toml().to_string())
}
