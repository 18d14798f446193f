use std::ffi::{c_char, CString};
use std::ptr;

use super::convert::HarfTextResult;
use super::{ffi_close, ffi_guard, owned_new};
use crate::engine::TranslitEngine;

// --- Engine lifecycle FFI ---

#[no_mangle]
pub extern "C" fn harf_engine_new() -> *mut TranslitEngine {
    owned_new(TranslitEngine::new())
}

ffi_close!(harf_engine_free, TranslitEngine);

#[no_mangle]
pub extern "C" fn harf_engine_set_enabled(engine: *mut TranslitEngine, enabled: u8) {
    if engine.is_null() {
        return;
    }
    let engine = unsafe { &mut *engine };
    engine.set_enabled(enabled != 0);
}

#[no_mangle]
pub extern "C" fn harf_engine_is_enabled(engine: *const TranslitEngine) -> u8 {
    ffi_guard!(0;
        ref: engine_ref = engine,
    );
    engine_ref.is_enabled() as u8
}

#[no_mangle]
pub extern "C" fn harf_engine_transliterate(
    engine: *const TranslitEngine,
    text: *const c_char,
) -> HarfTextResult {
    ffi_guard!(HarfTextResult::empty();
        ref: engine_ref = engine,
        str: text_str = text,
    );
    HarfTextResult::from_string(engine_ref.transliterate(text_str))
}

// --- Real-time conversion FFI ---

#[repr(C)]
pub struct HarfRealTimeResult {
    pub text: *const c_char,
    pub new_cursor: u32,
    _owned: *mut CString,
}

impl HarfRealTimeResult {
    fn empty() -> Self {
        Self {
            text: ptr::null(),
            new_cursor: 0,
            _owned: ptr::null_mut(),
        }
    }
}

/// One real-time conversion step. Negative cursors clamp to 0; cursors
/// past the end of the text clamp to the text length.
#[no_mangle]
pub extern "C" fn harf_engine_real_time(
    engine: *const TranslitEngine,
    text: *const c_char,
    cursor: i64,
) -> HarfRealTimeResult {
    ffi_guard!(HarfRealTimeResult::empty();
        ref: engine_ref = engine,
        str: text_str = text,
    );
    let cursor = cursor.max(0) as usize;
    let result = engine_ref.transliterate_real_time(text_str, cursor);
    let Ok(cs) = CString::new(result.text) else {
        return HarfRealTimeResult::empty();
    };
    let text_ptr = cs.as_ptr();
    let owned = Box::into_raw(Box::new(cs));
    HarfRealTimeResult {
        text: text_ptr,
        new_cursor: result.new_cursor as u32,
        _owned: owned,
    }
}

#[no_mangle]
pub extern "C" fn harf_real_time_free(result: HarfRealTimeResult) {
    if !result._owned.is_null() {
        unsafe {
            drop(Box::from_raw(result._owned));
        }
    }
}
