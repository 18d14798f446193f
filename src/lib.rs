// FFI functions perform null checks before dereferencing raw pointers.
// Clippy cannot verify this statically, so we allow it at crate level.
#![allow(clippy::not_unsafe_ptr_arg_deref)]

//! Arabizi-to-Arabic transliteration engine.
//!
//! The core is an ordered rule table applied as sequential global
//! find-and-replace ([`rules`]), a real-time segmenter that rewrites the
//! token under the cursor while remapping the cursor position
//! ([`realtime`]), and an engine object holding the single enabled flag
//! ([`engine`]). Hosts embed the engine through the Rust API or the
//! C ABI in [`ffi`].

pub mod engine;
pub mod ffi;
pub mod realtime;
pub mod rules;
pub mod trace_init;
pub mod unicode;

pub use engine::TranslitEngine;
pub use realtime::{transliterate_real_time, RealTimeResult, Segments, SEPARATORS};
pub use rules::{transliterate, ConfigError, Rule, RuleTable};
