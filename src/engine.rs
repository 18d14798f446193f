//! Engine object: the rule table plus the single piece of mutable
//! state, the enabled flag.

use tracing::debug;

use crate::realtime::{transliterate_real_time_with, RealTimeResult};
use crate::rules::RuleTable;

/// One engine per host lifecycle context. The host's event handlers
/// toggle `enabled` and drive the conversion calls; no synchronization
/// is needed because handlers run to completion before the next event.
pub struct TranslitEngine {
    table: &'static RuleTable,
    enabled: bool,
}

impl TranslitEngine {
    /// Engine over the process-wide rule table, enabled.
    pub fn new() -> Self {
        Self::with_table(RuleTable::global())
    }

    pub fn with_table(table: &'static RuleTable) -> Self {
        Self {
            table,
            enabled: true,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        debug!(enabled, "engine toggled");
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Full-text transliteration. Always live regardless of the enabled
    /// flag; hosts gate calls with [`is_enabled`](Self::is_enabled)
    /// themselves.
    pub fn transliterate(&self, text: &str) -> String {
        self.table.transliterate(text)
    }

    /// One real-time conversion step. Identity when disabled.
    pub fn transliterate_real_time(&self, text: &str, cursor: usize) -> RealTimeResult {
        if !self.enabled {
            return RealTimeResult {
                text: text.to_string(),
                new_cursor: cursor,
            };
        }
        transliterate_real_time_with(self.table, text, cursor)
    }
}

impl Default for TranslitEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_by_default() {
        let engine = TranslitEngine::new();
        assert!(engine.is_enabled());
    }

    #[test]
    fn test_toggle() {
        let mut engine = TranslitEngine::new();
        engine.set_enabled(false);
        assert!(!engine.is_enabled());
        engine.set_enabled(true);
        assert!(engine.is_enabled());
    }

    #[test]
    fn test_disabled_identity() {
        let mut engine = TranslitEngine::new();
        engine.set_enabled(false);
        let r = engine.transliterate_real_time("salam 3alaykum", 5);
        assert_eq!(r.text, "salam 3alaykum");
        assert_eq!(r.new_cursor, 5);
    }

    #[test]
    fn test_transliterate_ignores_flag() {
        let mut engine = TranslitEngine::new();
        engine.set_enabled(false);
        assert_eq!(engine.transliterate("salam"), "سالام");
    }

    #[test]
    fn test_real_time_when_enabled() {
        let engine = TranslitEngine::new();
        let r = engine.transliterate_real_time("sha7al", 6);
        assert_eq!(r.text, "شاحال");
        assert_eq!(r.new_cursor, 5);
    }
}
