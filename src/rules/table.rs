//! Ordered transliteration rule table, loadable from TOML.
//!
//! - `init_custom(toml_content)` sets a custom table before first `global()` call
//! - `RuleTable::global()` returns `&'static RuleTable` (lazy-init singleton)
//! - Default rules are embedded via `include_str!("default_rules.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::realtime::is_separator;

pub const DEFAULT_RULES_TOML: &str = include_str!("default_rules.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Returns the embedded default rule table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_RULES_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid rule {rule}: {reason}")]
    InvalidRule { rule: String, reason: String },
    #[error("rule table must contain at least one rule")]
    Empty,
    #[error("rule table already initialized")]
    AlreadyInitialized,
}

/// A single find-and-replace rule. Patterns are short ASCII sequences;
/// the replacement is always a single character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub replacement: char,
    pub case_insensitive: bool,
}

/// Ordered rule list. Order is part of the data: each rule is applied as
/// a global replace over the current string, so earlier rules win
/// wherever their matches overlap later ones.
#[derive(Debug)]
pub struct RuleTable {
    rules: Vec<Rule>,
}

impl RuleTable {
    /// Get or initialize the global singleton.
    pub fn global() -> &'static RuleTable {
        static INSTANCE: OnceLock<RuleTable> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_RULES_TOML);
            RuleTable::from_toml(toml_str).expect("rule table TOML must be valid")
        })
    }

    /// Set a custom table TOML before the first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), ConfigError> {
        RuleTable::from_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| ConfigError::AlreadyInitialized)
    }

    /// Parse and validate a rule table from TOML.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let file: RulesFile =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let mut rules = Vec::new();
        for tier in &file.tier {
            for (pattern, replacement) in &tier.rules {
                let replacement = validate_rule(pattern, replacement)?;
                rules.push(Rule {
                    pattern: pattern.clone(),
                    replacement,
                    case_insensitive: tier.case_insensitive,
                });
            }
        }
        if rules.is_empty() {
            return Err(ConfigError::Empty);
        }
        Ok(Self { rules })
    }

    /// The rules in application order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

#[derive(Debug, Deserialize)]
struct RulesFile {
    #[serde(default)]
    tier: Vec<TierConfig>,
}

#[derive(Debug, Deserialize)]
struct TierConfig {
    #[allow(dead_code)]
    name: String,
    case_insensitive: bool,
    rules: Vec<(String, String)>,
}

/// Check one (pattern, replacement) pair, returning the replacement char.
fn validate_rule(pattern: &str, replacement: &str) -> Result<char, ConfigError> {
    let rule = format!("{pattern:?} -> {replacement:?}");
    if pattern.is_empty() {
        return Err(ConfigError::InvalidRule {
            rule,
            reason: "pattern must be non-empty".to_string(),
        });
    }
    if !pattern.is_ascii() {
        return Err(ConfigError::InvalidRule {
            rule,
            reason: "pattern must be ASCII".to_string(),
        });
    }
    // Separators delimit tokens during real-time conversion; a pattern
    // containing one would break segment-independent transliteration.
    if pattern.chars().any(is_separator) {
        return Err(ConfigError::InvalidRule {
            rule,
            reason: "pattern must not contain separator characters".to_string(),
        });
    }
    let mut chars = replacement.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidRule {
            rule,
            reason: "replacement must be exactly one character".to_string(),
        }),
    }
}
