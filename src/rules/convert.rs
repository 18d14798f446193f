//! Full-text transliteration: every rule of the table, in order, applied
//! as a global find-and-replace over the current string.

use crate::unicode::is_arabic_text;

use super::table::{Rule, RuleTable};

/// Replace every occurrence of `rule.pattern` in `input`.
///
/// The scan walks characters left to right and never rescans a
/// replacement, so output characters produced by earlier rules pass
/// through later rules untouched.
pub(crate) fn apply_rule(input: &str, rule: &Rule) -> String {
    let pattern: Vec<char> = rule.pattern.chars().collect();
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < chars.len() {
        if matches_at(&chars, i, &pattern, rule.case_insensitive) {
            out.push(rule.replacement);
            i += pattern.len();
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }

    out
}

fn matches_at(chars: &[char], at: usize, pattern: &[char], case_insensitive: bool) -> bool {
    if at + pattern.len() > chars.len() {
        return false;
    }
    chars[at..at + pattern.len()]
        .iter()
        .zip(pattern)
        .all(|(c, p)| {
            if case_insensitive {
                c.eq_ignore_ascii_case(p)
            } else {
                c == p
            }
        })
}

impl RuleTable {
    /// Transliterate `input` by applying the whole table in order.
    ///
    /// Total over all strings: uncovered characters pass through
    /// unchanged and the empty string maps to itself.
    pub fn transliterate(&self, input: &str) -> String {
        if input.is_empty() || is_arabic_text(input) {
            return input.to_string();
        }
        let mut text = input.to_string();
        for rule in self.rules() {
            text = apply_rule(&text, rule);
        }
        text
    }
}

/// Transliterate with the global rule table.
pub fn transliterate(input: &str) -> String {
    RuleTable::global().transliterate(input)
}
