//! Real-time segmenter: re-transliterates around the cursor while the
//! host text field is being edited.
//!
//! The input is split at the separators nearest the cursor into a
//! committed prefix, the token under edit, and a suffix. Each part is
//! transliterated independently, which equals transliterating the whole
//! string because no rule pattern contains a separator. The cursor is
//! remapped through the transliteration of everything before it.

use tracing::debug_span;

use crate::rules::RuleTable;

/// Characters that delimit tokens for incremental processing.
pub const SEPARATORS: &[char] = &[
    ' ', '\t', '\n', '.', ',', '!', '?', ';', ':', '\'', '"', '(', ')',
];

pub fn is_separator(c: char) -> bool {
    SEPARATORS.contains(&c)
}

/// Result of one real-time conversion step. Offsets are in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealTimeResult {
    pub text: String,
    pub new_cursor: usize,
}

/// Three-way split of the input around the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segments {
    /// Everything up to and including the separator left of the cursor.
    pub prefix: String,
    /// The separator-free token the cursor sits in.
    pub active: String,
    /// Everything from the separator right of the cursor onward.
    pub suffix: String,
}

/// Split `text` at the separators nearest `cursor` (clamped to the text
/// length, counted in chars).
pub fn segment_at(text: &str, cursor: usize) -> Segments {
    let chars: Vec<char> = text.chars().collect();
    let cursor = cursor.min(chars.len());

    let left = chars[..cursor].iter().rposition(|&c| is_separator(c));
    let right = chars[cursor..]
        .iter()
        .position(|&c| is_separator(c))
        .map(|i| cursor + i)
        .unwrap_or(chars.len());

    let active_start = left.map_or(0, |i| i + 1);
    Segments {
        prefix: chars[..active_start].iter().collect(),
        active: chars[active_start..right].iter().collect(),
        suffix: chars[right..].iter().collect(),
    }
}

pub(crate) fn transliterate_real_time_with(
    table: &RuleTable,
    text: &str,
    cursor: usize,
) -> RealTimeResult {
    let _span = debug_span!("real_time", len = text.len(), cursor).entered();

    let cursor = cursor.min(text.chars().count());
    let segments = segment_at(text, cursor);

    let mut out = table.transliterate(&segments.prefix);
    out.push_str(&table.transliterate(&segments.active));
    out.push_str(&table.transliterate(&segments.suffix));

    // The cursor maps through the transliteration of everything before
    // it rather than through the segments above: it may sit strictly
    // inside the active token, at a non-boundary offset.
    let before: String = text.chars().take(cursor).collect();
    let new_cursor = table.transliterate(&before).chars().count();

    RealTimeResult {
        text: out,
        new_cursor,
    }
}

/// Real-time transliteration with the global rule table.
pub fn transliterate_real_time(text: &str, cursor: usize) -> RealTimeResult {
    transliterate_real_time_with(RuleTable::global(), text, cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::transliterate;

    #[test]
    fn test_empty() {
        let r = transliterate_real_time("", 0);
        assert_eq!(r.text, "");
        assert_eq!(r.new_cursor, 0);
    }

    #[test]
    fn test_single_token() {
        let r = transliterate_real_time("mar7aba", 7);
        assert_eq!(r.text, "مارحابا");
        assert_eq!(r.new_cursor, 7);
    }

    #[test]
    fn test_cursor_mid_token() {
        // "mar|7aba": the prefix "mar" transliterates to 3 chars.
        let r = transliterate_real_time("mar7aba", 3);
        assert_eq!(r.text, "مارحابا");
        assert_eq!(r.new_cursor, 3);
    }

    #[test]
    fn test_digraph_shortens_prefix() {
        // "sha|7al": "sha" becomes two chars, so the cursor moves left.
        let r = transliterate_real_time("sha7al", 3);
        assert_eq!(r.text, "شاحال");
        assert_eq!(r.new_cursor, 2);
    }

    #[test]
    fn test_cursor_at_start() {
        let r = transliterate_real_time("salam", 0);
        assert_eq!(r.text, "سالام");
        assert_eq!(r.new_cursor, 0);
    }

    #[test]
    fn test_cursor_past_end_clamps() {
        let r = transliterate_real_time("ab", 99);
        assert_eq!(r.text, "اب");
        assert_eq!(r.new_cursor, 2);
    }

    #[test]
    fn test_segment_at_basic() {
        let s = segment_at("ahlan wa sahlan", 7);
        assert_eq!(s.prefix, "ahlan ");
        assert_eq!(s.active, "wa");
        assert_eq!(s.suffix, " sahlan");
    }

    #[test]
    fn test_segment_at_no_separators() {
        let s = segment_at("salam", 3);
        assert_eq!(s.prefix, "");
        assert_eq!(s.active, "salam");
        assert_eq!(s.suffix, "");
    }

    #[test]
    fn test_segment_at_cursor_on_separator() {
        // Cursor directly on a separator: the active token is empty and
        // the separator belongs to the suffix.
        let s = segment_at("ab cd", 2);
        assert_eq!(s.prefix, "");
        assert_eq!(s.active, "ab");
        assert_eq!(s.suffix, " cd");

        let s = segment_at("ab cd", 3);
        assert_eq!(s.prefix, "ab ");
        assert_eq!(s.active, "cd");
        assert_eq!(s.suffix, "");
    }

    #[test]
    fn test_segment_at_adjacent_separators() {
        let s = segment_at("a.. b", 3);
        assert_eq!(s.prefix, "a..");
        assert_eq!(s.active, "");
        assert_eq!(s.suffix, " b");
    }

    #[test]
    fn test_multi_token_conversion() {
        let r = transliterate_real_time("salam 3alaykum", 8);
        assert_eq!(r.text, "سالام عالايكوم");
        // "salam 3a" -> "سالام عا" = 8 chars.
        assert_eq!(r.new_cursor, 8);
    }

    #[test]
    fn test_reassembly_equals_whole_string() {
        // The law behind the three-way split: segment-wise conversion
        // must equal converting the whole string, at every cursor.
        let samples = [
            "salam 3alaykum",
            "sha7al, ya Sadi9!",
            "kitab (jadid) thamin",
            "a..b  c\td",
            "  leading and trailing  ",
            "la shay'",
        ];
        for text in samples {
            let whole = transliterate(text);
            for cursor in 0..=text.chars().count() {
                let r = transliterate_real_time(text, cursor);
                assert_eq!(r.text, whole, "text={text:?} cursor={cursor}");
            }
        }
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let samples = ["shshsh", "th th th", "3a7ba", "x0y1", "Sham dhahab"];
        for text in samples {
            for cursor in 0..=text.chars().count() {
                let r = transliterate_real_time(text, cursor);
                assert!(
                    r.new_cursor <= r.text.chars().count(),
                    "text={text:?} cursor={cursor} new={} len={}",
                    r.new_cursor,
                    r.text.chars().count()
                );
            }
        }
    }

    #[test]
    fn test_cursor_prefix_law() {
        // At any cursor that does not split a digraph match, the output
        // up to new_cursor equals the transliterated input prefix.
        let text = "mar7aba bik";
        for cursor in 0..=text.chars().count() {
            let r = transliterate_real_time(text, cursor);
            let prefix: String = text.chars().take(cursor).collect();
            let expected = transliterate(&prefix);
            let got: String = r.text.chars().take(r.new_cursor).collect();
            assert_eq!(got, expected, "cursor={cursor}");
        }
    }

    #[test]
    fn test_separator_only_input() {
        let r = transliterate_real_time("., !", 2);
        assert_eq!(r.text, "., !");
        assert_eq!(r.new_cursor, 2);
    }
}
