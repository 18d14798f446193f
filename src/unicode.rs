/// Character-level Unicode classification for Arabic text.

pub fn is_arabic(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Check if a string is already fully transliterated output.
///
/// True when nothing in `s` can be consumed by a rule: Arabic letters,
/// separators, and uncovered symbols only. ASCII digits count as
/// convertible since most of them map to letters.
pub fn is_arabic_text(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_arabic_text() {
        assert!(is_arabic_text("مرحبا"));
        assert!(is_arabic_text("مرحبا بالعالم!"));
        assert!(!is_arabic_text("salam"));
        assert!(!is_arabic_text("مرحبا 7abibi"));
        assert!(!is_arabic_text("3"));
        assert!(!is_arabic_text(""));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_arabic('ش'));
        assert!(is_arabic('ء'));
        assert!(!is_arabic('s'));
        assert!(is_latin('s'));
        assert!(is_latin('S'));
        assert!(!is_latin('3'));
        assert!(!is_latin('ش'));
    }
}
