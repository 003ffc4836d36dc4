//! # Feature: Content Filter
//!
//! Lexical scan and redaction of disallowed words. Matching is whole-word and
//! case-insensitive; a match is masked with one `*` per character.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use regex::{Captures, Regex};

/// Disallowed words, Vietnamese and English
const OFFENSIVE_WORDS: &[&str] = &[
    "đụ", "địt", "lồn", "cặc", "buồi", "dái",
    "đéo", "đít", "đái", "chó", "súc vật",
    "fuck", "shit", "bitch", "dick", "cock", "pussy",
];

#[derive(Clone)]
pub struct ContentFilter {
    pattern: Regex,
}

impl ContentFilter {
    pub fn new() -> Self {
        let alternation = OFFENSIVE_WORDS
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");

        ContentFilter {
            pattern: Regex::new(&format!(r"(?i)\b(?:{})\b", alternation))
                .expect("word list compiles to a valid pattern"),
        }
    }

    /// Replace every disallowed word with stars of the same length.
    pub fn filter_text(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, |caps: &Captures| "*".repeat(caps[0].chars().count()))
            .into_owned()
    }

    pub fn contains_offensive_content(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_whole_words() {
        let filter = ContentFilter::new();
        assert_eq!(filter.filter_text("what the fuck man"), "what the **** man");
        assert_eq!(filter.filter_text("SHIT happens"), "**** happens");
        assert_eq!(filter.filter_text("đồ chó"), "đồ ***");
        assert_eq!(filter.filter_text("con súc vật"), "con *******");
    }

    #[test]
    fn test_leaves_substrings_alone() {
        let filter = ContentFilter::new();
        assert_eq!(filter.filter_text("cockpit and shitake"), "cockpit and shitake");
        assert!(!filter.contains_offensive_content("Dickens wrote books"));
    }

    #[test]
    fn test_detects_offensive_content() {
        let filter = ContentFilter::new();
        assert!(filter.contains_offensive_content("you are a Bitch"));
        assert!(filter.contains_offensive_content("địt"));
        assert!(!filter.contains_offensive_content("một câu bình thường"));
        assert!(!filter.contains_offensive_content(""));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let filter = ContentFilter::new();
        let samples = [
            "fuck this shit",
            "đụ má chó đẻ",
            "nothing to see here",
            "dick,cock;pussy!",
            "",
        ];

        for sample in samples {
            let once = filter.filter_text(sample);
            assert_eq!(filter.filter_text(&once), once);
            assert!(!filter.contains_offensive_content(&once));
        }
    }
}
