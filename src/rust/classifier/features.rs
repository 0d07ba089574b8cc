//! Hand-engineered lexical features computed from a product title.
//!
//! This is the only place the engineered features are defined. Training and
//! inference both go through [`extract`], and the persisted model records
//! [`FEATURE_SCHEMA_VERSION`] and [`FEATURE_NAMES`] so that a model trained
//! against a different definition is rejected at load time.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Bump whenever the meaning or order of the engineered features changes.
pub const FEATURE_SCHEMA_VERSION: u32 = 1;

/// Number of engineered features per title.
pub const NUM_FEATURES: usize = 5;

/// Column names, in the order produced by [`TitleFeatures::to_array`].
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = [
    "num_chars",
    "num_words",
    "has_digits",
    "has_caps_token",
    "longest_word",
];

lazy_static! {
    static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
    static ref CAPS_TOKEN: Regex = Regex::new(r"\b[A-Z]{2,}\b").unwrap();
}

/// The five lexical statistics derived from one title.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleFeatures {
    pub num_chars: f64,
    pub num_words: f64,
    pub has_digits: f64,
    pub has_caps_token: f64,
    pub longest_word: f64,
}

impl TitleFeatures {
    pub fn to_array(&self) -> [f64; NUM_FEATURES] {
        [
            self.num_chars,
            self.num_words,
            self.has_digits,
            self.has_caps_token,
            self.longest_word,
        ]
    }
}

/// Computes the engineered features for a single title.
///
/// Lengths are counted in Unicode scalar values and words are
/// whitespace-separated tokens, so a title without whitespace is one word and
/// a blank title has none. The information separators U+001C to U+001F also
/// split words.
pub fn extract(title: &str) -> TitleFeatures {
    let words: Vec<&str> = title
        .split(is_word_separator)
        .filter(|w| !w.is_empty())
        .collect();
    let longest_word = words
        .iter()
        .map(|w| w.chars().count())
        .max()
        .unwrap_or(0);

    TitleFeatures {
        num_chars: title.chars().count() as f64,
        num_words: words.len() as f64,
        has_digits: flag(DIGIT.is_match(title)),
        has_caps_token: flag(CAPS_TOKEN.is_match(title)),
        longest_word: longest_word as f64,
    }
}

/// Computes features for a column of titles; missing titles count as empty.
pub fn extract_batch<S: AsRef<str>>(titles: &[Option<S>]) -> Vec<TitleFeatures> {
    titles
        .iter()
        .map(|t| extract(t.as_ref().map(|s| AsRef::<str>::as_ref(s)).unwrap_or("")))
        .collect()
}

fn is_word_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn flag(b: bool) -> f64 {
    if b {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_title() {
        assert_eq!(extract(""), TitleFeatures::default());
    }

    #[test]
    fn test_mixed_title() {
        let f = extract("ABC widget 123");
        assert_eq!(f.num_chars, 14.0);
        assert_eq!(f.num_words, 3.0);
        assert_eq!(f.has_digits, 1.0);
        assert_eq!(f.has_caps_token, 1.0);
        assert_eq!(f.longest_word, 6.0);
    }

    #[test]
    fn test_single_token() {
        let f = extract("smartphone");
        assert_eq!(f.num_words, 1.0);
        assert_eq!(f.longest_word, 10.0);
        assert_eq!(f.has_caps_token, 0.0);
    }

    #[test]
    fn test_caps_token_needs_word_boundary() {
        // "USB3" has no boundary between "B" and "3"
        assert_eq!(extract("USB3 cable").has_caps_token, 0.0);
        assert_eq!(extract("USB-C cable").has_caps_token, 1.0);
        assert_eq!(extract("A cable").has_caps_token, 0.0);
    }

    #[test]
    fn test_information_separators_split_words() {
        let f = extract("a\u{1f}b\u{1c}cd");
        assert_eq!(f.num_words, 3.0);
        assert_eq!(f.longest_word, 2.0);
        assert_eq!(f.num_chars, 6.0);
        assert_eq!(extract("\u{1d}\u{1e}").num_words, 0.0);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let f = extract("café crème");
        assert_eq!(f.num_chars, 10.0);
        assert_eq!(f.longest_word, 5.0);
    }

    #[test]
    fn test_batch_treats_missing_as_empty() {
        let titles = vec![Some("Red shoe"), None];
        let features = extract_batch(&titles);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].num_words, 2.0);
        assert_eq!(features[1], TitleFeatures::default());
    }
}
