use prodcat::classifier::features::{extract, extract_batch, FEATURE_NAMES};
use prodcat::TitleFeatures;

#[test]
fn test_char_and_word_counts() {
    let samples = [
        "",
        "   ",
        "widget",
        "ABC widget 123",
        "  leading and trailing  ",
        "tab\tseparated\nlines",
        "Größe 42 Schuh",
    ];
    for s in samples {
        let f = extract(s);
        assert_eq!(f.num_chars, s.chars().count() as f64, "chars of {:?}", s);
        let expected_words = if s.trim().is_empty() {
            0
        } else {
            s.split_whitespace().count()
        };
        assert_eq!(f.num_words, expected_words as f64, "words of {:?}", s);
    }
}

#[test]
fn test_empty_title_is_all_zero() {
    let f = extract("");
    assert_eq!(f.to_array(), [0.0; 5]);
}

#[test]
fn test_reference_title() {
    let f = extract("ABC widget 123");
    assert_eq!(f.has_digits, 1.0);
    assert_eq!(f.has_caps_token, 1.0);
    assert_eq!(f.longest_word, 6.0);
}

#[test]
fn test_no_whitespace_is_one_word() {
    assert_eq!(extract("USB-C-cable").num_words, 1.0);
}

#[test]
fn test_batch_is_deterministic() {
    let titles = vec![Some("Red Shoe 42"), None, Some("LED lamp")];
    let first = extract_batch(&titles);
    let second = extract_batch(&titles);
    assert_eq!(first, second);
    assert_eq!(first[1], TitleFeatures::default());
    assert_eq!(first[2].has_caps_token, 1.0);
}

#[test]
fn test_feature_names_order() {
    assert_eq!(
        FEATURE_NAMES,
        ["num_chars", "num_words", "has_digits", "has_caps_token", "longest_word"]
    );
}
