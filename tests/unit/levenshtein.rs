//! Edit distance through the public API.

use seqdist::{levenshtein, levenshtein_slice, levenshtein_within};

#[test]
fn test_known_distances() {
    let cases = [
        ("kitten", "sitting", 3),
        ("flaw", "lawn", 2),
        ("intention", "execution", 5),
        ("book", "back", 2),
        ("a", "b", 1),
        ("", "", 0),
    ];
    for (left, right, expected) in cases {
        assert_eq!(
            levenshtein(left, right),
            expected,
            "levenshtein({:?}, {:?})",
            left,
            right
        );
    }
}

#[test]
fn test_zero_only_for_identical() {
    assert_eq!(levenshtein("same", "same"), 0);
    assert_ne!(levenshtein("same", "Same"), 0);
}

#[test]
fn test_no_common_units_costs_longer_length() {
    assert_eq!(levenshtein("aaaa", "bb"), 4);
    assert_eq!(levenshtein("xyz", "abcdef"), 6);
}

#[test]
fn test_case_sensitive() {
    assert_eq!(levenshtein("ABC", "abc"), 3);
}

#[test]
fn test_str_and_slice_agree_on_ascii() {
    assert_eq!(
        levenshtein("kitten", "sitting"),
        levenshtein_slice(b"kitten", b"sitting")
    );
}

#[test]
fn test_multibyte_characters_compare_as_bytes() {
    // é is two UTF-8 bytes, neither of them 'e'
    assert_eq!(levenshtein("e", "é"), 2);
    assert_eq!(levenshtein("cafe", "café"), 2);

    // Callers wanting scalar values pass chars
    let left: Vec<char> = "cafe".chars().collect();
    let right: Vec<char> = "café".chars().collect();
    assert_eq!(levenshtein_slice(&left, &right), 1);
}

#[test]
fn test_token_sequences() {
    let left = ["the", "quick", "brown", "fox"];
    let right = ["the", "slow", "brown", "dog", "sat"];
    assert_eq!(levenshtein_slice(&left, &right), 3);
}

#[test]
fn test_within_agrees_with_distance() {
    for (left, right) in [("kitten", "sitting"), ("flaw", "lawn"), ("", "abc")] {
        let distance = levenshtein(left, right);
        assert!(levenshtein_within(left, right, distance));
        if distance > 0 {
            assert!(!levenshtein_within(left, right, distance - 1));
        }
    }
}
