//! White similarity through the public API.

use super::common::window;
use seqdist::{white_similarity, white_similarity_slice, Window};

#[test]
fn test_hand_computed_bigrams() {
    assert_eq!(white_similarity("night", "nacht", window(2)), 25.0);
    assert_eq!(white_similarity("Healed", "Sealed", window(2)), 80.0);
    // {Fr, ra, an, nc, ce} vs {Fr, re, en, nc, ch}
    assert_eq!(white_similarity("France", "French", window(2)), 40.0);
}

#[test]
fn test_default_window() {
    // Three of four 5-unit windows shared on each side
    assert_eq!(
        white_similarity("abcdefgh", "abcdefgx", Window::default()),
        75.0
    );
    assert_eq!(
        white_similarity("abcdefgh", "bcdefghi", Window::default()),
        75.0
    );
}

#[test]
fn test_emptiness_checked_before_equality() {
    assert_eq!(white_similarity("", "", window(1)), 0.0);
}

#[test]
fn test_equal_short_inputs_are_identical() {
    assert_eq!(white_similarity("a", "a", Window::default()), 100.0);
}

#[test]
fn test_unequal_short_inputs_define_zero() {
    let score = white_similarity("abc", "xyz", Window::default());
    assert_eq!(score, 0.0);
}

#[test]
fn test_unit_window_skips_last_unit() {
    // {a} vs {b}: the trailing unit never forms a window
    assert_eq!(white_similarity("ab", "ba", window(1)), 0.0);
    // {a} vs {a, b}
    let score = white_similarity("aab", "abb", window(1));
    assert!((score - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_symmetric() {
    for (left, right) in [("night", "nacht"), ("France", "French"), ("aab", "abb")] {
        assert_eq!(
            white_similarity(left, right, window(2)),
            white_similarity(right, left, window(2))
        );
    }
}

#[test]
fn test_case_sensitive() {
    assert!(white_similarity("HEALED", "healed", window(2)) < 1.0);
}

#[test]
fn test_slices() {
    let left = [1u32, 2, 3, 4];
    let right = [2u32, 3, 4, 5];
    // {12, 23, 34} vs {23, 34, 45}
    let score = white_similarity_slice(&left, &right, window(2));
    assert!((score - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_multibyte_characters_compare_as_bytes() {
    // {ca, af, f\xC3, \xC3\xA9} vs {ca, af, fe}: two shared of seven
    let score = white_similarity("café", "cafe", window(2));
    assert!((score - 400.0 / 7.0).abs() < 1e-9, "got {}", score);
}
