//! Differential testing: compare optimized implementations against oracles.
//!
//! Each optimized algorithm is tested against a simple, obviously-correct
//! oracle. If they disagree, the oracle is right. Edit distance is also checked
//! against `strsim`, an independent implementation, over bytes and over chars.

use super::common::{
    any_weights, small_alphabet_word, unicode_word, window, window_len, word,
};
use super::oracles::{
    oracle_failure_table, oracle_kmp_score, oracle_levenshtein, oracle_needleman_wunsch,
    oracle_white_similarity, oracle_windows,
};
use proptest::prelude::*;
use seqdist::{
    failure_table, kmp_score, levenshtein, levenshtein_slice, needleman_wunsch, white_similarity,
    windows,
};

/// strsim's generic edit distance over the UTF-8 bytes of both strings.
fn strsim_bytes(a: &str, b: &str) -> usize {
    strsim::generic_levenshtein(&a.as_bytes().to_vec(), &b.as_bytes().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Rolling-row edit distance matches the full table.
    #[test]
    fn diff_levenshtein(a in small_alphabet_word(), b in small_alphabet_word()) {
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));
    }

    /// Edit distance matches strsim's byte-level distance on arbitrary Unicode.
    #[test]
    fn diff_levenshtein_strsim(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        prop_assert_eq!(levenshtein(&a, &b), strsim_bytes(&a, &b));
    }

    /// Multi-byte words count bytes through `&str` and chars through slices.
    #[test]
    fn diff_levenshtein_unicode(a in unicode_word(), b in unicode_word()) {
        prop_assert_eq!(levenshtein(&a, &b), strsim_bytes(&a, &b));
        prop_assert_eq!(levenshtein(&a, &b), oracle_levenshtein(&a, &b));

        let left: Vec<char> = a.chars().collect();
        let right: Vec<char> = b.chars().collect();
        prop_assert_eq!(levenshtein_slice(&left, &right), strsim::levenshtein(&a, &b));
    }

    /// Two-row alignment matches the full table for any weights.
    #[test]
    fn diff_needleman_wunsch(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        weights in any_weights(),
    ) {
        let fast = needleman_wunsch(&a, &b, weights);
        let slow = oracle_needleman_wunsch(
            &a, &b, weights.matched(), weights.mismatched(), weights.gap(),
        );
        prop_assert!(
            (fast - slow).abs() < 1e-9,
            "needleman_wunsch({:?}, {:?}) = {} but oracle = {}",
            a, b, fast, slow
        );
    }

    /// Window extraction matches the explicit offset loop.
    #[test]
    fn diff_windows(s in word(), w in window_len()) {
        let fast: Vec<Vec<u8>> = windows(s.as_bytes(), w)
            .map(<[u8]>::to_vec)
            .collect();
        prop_assert_eq!(fast, oracle_windows(&s, w.get()));
    }

    /// Hash-set Dice matches ordered-set Dice.
    #[test]
    fn diff_white_similarity(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        w in window_len(),
    ) {
        let fast = white_similarity(&a, &b, w);
        let slow = oracle_white_similarity(&a, &b, w.get());
        prop_assert!((fast - slow).abs() < 1e-9, "{} != {}", fast, slow);
    }

    /// KMP counting matches brute-force counting.
    #[test]
    fn diff_kmp_score(
        a in small_alphabet_word(),
        b in small_alphabet_word(),
        w in window_len(),
    ) {
        prop_assert_eq!(kmp_score(&a, &b, w), oracle_kmp_score(&a, &b, w.get()));
    }

    /// Windowed measures slide over bytes, splitting multi-byte characters.
    #[test]
    fn diff_windowed_unicode(a in unicode_word(), b in unicode_word(), w in window_len()) {
        prop_assert_eq!(kmp_score(&a, &b, w), oracle_kmp_score(&a, &b, w.get()));
        let fast = white_similarity(&a, &b, w);
        let slow = oracle_white_similarity(&a, &b, w.get());
        prop_assert!((fast - slow).abs() < 1e-9, "{} != {}", fast, slow);
    }

    /// Prefix function matches the definition.
    #[test]
    fn diff_failure_table(pattern in "[ab]{1,16}") {
        let units: Vec<char> = pattern.chars().collect();
        prop_assert_eq!(failure_table(&units), oracle_failure_table(&units));
    }
}

#[test]
fn diff_unit_window_regression() {
    // The unit window is the one place the offset cap bites.
    for (a, b) in [("ab", "abb"), ("abb", "ab"), ("a", "a"), ("ab", "ba")] {
        assert_eq!(kmp_score(a, b, window(1)), oracle_kmp_score(a, b, 1));
        assert_eq!(
            white_similarity(a, b, window(1)),
            oracle_white_similarity(a, b, 1)
        );
    }
}
