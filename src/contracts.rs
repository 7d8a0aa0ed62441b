//! Runtime contracts for the comparison algorithms.
//!
//! Two kinds of check live here:
//!
//! 1. `check_*` functions use `debug_assert!`. They are **zero-cost in release
//!    builds** and catch algorithmic mistakes while tests run.
//! 2. `require_*` functions use `assert!`. They guard size preconditions whose
//!    violation would otherwise wrap silently, and stay on in release.
//!
//! | Contract                      | Property                                       |
//! |-------------------------------|------------------------------------------------|
//! | `require_addressable`         | `len(left) + len(right)` fits in `usize`       |
//! | `require_score_fits`          | patterns x text length fits in `u64`           |
//! | `check_edit_distance_bounds`  | `|l - r| <= distance <= max(l, r)`             |
//! | `check_alignment_boundary`    | row 0 is `j * gap`, accumulated                |
//! | `check_window_count`          | window count follows the offset rule           |
//! | `check_failure_table`         | every entry is a proper border                 |
//! | `check_percentage`            | similarity in `[0, 100]`                       |

// ============================================================================
// SIZE PRECONDITIONS (always on)
// ============================================================================

/// Both lengths together must be representable, or the DP cells could wrap.
///
/// # Panics
/// Panics if `left_len + right_len` overflows `usize`.
#[inline]
pub fn require_addressable(left_len: usize, right_len: usize) {
    assert!(
        left_len.checked_add(right_len).is_some(),
        "inputs too long: {} + {} units overflows usize",
        left_len,
        right_len
    );
}

/// The occurrence score is at most one hit per pattern per text position.
///
/// # Panics
/// Panics if `patterns * text_len` exceeds `u64::MAX`.
#[inline]
pub fn require_score_fits(patterns: usize, text_len: usize) {
    let ceiling = (patterns as u128) * (text_len as u128);
    assert!(
        ceiling <= u128::from(u64::MAX),
        "inputs too long: {} patterns over {} units may overflow the score",
        patterns,
        text_len
    );
}

// ============================================================================
// EDIT DISTANCE CONTRACTS
// ============================================================================

/// Check that an edit distance lies within its trivial bounds.
///
/// # Panics (debug builds only)
/// Panics if `distance < |left_len - right_len|` or `distance > max(left_len, right_len)`.
#[inline]
pub fn check_edit_distance_bounds(left_len: usize, right_len: usize, distance: usize) {
    debug_assert!(
        distance >= left_len.abs_diff(right_len),
        "Contract violation: distance {} below length difference of {} and {}",
        distance,
        left_len,
        right_len
    );
    debug_assert!(
        distance <= left_len.max(right_len),
        "Contract violation: distance {} above max({}, {})",
        distance,
        left_len,
        right_len
    );
}

// ============================================================================
// ALIGNMENT CONTRACTS
// ============================================================================

/// Check the boundary row of an alignment table.
///
/// # Panics (debug builds only)
/// Panics if `row[0] != 0` or any `row[j] != row[j - 1] + gap`.
#[inline]
pub fn check_alignment_boundary(row: &[f64], gap: f64) {
    debug_assert!(
        row.first().map_or(true, |&origin| origin == 0.0),
        "Contract violation: alignment origin is not 0"
    );
    for j in 1..row.len() {
        debug_assert!(
            row[j] == row[j - 1] + gap,
            "Contract violation: boundary cell {} is {} but expected {}",
            j,
            row[j],
            row[j - 1] + gap
        );
    }
}

// ============================================================================
// WINDOW CONTRACTS
// ============================================================================

/// Check a window count against the extraction rule.
///
/// Offsets below `len - 1` whose window fits entirely.
///
/// # Panics (debug builds only)
/// Panics if `count` disagrees with a direct enumeration of offsets.
#[inline]
pub fn check_window_count(len: usize, window: usize, count: usize) {
    if cfg!(debug_assertions) {
        let expected = (0..len.saturating_sub(1))
            .take_while(|start| start + window <= len)
            .count();
        debug_assert_eq!(
            count, expected,
            "Contract violation: {} windows of {} over {} units, expected {}",
            count, window, len, expected
        );
    }
}

/// Check that a failure table is the prefix function of its pattern.
///
/// # Panics (debug builds only)
/// Panics if `failure[0] != 0`, if some `failure[i] > i`, or if
/// `pattern[..failure[i]]` is not a suffix of `pattern[..=i]`.
#[inline]
pub fn check_failure_table<T: PartialEq>(pattern: &[T], failure: &[usize]) {
    debug_assert_eq!(
        pattern.len(),
        failure.len(),
        "Contract violation: failure table length differs from pattern"
    );
    if cfg!(debug_assertions) {
        for (i, &border) in failure.iter().enumerate() {
            debug_assert!(
                border <= i,
                "Contract violation: failure[{}] = {} is not a proper border",
                i,
                border
            );
            debug_assert!(
                pattern[..border] == pattern[i + 1 - border..=i],
                "Contract violation: failure[{}] = {} is not a border",
                i,
                border
            );
        }
    }
}

// ============================================================================
// SIMILARITY CONTRACTS
// ============================================================================

/// Check that a percentage similarity is in range.
///
/// # Panics (debug builds only)
/// Panics if `value` is NaN or outside `[0, 100]`.
#[inline]
pub fn check_percentage(value: f64) {
    debug_assert!(
        (0.0..=100.0).contains(&value),
        "Contract violation: similarity {} outside [0, 100]",
        value
    );
}
