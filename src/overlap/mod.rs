// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Window-based comparison: shared windows (Dice) and window occurrences (KMP).
//!
//! Both slide a fixed-length window across a sequence with stride 1. Starting
//! offsets run from 0 up to, but not including, `len - 1`, and a window that
//! would run past the end is dropped rather than padded. For a window of one
//! unit that means the last unit never starts a window.

mod kmp;
mod white;
mod windows;

pub use kmp::*;
pub use white::*;
pub use windows::windows;
