// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Re-exports the `approx` assertion macros; toast offsets and opacities are
//! sums and ratios of `f32` values that `assert_eq!` compares too strictly.

pub use approx::assert_abs_diff_eq;
