// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Geometry and opacity values are `f32`; these re-exports from `approx` are
//! used instead of `assert_eq!` wherever arithmetic may round.

pub use approx::assert_abs_diff_eq;
