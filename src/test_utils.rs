// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for the crate's unit tests.
//!
//! Brightness levels, adjustment gains and configured durations are floats
//! that pass through clamping and scaling, so the controller, config and
//! fake-device tests compare them with `approx` instead of `assert_eq!`.

pub use approx::assert_abs_diff_eq;

/// Tolerance for brightness levels after one or more drag ticks.
pub const LEVEL_EPSILON: f32 = 1e-5;

/// Tolerance for a single gain multiplication.
pub const GAIN_EPSILON: f32 = 1e-6;
