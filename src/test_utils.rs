// SPDX-License-Identifier: MPL-2.0
//! Shared test helpers.
//!
//! Float assertions come from `approx`, since animated values are sampled
//! through easing curves and never compare exactly.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons of sampled animation values.
pub const F32_EPSILON: f32 = 1e-6;

/// Shorthand for building test timings.
pub fn ms(value: u64) -> std::time::Duration {
    std::time::Duration::from_millis(value)
}
