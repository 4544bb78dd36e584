// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation of the toast's presence.
//!
//! A single "presence" value drives both animated properties: `0.0` is fully
//! hidden (transparent, parked above the window) and `1.0` is fully shown.
//! Opacity and vertical offset are derived from it, which keeps the two
//! properties in lockstep the way a pair of parallel animations would.

use crate::ui::design_tokens::motion;
use std::time::{Duration, Instant};

/// Default length of the entry and exit transitions.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// A presence animation from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Transition {
    #[must_use]
    pub fn new(from: f32, to: f32, started_at: Instant, duration: Duration) -> Self {
        Self {
            from: from.clamp(0.0, 1.0),
            to: to.clamp(0.0, 1.0),
            started_at,
            duration,
        }
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased presence value at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let t = ease_in_out(self.progress(now));
        self.from + (self.to - self.from) * t
    }

    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Cubic ease-in-out.
fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

/// Opacity for a presence value.
#[must_use]
pub fn opacity(presence: f32) -> f32 {
    presence.clamp(0.0, 1.0)
}

/// Vertical offset for a presence value, `TOAST_OFFSCREEN_OFFSET` when hidden
/// and `0.0` at rest.
#[must_use]
pub fn offset(presence: f32) -> f32 {
    (1.0 - presence.clamp(0.0, 1.0)) * motion::TOAST_OFFSCREEN_OFFSET
}
