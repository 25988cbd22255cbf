// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation for the lightbox image transform.
//!
//! The view always renders a sampled transform. Outside a transition that
//! is the target itself; during one, the sample blends from the captured
//! start transform toward the target along the configured curve. Sampling
//! takes the target at call time, so a target that moves mid-flight (a
//! drag in progress) is followed without restarting the clock.

use std::time::{Duration, Instant};

use super::pan::PanOffset;

/// How long the image takes to settle after a zoom toggle, a navigation,
/// or a drag release.
pub const SETTLE_DURATION: Duration = Duration::from_millis(250);

/// How long the image takes to catch up with the pointer during a drag.
/// Short enough to feel immediate, long enough to absorb event jitter.
pub const DRAG_FOLLOW_DURATION: Duration = Duration::from_millis(80);

/// Easing curve applied to transition progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// Constant speed, used while dragging so the image tracks the pointer.
    Linear,
    /// Fast start with a gentle landing, used everywhere else.
    EaseOutCubic,
}

impl Curve {
    /// Maps linear progress `t` in `[0, 1]` through the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Visual transform of the image: zoom factor over the fitted size plus
/// pan displacement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub pan: PanOffset,
}

impl Transform {
    /// The resting transform: fitted scale, centered.
    pub const FITTED: Self = Self {
        scale: 1.0,
        pan: PanOffset::ZERO,
    };

    fn lerp(from: Self, to: Self, t: f32) -> Self {
        Self {
            scale: from.scale + (to.scale - from.scale) * t,
            pan: PanOffset {
                x: from.pan.x + (to.pan.x - from.pan.x) * t,
                y: from.pan.y + (to.pan.y - from.pan.y) * t,
            },
        }
    }
}

/// An in-flight interpolation from a captured transform toward the current
/// target.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    from: Transform,
    started_at: Instant,
    duration: Duration,
    curve: Curve,
}

impl Transition {
    /// Starts a transition from the given transform at `now`.
    #[must_use]
    pub fn begin(from: Transform, duration: Duration, curve: Curve, now: Instant) -> Self {
        Self {
            from,
            started_at: now,
            duration,
            curve,
        }
    }

    /// Curved progress in `[0, 1]` at time `now`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started_at);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0);
        self.curve.apply(t)
    }

    /// Transform to render at time `now`, blending toward `target`.
    #[must_use]
    pub fn sample(&self, target: Transform, now: Instant) -> Transform {
        Transform::lerp(self.from, target, self.progress(now))
    }

    /// Whether the transition has run its full duration at time `now`.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.duration
    }
}
