// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased placement transitions for hosts that animate fits.

use crate::pose::Placement;

/// An eased interpolation from one [`Placement`] to another.
///
/// The transition is a plain value with no clock of its own. Hosts sample it
/// with their frame timestamps, in whatever time unit they keep `duration`
/// in, and apply the returned placements themselves. Interpolation runs on a
/// decelerating cubic curve, matching the feel of toolkit "ease out" view
/// animations.
///
/// Rotation interpolates numerically between the two placements' values. The
/// transitions produced by [`Stage::fit_transition`] always end at rotation
/// zero, so a canvas rotated by `3π` unwinds visibly rather than taking a
/// shortest-path turn.
///
/// [`Stage::fit_transition`]: crate::Stage::fit_transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitTransition {
    from: Placement,
    to: Placement,
    duration: f64,
}

impl FitTransition {
    /// The default duration, `0.3` in the host's time unit (seconds, for
    /// hosts that sample with second timestamps).
    pub const DEFAULT_DURATION: f64 = 0.3;

    /// Creates a transition from `from` to `to` with the default duration.
    #[must_use]
    pub fn new(from: Placement, to: Placement) -> Self {
        Self {
            from,
            to,
            duration: Self::DEFAULT_DURATION,
        }
    }

    /// Builder-style method for setting the duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// The placement the transition starts from.
    #[must_use]
    pub fn start(&self) -> Placement {
        self.from
    }

    /// The placement the transition ends at.
    #[must_use]
    pub fn target(&self) -> Placement {
        self.to
    }

    /// The duration, in the host's time unit.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Samples the transition `elapsed` time units after its start.
    ///
    /// `elapsed` is clamped into `[0, duration]`, so samples before the
    /// start return the start placement and samples at or past the duration
    /// return the target exactly. A non-positive duration snaps straight to
    /// the target.
    #[must_use]
    pub fn sample(&self, elapsed: f64) -> Placement {
        if self.duration <= 0.0 || elapsed >= self.duration {
            return self.to;
        }
        let t = ease_out_cubic((elapsed / self.duration).clamp(0.0, 1.0));
        Placement {
            center: self.from.center.lerp(self.to.center, t),
            scale: lerp(self.from.scale, self.to.scale, t),
            rotation: lerp(self.from.rotation, self.to.rotation, t),
        }
    }

    /// Returns `true` once `elapsed` has reached the duration.
    #[must_use]
    pub fn is_finished(&self, elapsed: f64) -> bool {
        elapsed >= self.duration
    }
}

/// The decelerating cubic curve used by [`FitTransition`]: steep at the
/// start, flat at the end, with `ease_out_cubic(0) == 0` and
/// `ease_out_cubic(1) == 1`.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t;
    1.0 - u * u * u
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
