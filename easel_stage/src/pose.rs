// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pose state, scale limits, and the applied placement.

use kurbo::{Affine, Point, Vec2};

/// Accumulated transform state of a canvas inside its stage.
///
/// A pose tracks the four quantities that gesture sequences accumulate: a
/// uniform scale, an unbounded rotation, the summed pan offset, and the
/// stage-space position of the canvas center. The center is manipulated
/// directly by anchored scaling and rotation, so it is state of its own and
/// not derivable from the other three fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Uniform scale factor. Kept within the stage's [`ScaleLimits`].
    pub scale: f64,
    /// Accumulated rotation in radians.
    ///
    /// Unbounded: successive gestures add up without wraparound, so the
    /// value can exceed a full turn in either direction.
    pub rotation: f64,
    /// Accumulated pan offset.
    pub translation: Vec2,
    /// Stage-space position of the canvas center point.
    pub center: Point,
}

impl Pose {
    /// An identity pose at `center`: scale 1, no rotation, no pan.
    #[must_use]
    pub fn centered_at(center: Point) -> Self {
        Self {
            scale: 1.0,
            rotation: 0.0,
            translation: Vec2::ZERO,
            center,
        }
    }
}

/// Inclusive bounds on the accumulated scale factor.
///
/// The bounds are normalized on construction so that `min <= max`. They are
/// applied on every scale mutation; replacing the limits on a stage does not
/// itself re-clamp an out-of-range scale, the next mutation does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLimits {
    min: f64,
    max: f64,
}

impl ScaleLimits {
    /// Creates scale limits, swapping the bounds if given in reverse order.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    /// Lower bound on the scale factor.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound on the scale factor.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `scale` into the bounds.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }
}

impl Default for ScaleLimits {
    /// The default bounds, scale factors from `0.1` to `40.0`.
    fn default() -> Self {
        Self {
            min: 0.1,
            max: 40.0,
        }
    }
}

/// The visual state currently applied to the canvas.
///
/// A placement is what a host needs to put the canvas on screen: the canvas
/// center position plus the rotation and uniform scale applied about that
/// center. The placement rotation usually equals [`Pose::rotation`]; after a
/// fit it is zero while the pose keeps its accumulated value, and the next
/// scale or rotation gesture folds the stored value back into the applied
/// transform (see [`Stage::fit_now`]).
///
/// [`Stage::fit_now`]: crate::Stage::fit_now
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Stage-space position of the canvas center point.
    pub center: Point,
    /// Uniform scale applied about the center.
    pub scale: f64,
    /// Rotation in radians applied about the center.
    pub rotation: f64,
}

impl Placement {
    /// The transform applied to the canvas about its center point,
    /// rotation composed over scale.
    #[must_use]
    pub fn transform(&self) -> Affine {
        Affine::rotate(self.rotation) * Affine::scale(self.scale)
    }

    /// Maps canvas-local coordinates, measured from the canvas center, into
    /// stage coordinates.
    #[must_use]
    pub fn canvas_to_stage(&self) -> Affine {
        Affine::translate(self.center.to_vec2()) * self.transform()
    }
}
