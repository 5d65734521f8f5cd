// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognition policy: how a host's gesture facility should arbitrate the
//! stage's gestures.

/// The gesture kinds a stage host arbitrates between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureKind {
    /// Multi-finger drag translating the canvas.
    Pan,
    /// Pinch scaling the canvas.
    Pinch,
    /// Two-finger rotation.
    Rotate,
    /// Multi-finger tap.
    Tap {
        /// Number of fingers in the tap.
        touch_count: usize,
    },
}

impl GestureKind {
    /// Returns `true` for the gestures that manipulate the canvas pose:
    /// pan, pinch, and rotation.
    #[must_use]
    pub fn manipulates_pose(self) -> bool {
        matches!(self, Self::Pan | Self::Pinch | Self::Rotate)
    }
}

/// Recognition constraints for hosts wiring up their toolkit's recognizers.
///
/// The stage's gestures are deliberately permissive: pan, pinch, and
/// rotation all recognize at the same time, which is what lets a single
/// two-finger interaction scale, rotate, and translate at once. The only
/// ordering constraint is that the pose-manipulating gestures wait for the
/// three-finger tap to fail before claiming the touches; the two-finger tap
/// races them freely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecognitionPolicy {
    /// Minimum number of touches before a pan recognizes. Single-finger
    /// drags are left to the canvas itself (drawing), so this defaults
    /// to 2.
    pub pan_min_touches: usize,
}

impl Default for RecognitionPolicy {
    fn default() -> Self {
        Self { pan_min_touches: 2 }
    }
}

impl RecognitionPolicy {
    /// Whether two gestures may recognize at the same time.
    ///
    /// Always `true` for every pairing; combined manipulation relies on it.
    #[must_use]
    pub fn recognizes_simultaneously(&self, _a: GestureKind, _b: GestureKind) -> bool {
        true
    }

    /// Whether `claimant` must wait for `other` to fail before recognizing.
    #[must_use]
    pub fn requires_failure_of(&self, claimant: GestureKind, other: GestureKind) -> bool {
        claimant.manipulates_pose() && matches!(other, GestureKind::Tap { touch_count: 3 })
    }
}
