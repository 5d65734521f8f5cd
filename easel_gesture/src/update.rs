// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture callback payloads.

use kurbo::Point;
use smallvec::SmallVec;

use crate::arbitration::GestureKind;
use crate::phase::GesturePhase;

/// Touch locations carried by a gesture update.
///
/// Inline capacity of two covers pinch and rotation without allocating.
pub type TouchList = SmallVec<[Point; 2]>;

/// One pinch (scale) recognizer callback.
#[derive(Clone, Debug, PartialEq)]
pub struct PinchUpdate {
    /// Callback phase.
    pub phase: GesturePhase,
    /// The recognizer's reported location, the centroid of the touches.
    pub location: Point,
    /// Active touch locations in stage coordinates.
    pub touches: TouchList,
    /// Multiplicative scale factor since the previous callback.
    ///
    /// Hosts bridging recognizers that report a cumulative scale must reset
    /// the recognizer's value after each callback so the next delivery is
    /// incremental again.
    pub factor: f64,
}

/// One rotation recognizer callback.
#[derive(Clone, Debug, PartialEq)]
pub struct RotateUpdate {
    /// Callback phase.
    pub phase: GesturePhase,
    /// The recognizer's reported location, the centroid of the touches.
    pub location: Point,
    /// Active touch locations in stage coordinates.
    pub touches: TouchList,
    /// Rotation in radians since the previous callback.
    ///
    /// Incremental, with the same host obligation as
    /// [`PinchUpdate::factor`].
    pub delta: f64,
}

/// One pan recognizer callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanUpdate {
    /// Callback phase.
    pub phase: GesturePhase,
    /// The recognizer's reported location, the centroid of the touches.
    pub location: Point,
    /// Number of touches active in this callback.
    pub touch_count: usize,
}

/// One recognized multi-finger tap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TapUpdate {
    /// Number of fingers in the tap.
    pub touch_count: usize,
}

/// A host-delivered gesture callback.
///
/// This is the inbound vocabulary of [`GestureController::handle`]: one
/// value per recognizer callback, already recognized and already
/// incremental.
///
/// [`GestureController::handle`]: crate::GestureController::handle
#[derive(Clone, Debug, PartialEq)]
pub enum GestureUpdate {
    /// Pinch (scale) update.
    Pinch(PinchUpdate),
    /// Rotation update.
    Rotate(RotateUpdate),
    /// Pan (translation) update.
    Pan(PanUpdate),
    /// Multi-finger tap.
    Tap(TapUpdate),
}

impl GestureUpdate {
    /// The gesture kind this update belongs to.
    #[must_use]
    pub fn kind(&self) -> GestureKind {
        match self {
            Self::Pinch(_) => GestureKind::Pinch,
            Self::Rotate(_) => GestureKind::Rotate,
            Self::Pan(_) => GestureKind::Pan,
            Self::Tap(update) => GestureKind::Tap {
                touch_count: update.touch_count,
            },
        }
    }
}

/// The anchor a pinch or rotation acts about: the midpoint of the two
/// touches when exactly two are active, otherwise the reported location.
///
/// Recognizer centroids drift when a finger lifts mid-gesture; preferring
/// the two-touch midpoint keeps the anchor on the line between the fingers
/// actually driving the gesture.
#[must_use]
pub fn effective_anchor(location: Point, touches: &[Point]) -> Point {
    if let [a, b] = touches {
        a.midpoint(*b)
    } else {
        location
    }
}
