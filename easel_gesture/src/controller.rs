// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The controller: applies gesture callbacks to a stage.

use easel_stage::Stage;
use kurbo::Vec2;

use crate::pan::PanSession;
use crate::phase::GesturePhase;
use crate::update::{
    GestureUpdate, PanUpdate, PinchUpdate, RotateUpdate, TapUpdate, effective_anchor,
};

/// Notification produced by applying a gesture update to a stage.
///
/// Mirrors what a canvas host typically forwards to its own observers, with
/// scale and rotation reported as the new accumulated values and
/// translation as the applied delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StageEvent {
    /// The accumulated scale changed; carries the new (clamped) value.
    ScaleChanged(f64),
    /// The accumulated rotation changed; carries the new value in radians.
    RotationChanged(f64),
    /// The canvas was translated; carries the applied delta.
    Translated(Vec2),
    /// A two- or three-finger tap was recognized; carries the finger count.
    Tap(usize),
}

/// Applies host gesture callbacks to a [`Stage`] and reports the resulting
/// [`StageEvent`]s.
///
/// The controller owns the transient pan bookkeeping (a [`PanSession`]) and
/// consumes pinch and rotation deltas directly, since those arrive already
/// incremental. Pinch and rotation anchor at the two-touch midpoint when
/// exactly two touches are down (see [`effective_anchor`]).
///
/// ## Minimal example
///
/// ```
/// use easel_gesture::{GestureController, GesturePhase, GestureUpdate, PinchUpdate, StageEvent};
/// use easel_stage::Stage;
/// use kurbo::{Point, Size};
/// use smallvec::smallvec;
///
/// let mut stage = Stage::new(Size::new(100.0, 100.0));
/// stage.attach(Size::new(100.0, 100.0));
/// let mut controller = GestureController::new();
///
/// let event = controller.handle(
///     &mut stage,
///     &GestureUpdate::Pinch(PinchUpdate {
///         phase: GesturePhase::Changed,
///         location: Point::new(50.0, 50.0),
///         touches: smallvec![Point::new(30.0, 50.0), Point::new(70.0, 50.0)],
///         factor: 2.0,
///     }),
/// );
/// assert_eq!(event, Some(StageEvent::ScaleChanged(2.0)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct GestureController {
    pan: PanSession,
}

impl GestureController {
    /// Creates a controller with no pan in flight.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a pan session is currently tracked.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_panning()
    }

    /// Applies one gesture callback to `stage`.
    ///
    /// Returns the notification the update produced, if any. Updates
    /// against a detached stage are ignored entirely, pan bookkeeping
    /// included.
    pub fn handle(&mut self, stage: &mut Stage, update: &GestureUpdate) -> Option<StageEvent> {
        if !stage.is_attached() {
            return None;
        }
        match update {
            GestureUpdate::Pinch(update) => Self::on_pinch(stage, update),
            GestureUpdate::Rotate(update) => Self::on_rotate(stage, update),
            GestureUpdate::Pan(update) => self.on_pan(stage, update),
            GestureUpdate::Tap(update) => Self::on_tap(update),
        }
    }

    fn on_pinch(stage: &mut Stage, update: &PinchUpdate) -> Option<StageEvent> {
        if !update.phase.is_active() {
            return None;
        }
        let anchor = effective_anchor(update.location, &update.touches);
        stage.scale_about(anchor, update.factor);
        stage.pose().map(|pose| StageEvent::ScaleChanged(pose.scale))
    }

    fn on_rotate(stage: &mut Stage, update: &RotateUpdate) -> Option<StageEvent> {
        if !update.phase.is_active() {
            return None;
        }
        let anchor = effective_anchor(update.location, &update.touches);
        stage.rotate_about(anchor, update.delta);
        stage.pose().map(|pose| StageEvent::RotationChanged(pose.rotation))
    }

    fn on_pan(&mut self, stage: &mut Stage, update: &PanUpdate) -> Option<StageEvent> {
        match update.phase {
            GesturePhase::Began => {
                self.pan.begin(update.location, update.touch_count);
                None
            }
            GesturePhase::Changed => {
                let delta = self.pan.update(update.location, update.touch_count)?;
                stage.translate_by(delta);
                Some(StageEvent::Translated(delta))
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                self.pan.end();
                None
            }
        }
    }

    fn on_tap(update: &TapUpdate) -> Option<StageEvent> {
        matches!(update.touch_count, 2 | 3).then_some(StageEvent::Tap(update.touch_count))
    }
}
