// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stage: a container that poses one canvas under gesture input.

use kurbo::{Affine, Point, Size, Vec2};

use crate::pose::{Placement, Pose, ScaleLimits};
use crate::transition::FitTransition;

/// A container that holds one canvas and accumulates its pose from
/// pan, pinch, and rotation input.
///
/// The stage is a pure model. It has no wall clock, no touch handling, and
/// no drawing; hosts recognize gestures themselves (or with a helper crate)
/// and call [`scale_about`], [`rotate_about`], and [`translate_by`] with the
/// recognizer's anchors and per-callback deltas. Each call mutates the
/// attached canvas's [`Pose`] and the host reads back a [`Placement`] or an
/// [`Affine`] to draw with.
///
/// # Coordinate spaces
///
/// - *Stage coordinates*: the container's own space, y-down, origin at the
///   top-left corner. Anchors, centers, and translation deltas live here.
/// - *Canvas coordinates*: measured from the canvas center point, so the
///   applied transform is a pure rotate-and-scale about the origin.
///
/// The one exception is the rotation pivot, whose vertical component is
/// measured from the container's bottom edge; see [`rotate_about`].
///
/// # Scale limits
///
/// Every scale mutation clamps the new scale into the stage's
/// [`ScaleLimits`]. Replacing the limits leaves the current scale untouched
/// even if it is now out of range; the next scale mutation re-clamps.
///
/// [`scale_about`]: Stage::scale_about
/// [`rotate_about`]: Stage::rotate_about
/// [`translate_by`]: Stage::translate_by
#[derive(Clone, Debug)]
pub struct Stage {
    container: Size,
    limits: ScaleLimits,
    canvas: Option<Canvas>,
}

/// The attached canvas, its pose, and the rotation currently on screen.
#[derive(Clone, Debug)]
struct Canvas {
    size: Size,
    pose: Pose,
    /// Rotation component of the applied transform. Equals `pose.rotation`
    /// after a scale or rotation gesture, zero after a fit.
    applied_rotation: f64,
}

impl Stage {
    /// Creates a stage of the given size with no canvas attached and the
    /// default scale limits.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self {
            container,
            limits: ScaleLimits::default(),
            canvas: None,
        }
    }

    /// The container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Resizes the container.
    ///
    /// The canvas pose is left untouched; hosts that want the canvas to
    /// track the container should follow up with [`fit_now`] or a
    /// [`fit_transition`].
    ///
    /// [`fit_now`]: Stage::fit_now
    /// [`fit_transition`]: Stage::fit_transition
    pub fn set_container_size(&mut self, container: Size) {
        self.container = container;
    }

    /// The scale limits applied on every scale mutation.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        self.limits
    }

    /// Replaces the scale limits.
    ///
    /// The current scale is not re-clamped; a scale that the new limits
    /// exclude stays in place until the next scale mutation.
    pub fn set_scale_limits(&mut self, limits: ScaleLimits) {
        self.limits = limits;
    }

    /// Attaches a canvas of the given size, replacing any previous canvas.
    ///
    /// The new canvas starts at the identity pose centered in the
    /// container.
    pub fn attach(&mut self, canvas: Size) {
        self.canvas = Some(Canvas {
            size: canvas,
            pose: Pose::centered_at(self.container_center()),
            applied_rotation: 0.0,
        });
    }

    /// Detaches the canvas, if any.
    ///
    /// Gesture input on a detached stage is ignored.
    pub fn detach(&mut self) {
        self.canvas = None;
    }

    /// Whether a canvas is attached.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.canvas.is_some()
    }

    /// Size of the attached canvas.
    #[must_use]
    pub fn canvas_size(&self) -> Option<Size> {
        self.canvas.as_ref().map(|canvas| canvas.size)
    }

    /// Accumulated pose of the attached canvas.
    #[must_use]
    pub fn pose(&self) -> Option<Pose> {
        self.canvas.as_ref().map(|canvas| canvas.pose)
    }

    /// The placement currently applied to the canvas.
    ///
    /// The placement rotation tracks [`Pose::rotation`] through gestures but
    /// is reset to zero by a fit while the pose keeps accumulating; see
    /// [`fit_now`].
    ///
    /// [`fit_now`]: Stage::fit_now
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        self.canvas.as_ref().map(|canvas| Placement {
            center: canvas.pose.center,
            scale: canvas.pose.scale,
            rotation: canvas.applied_rotation,
        })
    }

    /// The transform applied to the canvas about its center point.
    #[must_use]
    pub fn canvas_transform(&self) -> Option<Affine> {
        self.placement().map(|placement| placement.transform())
    }

    /// Maps canvas coordinates (measured from the canvas center) to stage
    /// coordinates.
    #[must_use]
    pub fn canvas_to_stage(&self) -> Option<Affine> {
        self.placement().map(|placement| placement.canvas_to_stage())
    }

    /// Maps stage coordinates to canvas coordinates.
    #[must_use]
    pub fn stage_to_canvas(&self) -> Option<Affine> {
        self.canvas_to_stage().map(|affine| affine.inverse())
    }

    /// The stage-space point at the center of the container.
    #[must_use]
    pub fn container_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    /// Scales the canvas by `factor` about the stage-space `anchor`.
    ///
    /// The new scale is the current scale multiplied by `factor`, clamped
    /// into the scale limits. The canvas center moves so that the canvas
    /// point under `anchor` stays under `anchor`: with `r` the ratio of new
    /// to former scale, `center' = anchor + r * (center - anchor)`.
    ///
    /// Ignored while no canvas is attached.
    pub fn scale_about(&mut self, anchor: Point, factor: f64) {
        let Some(canvas) = &mut self.canvas else {
            return;
        };
        let former = canvas.pose.scale;
        canvas.pose.scale = self.limits.clamp(former * factor);
        let ratio = canvas.pose.scale / former;
        canvas.pose.center = anchor + (canvas.pose.center - anchor) * ratio;
        canvas.applied_rotation = canvas.pose.rotation;
    }

    /// Rotates the canvas by `delta` radians about the pivot derived from
    /// the stage-space `anchor`.
    ///
    /// `delta` adds to the accumulated rotation, and the canvas center
    /// orbits the pivot by the same angle. The pivot keeps the anchor's
    /// horizontal position but measures the vertical one from the
    /// container's bottom edge: `pivot = (anchor.x, height - anchor.y)`.
    /// For an anchor at the container center the flip is invisible;
    /// elsewhere the orbit is mirrored vertically. The flip is intentional.
    ///
    /// Ignored while no canvas is attached.
    pub fn rotate_about(&mut self, anchor: Point, delta: f64) {
        let height = self.container.height;
        let Some(canvas) = &mut self.canvas else {
            return;
        };
        canvas.pose.rotation += delta;
        let pivot = Point::new(anchor.x, height - anchor.y);
        canvas.pose.center = Affine::rotate_about(delta, pivot) * canvas.pose.center;
        canvas.applied_rotation = canvas.pose.rotation;
    }

    /// Translates the canvas by `delta`.
    ///
    /// The delta adds to both the accumulated translation and the canvas
    /// center. The applied rotate-and-scale transform is untouched.
    ///
    /// Ignored while no canvas is attached.
    pub fn translate_by(&mut self, delta: Vec2) {
        let Some(canvas) = &mut self.canvas else {
            return;
        };
        canvas.pose.translation += delta;
        canvas.pose.center += delta;
    }

    /// The scale at which the canvas fits the container: the smaller of the
    /// two axis ratios, clamped into the scale limits.
    ///
    /// `None` while no canvas is attached or while either the canvas or the
    /// container has a non-positive dimension.
    #[must_use]
    pub fn fit_scale(&self) -> Option<f64> {
        let canvas = self.canvas.as_ref()?;
        self.fit_scale_for(canvas)
    }

    fn fit_scale_for(&self, canvas: &Canvas) -> Option<f64> {
        if canvas.size.width <= 0.0 || canvas.size.height <= 0.0 {
            return None;
        }
        if self.container.width <= 0.0 || self.container.height <= 0.0 {
            return None;
        }
        let rx = self.container.width / canvas.size.width;
        let ry = self.container.height / canvas.size.height;
        Some(self.limits.clamp(rx.min(ry)))
    }

    /// The placement a fit moves the canvas to: centered in the container at
    /// the fit scale, with no applied rotation.
    ///
    /// `None` under the same conditions as [`fit_scale`].
    ///
    /// [`fit_scale`]: Stage::fit_scale
    #[must_use]
    pub fn fit_placement(&self) -> Option<Placement> {
        let canvas = self.canvas.as_ref()?;
        let scale = self.fit_scale_for(canvas)?;
        Some(Placement {
            center: self.container_center(),
            scale,
            rotation: 0.0,
        })
    }

    /// Fits the canvas to the container immediately.
    ///
    /// Sets the scale to [`fit_scale`], recenters the canvas in the
    /// container, and clears the applied rotation. The accumulated
    /// [`Pose::rotation`] and [`Pose::translation`] are deliberately left
    /// alone: the next scale or rotation gesture folds the accumulated
    /// rotation back into the applied transform, so a fitted canvas snaps
    /// back to its old orientation once manipulation resumes.
    ///
    /// No-op when [`fit_placement`] is `None`.
    ///
    /// [`fit_scale`]: Stage::fit_scale
    /// [`fit_placement`]: Stage::fit_placement
    pub fn fit_now(&mut self) {
        let Some(target) = self.fit_placement() else {
            return;
        };
        if let Some(canvas) = &mut self.canvas {
            canvas.pose.scale = target.scale;
            canvas.pose.center = target.center;
            canvas.applied_rotation = target.rotation;
        }
    }

    /// An eased transition from the current placement to the fit placement,
    /// for hosts that animate the fit over their own frame clock.
    ///
    /// The transition is a value; sampling it does not mutate the stage.
    /// Hosts typically apply the final placement by calling [`fit_now`]
    /// when the transition finishes.
    ///
    /// `None` under the same conditions as [`fit_scale`].
    ///
    /// [`fit_now`]: Stage::fit_now
    /// [`fit_scale`]: Stage::fit_scale
    #[must_use]
    pub fn fit_transition(&self) -> Option<FitTransition> {
        let from = self.placement()?;
        let to = self.fit_placement()?;
        Some(FitTransition::new(from, to))
    }

    /// Returns a snapshot of the stage state for debugging.
    #[must_use]
    pub fn debug_info(&self) -> StageDebugInfo {
        StageDebugInfo {
            container_size: self.container,
            scale_limits: self.limits,
            canvas_size: self.canvas_size(),
            pose: self.pose(),
            placement: self.placement(),
        }
    }
}

/// Debugging information about a [`Stage`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageDebugInfo {
    /// The container size.
    pub container_size: Size,
    /// The scale limits applied on scale mutations.
    pub scale_limits: ScaleLimits,
    /// Size of the attached canvas, if any.
    pub canvas_size: Option<Size>,
    /// Accumulated pose of the attached canvas, if any.
    pub pose: Option<Pose>,
    /// Placement currently applied to the canvas, if any.
    pub placement: Option<Placement>,
}
