// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_stage --heading-base-level=0

//! Easel Stage: a headless canvas-posing model for gesture-driven hosts.
//!
//! This crate models a drawing canvas posed inside a container ("stage") by
//! multi-touch gestures. It focuses on:
//! - Accumulating pose state: uniform scale, unbounded rotation, pan
//!   offset, and the canvas center position.
//! - Anchored manipulation: scaling and rotating so the point under the
//!   user's fingers stays visually fixed.
//! - Clamping the scale against configurable limits.
//! - Fit-to-container targets, both instant and as eased transitions for
//!   hosts that animate.
//!
//! It does **not** recognize gestures or draw anything. Callers are
//! expected to:
//! - Feed [`Stage::scale_about`], [`Stage::rotate_about`], and
//!   [`Stage::translate_by`] from their toolkit's gesture recognizers
//!   (or from `easel_gesture`).
//! - Render the canvas with the [`Placement`] or [`kurbo::Affine`] the
//!   stage reports.
//! - Drive [`FitTransition`] sampling from their own frame clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel_stage::Stage;
//! use kurbo::{Point, Size, Vec2};
//!
//! // A 100x100 canvas centered in a 400x300 stage.
//! let mut stage = Stage::new(Size::new(400.0, 300.0));
//! stage.attach(Size::new(100.0, 100.0));
//!
//! // Pinch outward about the canvas center: the center stays put.
//! stage.scale_about(Point::new(200.0, 150.0), 2.0);
//! let pose = stage.pose().unwrap();
//! assert_eq!(pose.scale, 2.0);
//! assert_eq!(pose.center, Point::new(200.0, 150.0));
//!
//! // Drag with two fingers.
//! stage.translate_by(Vec2::new(12.0, -8.0));
//! assert_eq!(stage.pose().unwrap().center, Point::new(212.0, 142.0));
//!
//! // Snap back so the canvas fills the stage.
//! stage.fit_now();
//! assert_eq!(stage.pose().unwrap().scale, 3.0);
//! ```
//!
//! ## Design notes
//!
//! - Coordinates are stage-local with a y-down axis, except the rotation
//!   pivot, whose vertical component is measured from the container's
//!   bottom edge (see [`Stage::rotate_about`]).
//! - Rotation accumulates without wraparound; hosts that want a normalized
//!   angle reduce it themselves.
//! - Fitting clears the rotation on screen but not the accumulated value;
//!   the next gesture restores it (see [`Stage::fit_now`]).
//! - All operations are total: calls against a detached stage or degenerate
//!   sizes are ignored rather than failing.
//!
//! This crate is `no_std`.

#![no_std]

mod pose;
mod stage;
mod transition;

pub use pose::{Placement, Pose, ScaleLimits};
pub use stage::{Stage, StageDebugInfo};
pub use transition::{FitTransition, ease_out_cubic};
