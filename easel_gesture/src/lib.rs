// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=easel_gesture --heading-base-level=0

//! Easel Gesture: turns touch gesture callbacks into stage manipulation.
//!
//! This crate sits between a host toolkit's gesture recognizers and an
//! [`easel_stage::Stage`]. The host recognizes pinches, rotations, pans,
//! and multi-finger taps itself, then forwards each recognizer callback as
//! a [`GestureUpdate`]; the [`GestureController`] applies it to the stage
//! and reports the resulting [`StageEvent`], the notification a canvas
//! container typically fans out to its own observers.
//!
//! ## Design Philosophy
//!
//! - **Already recognized, already incremental**: updates carry the deltas
//!   recognizers report per callback, not touch streams. Hosts whose
//!   recognizers accumulate (cumulative pinch scale, cumulative rotation)
//!   reset them after every callback.
//! - **Stateful but small**: the only state across callbacks is the
//!   [`PanSession`] anchor; everything durable lives in the stage's pose.
//! - **Toolkit-neutral**: phases, touch counts, and centroids are the whole
//!   inbound vocabulary, so any toolkit's recognizers map onto it.
//!
//! ## Usage
//!
//! ```rust
//! use easel_gesture::{
//!     GestureController, GesturePhase, GestureUpdate, PanUpdate, StageEvent, TapUpdate,
//! };
//! use easel_stage::Stage;
//! use kurbo::{Point, Size, Vec2};
//!
//! let mut stage = Stage::new(Size::new(100.0, 100.0));
//! stage.attach(Size::new(100.0, 100.0));
//! let mut controller = GestureController::new();
//!
//! // A two-finger drag: began arms the session, changed translates.
//! let began = GestureUpdate::Pan(PanUpdate {
//!     phase: GesturePhase::Began,
//!     location: Point::new(10.0, 10.0),
//!     touch_count: 2,
//! });
//! assert_eq!(controller.handle(&mut stage, &began), None);
//!
//! let changed = GestureUpdate::Pan(PanUpdate {
//!     phase: GesturePhase::Changed,
//!     location: Point::new(15.0, 10.0),
//!     touch_count: 2,
//! });
//! assert_eq!(
//!     controller.handle(&mut stage, &changed),
//!     Some(StageEvent::Translated(Vec2::new(5.0, 0.0)))
//! );
//!
//! // A two-finger tap passes straight through.
//! let tap = GestureUpdate::Tap(TapUpdate { touch_count: 2 });
//! assert_eq!(controller.handle(&mut stage, &tap), Some(StageEvent::Tap(2)));
//! ```
//!
//! ## Recognition policy
//!
//! Hosts also decide which recognizers may run at once. The stage's feel
//! depends on pan, pinch, and rotation recognizing simultaneously while the
//! three-finger tap gets a chance to fail first; [`RecognitionPolicy`]
//! captures those constraints so hosts can wire them into their toolkit's
//! arbitration hooks.
//!
//! This crate is `no_std`.

#![no_std]

mod arbitration;
mod controller;
mod pan;
mod phase;
mod update;

pub use arbitration::{GestureKind, RecognitionPolicy};
pub use controller::{GestureController, StageEvent};
pub use pan::PanSession;
pub use phase::GesturePhase;
pub use update::{
    GestureUpdate, PanUpdate, PinchUpdate, RotateUpdate, TapUpdate, TouchList, effective_anchor,
};
