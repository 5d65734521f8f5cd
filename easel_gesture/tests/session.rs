// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `easel_gesture` crate.
//!
//! These drive a whole interaction through `GestureController` and a real
//! `Stage`, with a focus on how pinch, rotation, and pan callbacks combine
//! and on what survives a fit.

use easel_gesture::{
    GestureController, GesturePhase, GestureUpdate, PanUpdate, PinchUpdate, RotateUpdate,
    StageEvent, TapUpdate,
};
use easel_stage::Stage;
use kurbo::{Point, Size, Vec2};
use smallvec::smallvec;

fn pinch(phase: GesturePhase, location: Point, factor: f64) -> GestureUpdate {
    GestureUpdate::Pinch(PinchUpdate {
        phase,
        location,
        touches: smallvec![],
        factor,
    })
}

fn rotate(phase: GesturePhase, location: Point, delta: f64) -> GestureUpdate {
    GestureUpdate::Rotate(RotateUpdate {
        phase,
        location,
        touches: smallvec![],
        delta,
    })
}

fn pan(phase: GesturePhase, location: Point, touch_count: usize) -> GestureUpdate {
    GestureUpdate::Pan(PanUpdate {
        phase,
        location,
        touch_count,
    })
}

#[test]
fn two_finger_drag_translates_across_callbacks() {
    let mut stage = Stage::new(Size::new(400.0, 300.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();

    let script = [
        (pan(GesturePhase::Began, Point::new(100.0, 100.0), 2), None),
        (
            pan(GesturePhase::Changed, Point::new(108.0, 100.0), 2),
            Some(StageEvent::Translated(Vec2::new(8.0, 0.0))),
        ),
        (
            pan(GesturePhase::Changed, Point::new(108.0, 94.0), 2),
            Some(StageEvent::Translated(Vec2::new(0.0, -6.0))),
        ),
        (pan(GesturePhase::Ended, Point::new(108.0, 94.0), 2), None),
    ];
    for (update, expected) in script {
        assert_eq!(controller.handle(&mut stage, &update), expected);
    }

    let pose = stage.pose().unwrap();
    assert_eq!(pose.translation, Vec2::new(8.0, -6.0));
    assert_eq!(pose.center, Point::new(208.0, 144.0));
    assert!(!controller.is_panning());
}

#[test]
fn combined_pinch_rotate_pan_accumulates_each_axis() {
    let mut stage = Stage::new(Size::new(100.0, 100.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();
    let center = Point::new(50.0, 50.0);

    // Simultaneous recognizers interleave their callbacks; each stream
    // stays incremental.
    controller.handle(&mut stage, &pinch(GesturePhase::Began, center, 1.1));
    controller.handle(&mut stage, &rotate(GesturePhase::Began, center, 0.1));
    controller.handle(&mut stage, &pan(GesturePhase::Began, center, 2));

    controller.handle(&mut stage, &pinch(GesturePhase::Changed, center, 1.2));
    controller.handle(&mut stage, &rotate(GesturePhase::Changed, center, 0.15));
    controller.handle(&mut stage, &pan(GesturePhase::Changed, Point::new(53.0, 50.0), 2));

    let pose = stage.pose().unwrap();
    assert!((pose.scale - 1.32).abs() < 1e-9);
    assert!((pose.rotation - 0.25).abs() < 1e-9);
    assert_eq!(pose.translation, Vec2::new(3.0, 0.0));
}

#[test]
fn finger_lift_mid_drag_never_jumps_the_canvas() {
    let mut stage = Stage::new(Size::new(400.0, 300.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();

    controller.handle(&mut stage, &pan(GesturePhase::Began, Point::new(120.0, 80.0), 3));
    controller.handle(&mut stage, &pan(GesturePhase::Changed, Point::new(125.0, 80.0), 3));
    let center_before = stage.pose().unwrap().center;

    // One finger lifts; the centroid teleports by 60 units.
    let event =
        controller.handle(&mut stage, &pan(GesturePhase::Changed, Point::new(185.0, 80.0), 2));
    assert_eq!(event, None);
    assert_eq!(stage.pose().unwrap().center, center_before);

    // The next movement resumes from the new centroid.
    let event =
        controller.handle(&mut stage, &pan(GesturePhase::Changed, Point::new(187.0, 81.0), 2));
    assert_eq!(event, Some(StageEvent::Translated(Vec2::new(2.0, 1.0))));
}

#[test]
fn pinch_about_touch_midpoint_leaves_that_point_fixed() {
    let mut stage = Stage::new(Size::new(400.0, 300.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();

    let touches = [Point::new(150.0, 120.0), Point::new(250.0, 180.0)];
    let midpoint = Point::new(200.0, 150.0);
    let on_canvas = stage.stage_to_canvas().unwrap() * midpoint;

    let update = GestureUpdate::Pinch(PinchUpdate {
        phase: GesturePhase::Changed,
        location: Point::new(400.0, 0.0),
        touches: smallvec![touches[0], touches[1]],
        factor: 1.8,
    });
    controller.handle(&mut stage, &update);

    let back = stage.canvas_to_stage().unwrap() * on_canvas;
    assert!((back - midpoint).hypot() < 1e-9);
}

#[test]
fn fit_resets_view_but_rotation_returns_on_next_gesture() {
    let mut stage = Stage::new(Size::new(200.0, 100.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();
    let center = Point::new(100.0, 50.0);

    controller.handle(&mut stage, &rotate(GesturePhase::Changed, center, 0.9));
    controller.handle(&mut stage, &pinch(GesturePhase::Changed, center, 4.0));

    stage.fit_now();
    assert_eq!(stage.pose().unwrap().scale, 1.0);
    assert_eq!(stage.placement().unwrap().rotation, 0.0);

    // The first pinch after the fit brings the stored rotation back.
    let event = controller.handle(&mut stage, &pinch(GesturePhase::Changed, center, 1.5));
    assert_eq!(event, Some(StageEvent::ScaleChanged(1.5)));
    assert!((stage.placement().unwrap().rotation - 0.9).abs() < 1e-9);
}

#[test]
fn scale_events_report_clamped_cumulative_values() {
    let mut stage = Stage::new(Size::new(100.0, 100.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();
    let center = Point::new(50.0, 50.0);

    let mut events = Vec::new();
    for factor in [2.0, 2.0, 100.0, 0.5] {
        events.push(controller.handle(&mut stage, &pinch(GesturePhase::Changed, center, factor)));
    }
    assert_eq!(
        events,
        vec![
            Some(StageEvent::ScaleChanged(2.0)),
            Some(StageEvent::ScaleChanged(4.0)),
            Some(StageEvent::ScaleChanged(40.0)),
            Some(StageEvent::ScaleChanged(20.0)),
        ]
    );
}

#[test]
fn taps_do_not_disturb_an_active_pan() {
    let mut stage = Stage::new(Size::new(100.0, 100.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();

    controller.handle(&mut stage, &pan(GesturePhase::Began, Point::new(20.0, 20.0), 2));
    let event = controller.handle(&mut stage, &GestureUpdate::Tap(TapUpdate { touch_count: 2 }));
    assert_eq!(event, Some(StageEvent::Tap(2)));
    assert!(controller.is_panning());

    let event =
        controller.handle(&mut stage, &pan(GesturePhase::Changed, Point::new(21.0, 20.0), 2));
    assert_eq!(event, Some(StageEvent::Translated(Vec2::new(1.0, 0.0))));
}

#[test]
fn detach_mid_gesture_stops_all_output() {
    let mut stage = Stage::new(Size::new(100.0, 100.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();

    controller.handle(&mut stage, &pan(GesturePhase::Began, Point::new(20.0, 20.0), 2));
    stage.detach();

    let event =
        controller.handle(&mut stage, &pan(GesturePhase::Changed, Point::new(30.0, 20.0), 2));
    assert_eq!(event, None);
    assert_eq!(stage.pose(), None);
}
