// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas gesture session basics.
//!
//! Drive a stage through a scripted multi-touch session: pinch to zoom in
//! about a point, rotate, drag with two fingers (including a mid-drag
//! finger lift), tap, and inspect the pose along the way.
//!
//! Run:
//! - `cargo run -p easel_examples --example canvas_session`

use easel_gesture::{
    GestureController, GesturePhase, GestureUpdate, PanUpdate, PinchUpdate, RotateUpdate,
    StageEvent, TapUpdate,
};
use easel_stage::Stage;
use kurbo::{Point, Size};
use smallvec::smallvec;

fn report(label: &str, event: Option<StageEvent>, stage: &Stage) {
    let Some(pose) = stage.pose() else {
        println!("{label}: no canvas attached");
        return;
    };
    match event {
        Some(StageEvent::ScaleChanged(scale)) => println!("{label}: scale -> {scale:.3}"),
        Some(StageEvent::RotationChanged(rotation)) => {
            println!("{label}: rotation -> {rotation:.3} rad");
        }
        Some(StageEvent::Translated(delta)) => {
            println!("{label}: translated by ({:.1}, {:.1})", delta.x, delta.y);
        }
        Some(StageEvent::Tap(fingers)) => println!("{label}: {fingers}-finger tap"),
        None => println!("{label}: (no event)"),
    }
    println!(
        "    center=({:.1}, {:.1}) scale={:.3} rotation={:.3}",
        pose.center.x, pose.center.y, pose.scale, pose.rotation
    );
}

fn main() {
    // A 100x100 canvas inside an 800x600 stage.
    let mut stage = Stage::new(Size::new(800.0, 600.0));
    stage.attach(Size::new(100.0, 100.0));
    let mut controller = GestureController::new();

    println!("Attached: {:?}", stage.debug_info());

    // Pinch outward with two fingers straddling (300, 300).
    let event = controller.handle(
        &mut stage,
        &GestureUpdate::Pinch(PinchUpdate {
            phase: GesturePhase::Changed,
            location: Point::new(300.0, 300.0),
            touches: smallvec![Point::new(260.0, 300.0), Point::new(340.0, 300.0)],
            factor: 2.5,
        }),
    );
    report("pinch x2.5", event, &stage);

    // Rotate a quarter turn about the same spot.
    let event = controller.handle(
        &mut stage,
        &GestureUpdate::Rotate(RotateUpdate {
            phase: GesturePhase::Changed,
            location: Point::new(300.0, 300.0),
            touches: smallvec![Point::new(260.0, 300.0), Point::new(340.0, 300.0)],
            delta: core::f64::consts::FRAC_PI_4,
        }),
    );
    report("rotate 45deg", event, &stage);

    // Two-finger drag to the right, with a third finger landing mid-drag.
    let script = [
        ("pan began", PanUpdate {
            phase: GesturePhase::Began,
            location: Point::new(400.0, 300.0),
            touch_count: 2,
        }),
        ("pan +30x", PanUpdate {
            phase: GesturePhase::Changed,
            location: Point::new(430.0, 300.0),
            touch_count: 2,
        }),
        ("third finger lands", PanUpdate {
            phase: GesturePhase::Changed,
            location: Point::new(410.0, 320.0),
            touch_count: 3,
        }),
        ("pan +5x +5y", PanUpdate {
            phase: GesturePhase::Changed,
            location: Point::new(415.0, 325.0),
            touch_count: 3,
        }),
        ("pan ended", PanUpdate {
            phase: GesturePhase::Ended,
            location: Point::new(415.0, 325.0),
            touch_count: 3,
        }),
    ];
    for (label, update) in script {
        let event = controller.handle(&mut stage, &GestureUpdate::Pan(update));
        report(label, event, &stage);
    }

    // Two-finger tap (hosts typically toggle tool state on this).
    let event = controller.handle(&mut stage, &GestureUpdate::Tap(TapUpdate { touch_count: 2 }));
    report("tap", event, &stage);

    // Snap the canvas back so it fills the stage.
    stage.fit_now();
    report("fit", None, &stage);
    println!(
        "After fit the applied rotation is {:.3}; the accumulated {:.3} returns on the next gesture.",
        stage.placement().map(|p| p.rotation).unwrap_or(0.0),
        stage.pose().map(|p| p.rotation).unwrap_or(0.0),
    );
}
