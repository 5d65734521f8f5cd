// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated fit-to-stage.
//!
//! Scatter a canvas with gestures, then sample the eased fit transition the
//! way a host would from its frame clock, and finish by committing the fit
//! to the stage.
//!
//! Run:
//! - `cargo run -p easel_examples --example fit_animation`

use easel_stage::Stage;
use kurbo::{Point, Size, Vec2};

fn main() {
    // A 100x100 canvas in a 1024x768 stage.
    let mut stage = Stage::new(Size::new(1024.0, 768.0));
    stage.attach(Size::new(100.0, 100.0));

    // Leave the canvas zoomed, rotated, and shoved into a corner.
    stage.scale_about(Point::new(200.0, 200.0), 6.0);
    stage.rotate_about(Point::new(512.0, 384.0), 0.8);
    stage.translate_by(Vec2::new(-350.0, 180.0));

    let start = stage.placement().expect("canvas is attached");
    println!(
        "Start: center=({:.0}, {:.0}) scale={:.2} rotation={:.2}",
        start.center.x, start.center.y, start.scale, start.rotation
    );

    let transition = stage.fit_transition().expect("canvas and stage are sized");
    println!(
        "Fit target: center=({:.0}, {:.0}) scale={:.2} over {}s",
        transition.target().center.x,
        transition.target().center.y,
        transition.target().scale,
        transition.duration()
    );

    // Sample at 60fps until the transition reports completion.
    let frame = 1.0 / 60.0;
    let mut elapsed = 0.0;
    let mut frames = 0;
    while !transition.is_finished(elapsed) {
        let placement = transition.sample(elapsed);
        if frames % 3 == 0 {
            println!(
                "  t={elapsed:.3}s center=({:.1}, {:.1}) scale={:.3} rotation={:.3}",
                placement.center.x, placement.center.y, placement.scale, placement.rotation
            );
        }
        elapsed += frame;
        frames += 1;
    }

    // Commit the end state; accumulated rotation survives inside the pose.
    stage.fit_now();
    let pose = stage.pose().expect("canvas is attached");
    println!(
        "Done after {frames} frames: center=({:.0}, {:.0}) scale={:.2}, stored rotation={:.2}",
        pose.center.x, pose.center.y, pose.scale, pose.rotation
    );
}
