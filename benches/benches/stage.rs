// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use easel_gesture::{
    GestureController, GesturePhase, GestureUpdate, PanUpdate, PinchUpdate, RotateUpdate, TouchList,
};
use easel_stage::Stage;
use kurbo::{Point, Size};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_unit_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    fn gen_point(&mut self, size: Size) -> Point {
        Point::new(
            self.gen_unit_f64() * size.width,
            self.gen_unit_f64() * size.height,
        )
    }
}

const STAGE_SIZE: Size = Size::new(1024.0, 768.0);

fn build_session(updates: u32, seed: u64) -> Vec<GestureUpdate> {
    let mut rng = Lcg::new(seed);
    let mut script = Vec::with_capacity(updates as usize);
    script.push(GestureUpdate::Pan(PanUpdate {
        phase: GesturePhase::Began,
        location: rng.gen_point(STAGE_SIZE),
        touch_count: 2,
    }));
    for i in 1..updates {
        let location = rng.gen_point(STAGE_SIZE);
        script.push(match i % 3 {
            0 => GestureUpdate::Pan(PanUpdate {
                phase: GesturePhase::Changed,
                location,
                touch_count: 2,
            }),
            1 => GestureUpdate::Pinch(PinchUpdate {
                phase: GesturePhase::Changed,
                location,
                touches: TouchList::new(),
                // Factors hover around 1 so the scale wanders inside the
                // limits instead of pinning at a bound.
                factor: 0.9 + 0.2 * rng.gen_unit_f64(),
            }),
            _ => GestureUpdate::Rotate(RotateUpdate {
                phase: GesturePhase::Changed,
                location,
                touches: TouchList::new(),
                delta: 0.1 * (rng.gen_unit_f64() - 0.5),
            }),
        });
    }
    script
}

fn attached_stage() -> Stage {
    let mut stage = Stage::new(STAGE_SIZE);
    stage.attach(Size::new(100.0, 100.0));
    stage
}

fn bench_stage(c: &mut Criterion) {
    let mut group = c.benchmark_group("easel_stage");
    group.sample_size(50);

    for &updates in &[64_u32, 1_024_u32] {
        let script = build_session(updates, 0xEA5E_0000_0000_0001);
        group.bench_function(format!("gesture_session(n={updates})"), |b| {
            b.iter_batched(
                || (attached_stage(), GestureController::new()),
                |(mut stage, mut controller)| {
                    for update in &script {
                        black_box(controller.handle(&mut stage, update));
                    }
                    black_box(stage);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("scale_about(x1000)", |b| {
        b.iter_batched(
            attached_stage,
            |mut stage| {
                for i in 0..1_000_u32 {
                    let factor = if i % 2 == 0 { 1.01 } else { 0.99 };
                    stage.scale_about(Point::new(300.0, 300.0), factor);
                }
                black_box(stage);
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("fit_transition_sample(x1000)", |b| {
        let mut stage = attached_stage();
        stage.scale_about(Point::new(100.0, 100.0), 5.0);
        stage.rotate_about(Point::new(512.0, 384.0), 0.7);
        let transition = stage.fit_transition().expect("stage and canvas are sized");
        b.iter(|| {
            for i in 0..1_000_u32 {
                let elapsed = f64::from(i) * 0.0003;
                black_box(transition.sample(elapsed));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_stage);
criterion_main!(benches);
