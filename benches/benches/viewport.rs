// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for viewport math under interaction-shaped workloads.

use criterion::{criterion_group, criterion_main, Criterion};
use kurbo::{Point, Size};
use plotmap_view2d::{InteractionController, MapViewport, ZoomDirection};
use std::hint::black_box;

fn bench_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("viewport");

    group.bench_function("wheel_zoom_burst", |b| {
        b.iter(|| {
            let mut vp = MapViewport::new(1.0, 0.5, 3.0);
            let cursor = Point::new(123.0, 456.0);
            for i in 0..64 {
                let direction = if i % 3 == 0 {
                    ZoomDirection::Out
                } else {
                    ZoomDirection::In
                };
                vp.wheel_zoom(cursor, direction);
            }
            black_box(vp.offset())
        });
    });

    group.bench_function("screen_world_roundtrip", |b| {
        let mut vp = MapViewport::new(1.0, 0.5, 3.0);
        vp.set_scale(1.7);
        b.iter(|| {
            let mut acc = 0.0;
            for i in 0..256 {
                let screen = Point::new(f64::from(i), f64::from(i * 2));
                let world = vp.screen_to_world(screen);
                acc += vp.world_to_screen(world).x;
            }
            black_box(acc)
        });
    });

    group.bench_function("fly_to_full_run", |b| {
        b.iter(|| {
            let mut ctl = InteractionController::new(1.0, 0.5, 3.0);
            ctl.fly_to(Point::new(512.0, 384.0), Size::new(1024.0, 768.0));
            while ctl.tick() {}
            black_box(ctl.viewport().scale())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_viewport);
criterion_main!(benches);
