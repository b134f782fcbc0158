// Copyright 2025 the Plotmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for boundary placement throughput.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use kurbo::Point;
use plotmap_boundary::{BoundaryRegion, Polygon};

fn wide_square() -> Polygon {
    Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(400.0, 0.0),
        Point::new(400.0, 400.0),
        Point::new(0.0, 400.0),
    ])
    .unwrap()
}

fn pentagon() -> Polygon {
    Polygon::new(vec![
        Point::new(710.0, 360.0),
        Point::new(765.0, 350.0),
        Point::new(810.0, 360.0),
        Point::new(790.0, 470.0),
        Point::new(740.0, 470.0),
    ])
    .unwrap()
}

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");

    group.bench_function("square_16_points", |b| {
        b.iter_batched_ref(
            || BoundaryRegion::new("Square", wide_square()),
            |region| {
                for _ in 0..16 {
                    region.next_point().unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pentagon_4_points", |b| {
        b.iter_batched_ref(
            || BoundaryRegion::new("Pentagon", pentagon()),
            |region| {
                for _ in 0..4 {
                    region.next_point().unwrap();
                }
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
