// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hindsight_footprints::{
    ExtentFilter, FootprintFeature, FootprintIndex, FootprintOverlay, GeometryEngine,
    PlanarGeometry, Polygon,
};
use kurbo::{Point, Rect};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// Irregular hexagonal footprints scattered over a 10 km square.
fn footprints(n: i32, seed: u64) -> FootprintIndex {
    let mut rng = Lcg::new(seed);
    FootprintIndex::new((0..n).map(|i| {
        let center = Point::new(rng.next_f64() * 10_000.0, rng.next_f64() * 10_000.0);
        let radius = 200.0 + rng.next_f64() * 1_500.0;
        let ring = (0..6).map(|k| {
            let angle = core::f64::consts::TAU * f64::from(k) / 6.0;
            let r = radius * (0.7 + 0.3 * rng.next_f64());
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        });
        FootprintFeature::new(1900 + i, Polygon::new(ring.collect::<Vec<_>>()))
    }))
}

fn bench_apply(c: &mut Criterion) {
    let engine = PlanarGeometry::default();
    let boundary = Polygon::from_rect(Rect::new(1_000.0, 1_000.0, 9_000.0, 9_000.0));
    let buffer = engine.buffer(&boundary, 750.0);
    let mut group = c.benchmark_group("extent_filter/apply");

    for n in [16_i32, 64, 256] {
        let filter = ExtentFilter::new(footprints(n, 7), buffer.clone());
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &filter, |b, filter| {
            let mut overlay = FootprintOverlay::new();
            let mut x = 0.0;
            b.iter(|| {
                // Pan across the area so the overlay always changes.
                x = (x + 37.0) % 8_000.0;
                let extent = Rect::new(x, 2_000.0, x + 2_000.0, 3_500.0);
                black_box(filter.apply(extent, &engine, &mut overlay));
            });
        });
    }

    group.finish();
}

fn bench_buffer(c: &mut Criterion) {
    let boundary = footprints(1, 3)
        .iter()
        .next()
        .map(|f| f.geometry.clone())
        .unwrap_or_default();
    let mut group = c.benchmark_group("geometry/buffer");
    for segments in [16_u32, 32, 64] {
        let engine = PlanarGeometry {
            circle_segments: segments,
        };
        group.bench_with_input(BenchmarkId::from_parameter(segments), &engine, |b, engine| {
            b.iter(|| black_box(engine.buffer(black_box(&boundary), 750.0)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_apply, bench_buffer);
criterion_main!(benches);
