// Copyright 2025 the Hindsight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use hindsight_fade::{FadeAnimator, FadeTick};
use hindsight_layers::{LayerInfo, TemporalLayerSet, YearConvention};
use hindsight_timing::{HostTime, TimerQueue};

fn layers(count: i32) -> TemporalLayerSet {
    let mut set = TemporalLayerSet::from_layers(
        &YearConvention::default(),
        (0..count).map(|i| LayerInfo::new(format!("Preserve - {}", 1950 + i))),
    );
    set.set_visible_year(1950);
    set
}

/// Holds until fully faded out, then releases until fully faded in.
fn full_cycle(layers: &mut TemporalLayerSet) -> usize {
    let mut timers = TimerQueue::<FadeTick>::new();
    let mut fade = FadeAnimator::default();
    let mut ticks = 0;
    let mut now = HostTime::ZERO;

    fade.hold_start(now, layers, &mut timers);
    for release in [false, true] {
        if release {
            fade.release(now, layers, &mut timers);
        }
        while let Some(deadline) = timers.next_deadline() {
            now = deadline;
            while let Some((id, FadeTick)) = timers.pop_due(now) {
                fade.on_tick(id, now, layers, &mut timers);
                ticks += 1;
            }
        }
    }
    ticks
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("fade/full_cycle");
    for count in [4_i32, 32] {
        group.bench_function(format!("{count}_layers"), |b| {
            b.iter_batched(
                || layers(count),
                |mut set| black_box(full_cycle(&mut set)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_cycle);
criterion_main!(benches);
