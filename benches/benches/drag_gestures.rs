// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cardstack_deck::Deck;
use cardstack_interaction::{DeckController, SwipeActions};
use cardstack_layout::ConfigContext;
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;

fn controller(n: u32) -> DeckController<u32> {
    let deck = Deck::new("bench", (0..n).collect());
    let mut c = DeckController::new(deck, &ConfigContext::default());
    c.set_actions(SwipeActions::new().on_swipe_right(|item| {
        black_box(item);
    }));
    c
}

// A drag that crosses the threshold and comes back twice before release.
fn path(steps: usize) -> Vec<Vec2> {
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Vec2::new(180.0 * (t * core::f64::consts::TAU * 2.0).sin().abs(), 10.0 * t)
        })
        .collect()
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture");
    for n in [5_u32, 100, 2000] {
        let points = path(60);
        group.bench_function(format!("drag_and_swipe_n{n}"), |b| {
            b.iter_batched(
                || controller(n),
                |mut c| {
                    for p in &points {
                        c.on_drag_changed(&0, *p);
                    }
                    black_box(c.on_drag_ended(Vec2::new(150.0, 0.0)));
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("drag_and_layout_n{n}"), |b| {
            b.iter_batched(
                || controller(n),
                |mut c| {
                    for p in &points {
                        c.on_drag_changed(&0, *p);
                        black_box(c.layout());
                    }
                    c.on_drag_cancelled();
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_gestures);
criterion_main!(benches);
