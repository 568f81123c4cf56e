// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use cardstack_deck::Deck;
use cardstack_layout::{DeckConfig, StackState, layout_deck};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Vec2;

fn deck_of(n: u32) -> Deck<u32> {
    Deck::new("bench", (0..n).collect())
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    for n in [16_u32, 256, 4096] {
        group.bench_function(format!("move_id_to_back_middle_n{n}"), |b| {
            b.iter_batched(
                || deck_of(n),
                |mut deck| {
                    black_box(deck.move_id_to_back(&(n / 2)));
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("move_first_to_back_n{n}"), |b| {
            let mut deck = deck_of(n);
            b.iter(|| black_box(deck.move_first_to_back()));
        });
        group.bench_function(format!("dedup_construct_n{n}"), |b| {
            b.iter(|| black_box(Deck::new("bench", (0..n).collect::<Vec<u32>>())));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let deck = deck_of(1024);
    for count in [3_usize, 8, 32] {
        let config = DeckConfig {
            item_display_count: count,
            always_show_last_item: true,
            ..DeckConfig::default()
        };
        group.bench_function(format!("idle_window_{count}"), |b| {
            let state = StackState::idle();
            b.iter(|| black_box(layout_deck(&deck, &state, &config)));
        });
        group.bench_function(format!("dragging_window_{count}"), |b| {
            let active = 0_u32;
            let state = StackState {
                active: Some(&active),
                drag_offset: Vec2::new(42.0, -7.0),
                ..StackState::idle()
            };
            b.iter(|| black_box(layout_deck(&deck, &state, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_moves, bench_layout);
criterion_main!(benches);
