// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontally scrolling list of decks, one slot per deck.
//!
//! Run:
//! - `cargo run -p cardstack_demos --example horizontal_list`

use cardstack_deck::Deck;
use cardstack_layout::HorizontalList;
use tracing_subscriber::EnvFilter;

const CARD_W: f64 = 240.0;
const CARD_H: f64 = 320.0;
const VIEWPORT_W: f64 = 600.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let decks: Vec<Deck<u32>> = (0..12)
        .map(|i| Deck::new(format!("deck {i}"), (i * 10..i * 10 + 5).collect()))
        .collect();

    let list = HorizontalList::new(CARD_W, 16.0).with_leading_inset(24.0);
    println!(
        "{} decks, content width {:.1}",
        decks.len(),
        list.content_width(decks.len())
    );

    for scroll in [0.0, 130.0, 900.0, 2800.0] {
        let range = list.visible_range(decks.len(), scroll, VIEWPORT_W);
        let names: Vec<_> = decks[range.clone()].iter().map(Deck::name).collect();
        println!("scroll={scroll:.1} -> {range:?} {names:?}");
        for i in range {
            let rect = list.slot_rect(i, CARD_H);
            println!("  slot {i}: x0={:.1} x1={:.1}", rect.x0, rect.x1);
        }
    }
}
