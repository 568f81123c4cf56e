// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated drag gestures over a five-card deck.
//!
//! Run:
//! - `RUST_LOG=cardstack_interaction=debug cargo run -p cardstack_demos --example swipe_deck`

use cardstack_deck::Deck;
use cardstack_interaction::{DeckController, SharedController, SwipeActions};
use cardstack_layout::{ConfigContext, DeckConfig};
use kurbo::{Point, Vec2};
use tracing_subscriber::EnvFilter;

const CARD_CENTER: Point = Point::new(150.0, 200.0);

fn print_stack(label: &str, c: &DeckController<&'static str>) {
    println!("{label}: order = {:?}", c.deck().items());
    for placed in c.layout() {
        let l = placed.layout;
        let t = l.transform_about(CARD_CENTER);
        println!(
            "  #{} {:<8} z={:>2} scale={:.2} dy={:>5.1} rot={:>6.3} origin={:?}",
            placed.position,
            placed.item,
            l.z_index,
            l.scale,
            l.vertical_offset,
            l.drag_rotation,
            t * Point::ZERO,
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let context = ConfigContext::new(DeckConfig {
        item_display_count: 3,
        always_show_last_item: true,
        ..DeckConfig::default()
    });
    let deck = Deck::new("cities", vec!["Lisbon", "Osaka", "Quito", "Tallinn", "Hobart"]);
    let shared = SharedController::new(DeckController::new(deck, &context));

    shared.update(|c| {
        c.set_actions(
            SwipeActions::new()
                .on_swipe_left(|city| println!("  -> skipped {city}"))
                .on_swipe_right(|city| println!("  -> saved {city}"))
                .on_swipe_up(|city| println!("  -> shared {city}")),
        );
        print_stack("initial", c);
    });

    // The renderer only redraws when something changed.
    let renderer = shared.clone();

    let gestures: [(&str, &[Vec2]); 4] = [
        ("swipe right", &[Vec2::new(40.0, 2.0), Vec2::new(90.0, 4.0), Vec2::new(130.0, 5.0)]),
        ("hesitate", &[Vec2::new(60.0, 0.0), Vec2::new(140.0, 0.0), Vec2::new(20.0, 0.0)]),
        ("swipe up", &[Vec2::new(0.0, -50.0), Vec2::new(5.0, -120.0)]),
        ("swipe down, no action", &[Vec2::new(0.0, 150.0)]),
    ];

    for (label, path) in gestures {
        let Some(Some(top)) = renderer.read(|c| c.deck().first().copied()) else {
            break;
        };
        let last = path.last().copied().unwrap_or(Vec2::ZERO);
        shared.update(|c| {
            for t in path {
                c.on_drag_changed(&top, *t);
            }
            if let Some(swipe) = c.on_drag_ended(last) {
                println!("{label}: {:?} on {}", swipe.direction, swipe.item);
            } else {
                println!("{label}: no swipe");
            }
        });
        renderer.update(|c| {
            if c.take_changes().needs_layout() {
                print_stack(label, c);
            }
        });
    }
}
