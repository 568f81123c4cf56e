// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flip and shuffle sequences driven by a fake animation clock.
//!
//! Each frame the renderer asks the configuration where the top card should be,
//! and completes the sequence once the configured duration has elapsed.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p cardstack_demos --example shuffle_sequence`

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use cardstack_deck::Deck;
use cardstack_interaction::{Changes, DeckController, ShuffleKind};
use cardstack_layout::ConfigContext;
use kurbo::Vec2;
use tracing::info;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(50);

fn run(c: &mut DeckController<u8>, kind: ShuffleKind) {
    let Some(ticket) = c.begin_shuffle(kind) else {
        info!(?kind, "shuffle refused");
        return;
    };
    println!("{kind:?}: began with {:?}", c.deck().items());

    // A second request while the first is animating is ignored.
    assert!(c.begin_shuffle(ShuffleKind::Shuffle).is_none());

    let duration = c.config().shuffle_duration;
    let mut elapsed = Duration::ZERO;
    let mut frame = 0_u32;
    while elapsed < duration {
        elapsed = (elapsed + FRAME).min(duration);
        frame += 1;
        let offset = c.config().flip_out_offset_at(elapsed);
        let depth: Vec<f64> = c.layout().iter().map(|p| p.layout.vertical_offset).collect();
        println!(
            "  frame {frame:>2} t={:>3}ms top={offset:?} depth={depth:?}",
            elapsed.as_millis()
        );

        // Dragging during the animation is allowed; completion resets it.
        if frame == 2
            && let Some(&top) = c.deck().first()
        {
            c.on_drag_changed(&top, Vec2::new(12.0, 0.0));
        }
    }

    if c.complete_shuffle(ticket).is_ok() {
        println!("{kind:?}: done after {frame} frames -> {:?}", c.deck().items());
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let context = ConfigContext::default();
    let mut c = DeckController::new(Deck::new("numbers", (1..=6).collect()), &context);
    let seen = Rc::new(Cell::new(Changes::empty()));
    let sink = Rc::clone(&seen);
    c.subscribe(move |changes| sink.set(sink.get() | changes));

    run(&mut c, ShuffleKind::Flip);
    run(&mut c, ShuffleKind::Shuffle);
    println!("changes observed: {:?}", seen.get());

    let mut single = DeckController::new(Deck::new("single", vec![7_u8]), &context);
    run(&mut single, ShuffleKind::Shuffle);
}
