// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardstack_interaction --heading-base-level=0

//! Cardstack Interaction: a headless drag-to-swipe state machine for card decks.
//!
//! ## Overview
//!
//! The toolkit captures pointer input and renders cards. This crate sits between the two.
//! It takes drag translations for a card, reorders the deck live as the drag crosses a
//! threshold, and resolves the release into one of four swipe actions.
//!
//! - [`classify`](crate::classify) maps a translation to a [`SwipeDirection`] or "below threshold".
//! - [`DeckController`] owns the deck, the active item, and the live drag offset.
//! - [`shuffle`](crate::shuffle) sequences flip/shuffle animations behind a re-entrancy latch.
//! - [`Changes`] and [`DeckController::subscribe`] tell the renderer when to lay out again.
//! - [`SharedController`] is the reference-counted handle the gesture layer and renderer share.
//!
//! ## Workflow
//!
//! 1) Build a [`Deck`](cardstack_deck::Deck) and a controller, inheriting configuration from
//!    a [`ConfigContext`](cardstack_layout::ConfigContext) or supplying one.
//! 2) Forward every drag-changed event to [`DeckController::on_drag_changed`] and the single
//!    end event to [`DeckController::on_drag_ended`] (or
//!    [`DeckController::on_drag_cancelled`] if the host cancels the gesture).
//! 3) When changes are reported, render [`DeckController::layout`].
//!
//! ```
//! use cardstack_deck::Deck;
//! use cardstack_interaction::{DeckController, SwipeActions, SwipeDirection};
//! use cardstack_layout::ConfigContext;
//! use kurbo::Vec2;
//!
//! let deck = Deck::new("letters", vec!['A', 'B', 'C', 'D', 'E']);
//! let mut controller = DeckController::new(deck, &ConfigContext::default());
//! controller.set_actions(SwipeActions::new().on_swipe_right(|card| println!("liked {card}")));
//!
//! // Dragging past the threshold previews the card at the back.
//! controller.on_drag_changed(&'A', Vec2::new(120.0, 0.0));
//! assert_eq!(controller.deck().items(), &['B', 'C', 'D', 'E', 'A']);
//!
//! // Releasing there fires the right-swipe action and returns to idle.
//! let swipe = controller.on_drag_ended(Vec2::new(120.0, 0.0)).unwrap();
//! assert_eq!(swipe.direction, SwipeDirection::Right);
//! assert!(!controller.is_dragging());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod actions;
pub mod changes;
pub mod classify;
pub mod controller;
pub mod shared;
pub mod shuffle;

pub use actions::{Swipe, SwipeActions};
pub use changes::{Changes, SubscriptionId};
pub use classify::{Axis, DragThresholds, SwipeDirection};
pub use controller::DeckController;
pub use shared::{SharedController, WeakController};
pub use shuffle::{ShuffleKind, ShuffleLatch, ShuffleTicket};
