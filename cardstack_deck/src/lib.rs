// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardstack_deck --heading-base-level=0

//! Cardstack Deck: the ordering model behind a swipeable card stack.
//!
//! - [`Deck`] is an identifiable, ordered collection whose front is the top of the stack.
//! - [`DeckItem`] is the only capability required of items: a stable identity and equality.
//! - [`visible_indices`] derives the window of items a renderer actually draws.
//!
//! Reorders never fail. Naming an item that is not in the deck is a silent no-op,
//! so a reorder request racing with an external removal cannot crash the UI.
//! Each reorder reports whether it changed anything, which higher layers use for
//! change tracking.
//!
//! ## Minimal usage
//!
//! ```
//! use cardstack_deck::Deck;
//!
//! let mut deck = Deck::new("letters", vec!['A', 'B', 'C', 'D', 'E']);
//! assert!(deck.move_to_back(&'A'));
//! assert_eq!(deck.items(), &['B', 'C', 'D', 'E', 'A']);
//!
//! // Already first: nothing to do.
//! assert!(!deck.move_to_front(&'B'));
//!
//! // Not present: ignored.
//! assert!(!deck.move_to_front(&'Z'));
//!
//! assert_eq!(deck.visible_window(3, true), vec![&'B', &'C', &'A']);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//! The `std` feature (on by default) adds [`Deck::shuffle`] backed by the thread-local RNG;
//! [`Deck::shuffle_with`] is always available.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod deck;
mod types;
mod window;

pub use deck::Deck;
pub use types::{DeckError, DeckId, DeckItem};
pub use window::visible_indices;
