// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=cardstack_layout --heading-base-level=0

//! Cardstack Layout: configuration and pure presentation math for card decks.
//!
//! ## Overview
//!
//! This crate turns a [`Deck`](cardstack_deck::Deck) plus live interaction state into
//! per-card presentation values a renderer can apply directly.
//! It does not draw, animate, or capture input.
//!
//! - [`DeckConfig`]: display count, pinning, direction, per-depth steps, drag thresholds, rotation.
//! - [`ConfigContext`]: the ambient default for decks without configuration of their own.
//! - [`layout_deck`] / [`layout_window`]: z-order, scale, vertical offset, drag offset, rotation.
//! - [`HorizontalList`]: the flat list variant with viewport culling.
//!
//! ## Minimal usage
//!
//! ```
//! use cardstack_deck::Deck;
//! use cardstack_layout::{DeckConfig, StackState, layout_deck};
//!
//! let deck = Deck::new("letters", vec!['A', 'B', 'C', 'D']);
//! let config = DeckConfig::default().sanitized();
//! let placed = layout_deck(&deck, &StackState::idle(), &config);
//!
//! assert_eq!(placed.len(), 3);
//! assert_eq!(*placed[0].item, 'A');
//! assert!(placed[0].layout.z_index > placed[1].layout.z_index);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod list;
mod stack;

pub use config::{ConfigContext, DeckConfig, StackDirection};
pub use list::HorizontalList;
pub use stack::{CardLayout, PlacedCard, StackState, card_layout, layout_deck, layout_window};
