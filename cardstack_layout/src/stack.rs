// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual layout of a stacked deck.
//!
//! ## Overview
//!
//! Every value here is derived from the visible window, the live interaction
//! state, and the configuration. Nothing is stored; recompute whenever the deck
//! order, the active item, the drag offset, or the configuration changes.
//!
//! For a card at `position` in a window of `n` cards:
//!
//! - `z_index = n - position`, so the top card draws above the rest.
//! - `scale = 1 - position * scale_offset`.
//! - `vertical_offset = position * vertical_offset * direction.sign()`, or zero
//!   for every card while a shuffle is in progress.
//! - `drag_offset` and `drag_rotation = drag_offset.x * drag_rotation_factor`
//!   (degrees) apply to the active card only.
//! - `animation_offset` moves the top card during a flip-out phase.

use alloc::vec::Vec;

use cardstack_deck::{Deck, DeckItem};
use kurbo::{Affine, Point, Vec2};

use crate::config::DeckConfig;

/// Live interaction state consumed by the layout.
#[derive(Clone, Debug, PartialEq)]
pub struct StackState<'a, Id> {
    /// Identity of the card being dragged, if any.
    pub active: Option<&'a Id>,
    /// Translation of the active card since the gesture began.
    pub drag_offset: Vec2,
    /// A flip or shuffle phase is in flight; per-depth vertical offsets are suppressed.
    pub shuffling: bool,
    /// Offset of the top card during a flip-out phase.
    pub animation_offset: Vec2,
}

impl<Id> StackState<'_, Id> {
    /// No drag and no animation.
    pub const fn idle() -> Self {
        Self {
            active: None,
            drag_offset: Vec2::ZERO,
            shuffling: false,
            animation_offset: Vec2::ZERO,
        }
    }
}

impl<Id> Default for StackState<'_, Id> {
    fn default() -> Self {
        Self::idle()
    }
}

/// Computed presentation of one visible card.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CardLayout {
    /// Stacking order. Higher is drawn on top.
    pub z_index: i32,
    /// Uniform scale factor.
    pub scale: f64,
    /// Per-depth vertical shift.
    pub vertical_offset: f64,
    /// Drag translation; zero for inactive cards.
    pub drag_offset: Vec2,
    /// Rotation in degrees; zero for inactive cards.
    pub drag_rotation: f64,
    /// Flip-out translation; zero except for the top card during a flip.
    pub animation_offset: Vec2,
}

impl CardLayout {
    /// Total translation applied to the card.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(0.0, self.vertical_offset) + self.drag_offset + self.animation_offset
    }

    /// Affine transform placing a card whose untransformed center is `center`.
    ///
    /// Scale and rotation are about the center, followed by [`translation`](Self::translation).
    pub fn transform_about(&self, center: Point) -> Affine {
        let to_origin = Affine::translate(-center.to_vec2());
        let back = Affine::translate(center.to_vec2() + self.translation());
        back * Affine::rotate(self.drag_rotation.to_radians())
            * Affine::scale(self.scale)
            * to_origin
    }
}

/// A visible card with its computed layout.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedCard<'a, T> {
    /// The card.
    pub item: &'a T,
    /// Position in the visible window; 0 is the top.
    pub position: usize,
    /// Computed presentation.
    pub layout: CardLayout,
}

/// Layout of a single card at `position` in a window of `window_size` cards.
pub fn card_layout<Id>(
    position: usize,
    window_size: usize,
    is_active: bool,
    state: &StackState<'_, Id>,
    config: &DeckConfig,
) -> CardLayout {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Window positions are small; exact in f64."
    )]
    let depth = position as f64;
    let z_index = i32::try_from(window_size.saturating_sub(position)).unwrap_or(i32::MAX);
    let vertical_offset = if state.shuffling {
        0.0
    } else {
        depth * config.vertical_offset * config.direction.sign()
    };
    let (drag_offset, drag_rotation) = if is_active {
        (
            state.drag_offset,
            state.drag_offset.x * config.drag_rotation_factor,
        )
    } else {
        (Vec2::ZERO, 0.0)
    };
    let animation_offset = if position == 0 {
        state.animation_offset
    } else {
        Vec2::ZERO
    };
    CardLayout {
        z_index,
        scale: 1.0 - depth * config.scale_offset,
        vertical_offset,
        drag_offset,
        drag_rotation,
        animation_offset,
    }
}

/// Lay out an already computed visible window, top card first.
pub fn layout_window<'a, T: DeckItem>(
    window: &[&'a T],
    state: &StackState<'_, T::Id>,
    config: &DeckConfig,
) -> Vec<PlacedCard<'a, T>> {
    let n = window.len();
    window
        .iter()
        .enumerate()
        .map(|(position, &item)| {
            let is_active = state.active.is_some_and(|id| item.id() == *id);
            PlacedCard {
                item,
                position,
                layout: card_layout(position, n, is_active, state, config),
            }
        })
        .collect()
}

/// Compute the visible window of `deck` and lay it out.
///
/// `config` is used as given; pass a [`sanitized`](DeckConfig::sanitized) or
/// [`resolved`](DeckConfig::resolve) configuration.
pub fn layout_deck<'a, T: DeckItem>(
    deck: &'a Deck<T>,
    state: &StackState<'_, T::Id>,
    config: &DeckConfig,
) -> Vec<PlacedCard<'a, T>> {
    let window = deck.visible_window(config.item_display_count, config.always_show_last_item);
    layout_window(&window, state, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StackDirection;
    use alloc::vec;

    fn deck() -> Deck<char> {
        Deck::new("letters", vec!['A', 'B', 'C', 'D', 'E'])
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn window_depth_drives_z_scale_and_offset() {
        let d = deck();
        let cfg = DeckConfig::default();
        let placed = layout_deck(&d, &StackState::idle(), &cfg);
        assert_eq!(placed.len(), 3);
        let items: Vec<char> = placed.iter().map(|p| *p.item).collect();
        assert_eq!(items, vec!['A', 'B', 'C']);

        let z: Vec<i32> = placed.iter().map(|p| p.layout.z_index).collect();
        assert_eq!(z, vec![3, 2, 1]);
        assert!(close(placed[1].layout.scale, 0.95));
        assert!(close(placed[2].layout.scale, 0.90));
        assert!(close(placed[2].layout.vertical_offset, 20.0));
        assert_eq!(placed[0].layout.vertical_offset, 0.0);
    }

    #[test]
    fn stack_growing_up_negates_offsets() {
        let d = deck();
        let cfg = DeckConfig {
            direction: StackDirection::Up,
            ..DeckConfig::default()
        };
        let placed = layout_deck(&d, &StackState::idle(), &cfg);
        assert!(close(placed[1].layout.vertical_offset, -10.0));
        assert!(close(placed[2].layout.vertical_offset, -20.0));
    }

    #[test]
    fn only_active_card_rotates() {
        let d = deck();
        let cfg = DeckConfig::default();
        let active = 'A';
        let state = StackState {
            active: Some(&active),
            drag_offset: Vec2::new(80.0, 12.0),
            ..StackState::idle()
        };
        let placed = layout_deck(&d, &state, &cfg);
        assert_eq!(placed[0].layout.drag_offset, Vec2::new(80.0, 12.0));
        assert!(close(placed[0].layout.drag_rotation, 4.0));
        for p in &placed[1..] {
            assert_eq!(p.layout.drag_offset, Vec2::ZERO);
            assert_eq!(p.layout.drag_rotation, 0.0);
        }
    }

    #[test]
    fn active_card_keeps_drag_after_moving_down_the_window() {
        // The active card was optimistically moved to the back; it is still
        // dragged wherever it lands in the window.
        let mut d = deck();
        d.move_to_back(&'A');
        let cfg = DeckConfig {
            always_show_last_item: true,
            ..DeckConfig::default()
        };
        let active = 'A';
        let state = StackState {
            active: Some(&active),
            drag_offset: Vec2::new(-150.0, 0.0),
            ..StackState::idle()
        };
        let placed = layout_deck(&d, &state, &cfg);
        assert_eq!(*placed[2].item, 'A');
        assert_eq!(placed[2].layout.drag_offset, Vec2::new(-150.0, 0.0));
        assert_eq!(placed[0].layout.drag_offset, Vec2::ZERO);
    }

    #[test]
    fn shuffling_suppresses_vertical_offsets() {
        let d = deck();
        let cfg = DeckConfig::default();
        let state = StackState {
            shuffling: true,
            animation_offset: Vec2::new(0.0, -600.0),
            ..StackState::idle()
        };
        let placed = layout_deck(&d, &state, &cfg);
        assert!(placed.iter().all(|p| p.layout.vertical_offset == 0.0));
        assert_eq!(placed[0].layout.animation_offset, Vec2::new(0.0, -600.0));
        assert_eq!(placed[1].layout.animation_offset, Vec2::ZERO);
    }

    #[test]
    fn empty_deck_has_no_cards() {
        let d: Deck<char> = Deck::new("empty", vec![]);
        assert!(layout_deck(&d, &StackState::idle(), &DeckConfig::default()).is_empty());
    }

    #[test]
    fn transform_maps_center_by_translation() {
        let layout = CardLayout {
            z_index: 1,
            scale: 0.5,
            vertical_offset: 10.0,
            drag_offset: Vec2::new(30.0, 0.0),
            drag_rotation: 15.0,
            animation_offset: Vec2::ZERO,
        };
        let center = Point::new(100.0, 50.0);
        let moved = layout.transform_about(center) * center;
        assert!(close(moved.x, 130.0));
        assert!(close(moved.y, 60.0));
    }
}
