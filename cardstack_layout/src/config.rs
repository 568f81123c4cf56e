// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck configuration, clamping, and ambient resolution.
//!
//! ## Resolution
//!
//! A deck either carries its own [`DeckConfig`] or inherits one from its
//! surroundings. The surroundings are passed explicitly as a [`ConfigContext`];
//! there is no global default to look up.
//!
//! ```
//! use cardstack_layout::{ConfigContext, DeckConfig};
//!
//! let ambient = ConfigContext::new(DeckConfig { item_display_count: 5, ..DeckConfig::default() });
//!
//! // No explicit value: inherit.
//! assert_eq!(ambient.resolve(None).item_display_count, 5);
//!
//! // Explicit value wins.
//! let own = DeckConfig { item_display_count: 2, ..DeckConfig::default() };
//! assert_eq!(ambient.resolve(Some(&own)).item_display_count, 2);
//! ```

use core::time::Duration;

use kurbo::Vec2;
use tracing::warn;

/// Direction in which deeper cards peek out from under the top card.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackDirection {
    /// Deeper cards are shifted up.
    Up,
    /// Deeper cards are shifted down.
    #[default]
    Down,
}

impl StackDirection {
    /// `+1.0` for [`Down`](Self::Down), `-1.0` for [`Up`](Self::Up).
    pub const fn sign(self) -> f64 {
        match self {
            Self::Up => -1.0,
            Self::Down => 1.0,
        }
    }
}

/// Configuration of a card stack.
///
/// [`Default`] is the standard configuration.
/// Values are used as given by the layout and gesture code only after
/// [`DeckConfig::sanitized`]; [`DeckConfig::resolve`] sanitizes for you.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DeckConfig {
    /// How many cards are visually stacked.
    pub item_display_count: usize,
    /// Pin the bottom card into the last visible slot.
    pub always_show_last_item: bool,
    /// Which way deeper cards are shifted.
    pub direction: StackDirection,
    /// Vertical shift per depth step.
    pub vertical_offset: f64,
    /// Scale reduction per depth step.
    pub scale_offset: f64,
    /// Horizontal translation the top card must exceed to count as a swipe.
    pub horizontal_drag_threshold: f64,
    /// Vertical translation the top card must exceed to count as a swipe.
    pub vertical_drag_threshold: f64,
    /// Degrees of rotation per unit of horizontal drag.
    pub drag_rotation_factor: f64,
    /// Duration of the flip-out phase of a shuffle.
    ///
    /// The controller does not keep time. Renderers pace the phase with
    /// [`DeckConfig::flip_out_offset_at`] and complete it once this has elapsed.
    pub shuffle_duration: Duration,
    /// Where the top card flies during the flip-out phase.
    pub flip_out_offset: Vec2,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            item_display_count: 3,
            always_show_last_item: false,
            direction: StackDirection::Down,
            vertical_offset: 10.0,
            scale_offset: 0.05,
            horizontal_drag_threshold: 100.0,
            vertical_drag_threshold: 100.0,
            drag_rotation_factor: 0.05,
            shuffle_duration: Duration::from_millis(300),
            flip_out_offset: Vec2::new(0.0, -600.0),
        }
    }
}

impl DeckConfig {
    /// The effective configuration: `explicit` if given, else `ambient`. Always sanitized.
    pub fn resolve(explicit: Option<&Self>, ambient: &Self) -> Self {
        explicit.unwrap_or(ambient).sanitized()
    }

    /// Top-card offset `elapsed` into the flip-out phase.
    ///
    /// Moves linearly from zero to `flip_out_offset` over `shuffle_duration`,
    /// then holds. A zero duration jumps straight to the end.
    pub fn flip_out_offset_at(&self, elapsed: Duration) -> Vec2 {
        self.flip_out_offset * self.flip_out_progress(elapsed)
    }

    /// Fraction of the flip-out phase that `elapsed` covers, in `0.0..=1.0`.
    pub fn flip_out_progress(&self, elapsed: Duration) -> f64 {
        if self.shuffle_duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.shuffle_duration.as_secs_f64()).min(1.0)
    }

    /// Return a copy with misconfigured values clamped.
    ///
    /// - `item_display_count` is at least one.
    /// - Non-finite numbers fall back to the standard value.
    /// - Thresholds and per-depth steps are non-negative.
    /// - `scale_offset` is capped so the deepest visible card keeps a non-negative scale.
    ///
    /// Each clamp is logged at `warn` level.
    #[must_use]
    pub fn sanitized(&self) -> Self {
        let standard = Self::default();
        let mut out = self.clone();

        if out.item_display_count == 0 {
            warn!("item_display_count of 0 clamped to 1");
            out.item_display_count = 1;
        }

        out.vertical_offset = non_negative(
            "vertical_offset",
            out.vertical_offset,
            standard.vertical_offset,
        );
        out.horizontal_drag_threshold = non_negative(
            "horizontal_drag_threshold",
            out.horizontal_drag_threshold,
            standard.horizontal_drag_threshold,
        );
        out.vertical_drag_threshold = non_negative(
            "vertical_drag_threshold",
            out.vertical_drag_threshold,
            standard.vertical_drag_threshold,
        );
        out.drag_rotation_factor = finite_or(
            "drag_rotation_factor",
            out.drag_rotation_factor,
            standard.drag_rotation_factor,
        );

        let scale_offset = non_negative("scale_offset", out.scale_offset, standard.scale_offset);
        out.scale_offset = if out.item_display_count > 1 {
            #[allow(
                clippy::cast_precision_loss,
                reason = "Display counts are small; exact in f64."
            )]
            let max_step = 1.0 / (out.item_display_count - 1) as f64;
            if scale_offset > max_step {
                warn!(scale_offset, max_step, "scale_offset capped");
                max_step
            } else {
                scale_offset
            }
        } else {
            scale_offset
        };

        if !out.flip_out_offset.is_finite() {
            warn!("flip_out_offset is not finite; using the standard value");
            out.flip_out_offset = standard.flip_out_offset;
        }
        out
    }
}

fn finite_or(setting: &'static str, value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(setting, value, fallback, "non-finite config value replaced");
        fallback
    }
}

fn non_negative(setting: &'static str, value: f64, fallback: f64) -> f64 {
    let value = finite_or(setting, value, fallback);
    if value < 0.0 {
        warn!(setting, value, "negative config value clamped to 0");
        0.0
    } else {
        value
    }
}

/// Ambient configuration handed down to decks that do not carry their own.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigContext {
    deck: DeckConfig,
}

impl ConfigContext {
    /// Create a context providing `deck` as the ambient default.
    pub fn new(deck: DeckConfig) -> Self {
        Self { deck }
    }

    /// The ambient default, as provided.
    pub fn deck_config(&self) -> &DeckConfig {
        &self.deck
    }

    /// Effective configuration for a deck whose own value is `explicit`.
    pub fn resolve(&self, explicit: Option<&DeckConfig>) -> DeckConfig {
        DeckConfig::resolve(explicit, &self.deck)
    }
}
