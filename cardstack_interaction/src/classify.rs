// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag threshold classification.
//!
//! ## Rule
//!
//! A translation `(dx, dy)` is past threshold when `|dx| > horizontal` or
//! `|dy| > vertical`. The horizontal axis wins whenever `|dx| > horizontal`;
//! otherwise the vertical axis is assumed. The sign of the winning component
//! picks the direction: `+x` is right, `-x` left, `+y` down, `-y` up.
//!
//! The controller uses [`classify`] both for the live reorder during a drag and
//! for the swipe action on release, so the two decisions always agree for the
//! same translation.
//!
//! ```
//! use cardstack_interaction::classify::{DragThresholds, SwipeDirection, classify};
//! use kurbo::Vec2;
//!
//! let t = DragThresholds::new(100.0, 100.0);
//! assert_eq!(classify(Vec2::new(120.0, 300.0), t), Some(SwipeDirection::Right));
//! assert_eq!(classify(Vec2::new(40.0, -150.0), t), Some(SwipeDirection::Up));
//! assert_eq!(classify(Vec2::new(30.0, 0.0), t), None);
//! ```

use cardstack_layout::DeckConfig;
use kurbo::Vec2;

/// Axis of a swipe.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

/// Discrete result of a drag that went past threshold.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SwipeDirection {
    /// Negative x.
    Left,
    /// Positive x.
    Right,
    /// Negative y.
    Up,
    /// Positive y.
    Down,
}

impl SwipeDirection {
    /// All directions, in callback registration order.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// The axis this direction lies on.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Up | Self::Down => Axis::Vertical,
        }
    }

    /// `+1` for right/down, `-1` for left/up.
    pub const fn sign(self) -> i8 {
        match self {
            Self::Left | Self::Up => -1,
            Self::Right | Self::Down => 1,
        }
    }

    /// The direction on the same axis with the opposite sign.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

/// Per-axis magnitudes a drag must exceed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragThresholds {
    /// Limit on `|dx|`.
    pub horizontal: f64,
    /// Limit on `|dy|`.
    pub vertical: f64,
}

impl DragThresholds {
    /// Create thresholds from per-axis magnitudes.
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for DragThresholds {
    fn default() -> Self {
        Self::from(&DeckConfig::default())
    }
}

impl From<&DeckConfig> for DragThresholds {
    fn from(config: &DeckConfig) -> Self {
        Self::new(
            config.horizontal_drag_threshold,
            config.vertical_drag_threshold,
        )
    }
}

/// Classify a drag translation. `None` means below threshold.
///
/// NaN components never exceed a threshold.
pub fn classify(translation: Vec2, thresholds: DragThresholds) -> Option<SwipeDirection> {
    let Vec2 { x: dx, y: dy } = translation;
    if dx.abs() > thresholds.horizontal {
        Some(if dx > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        })
    } else if dy.abs() > thresholds.vertical {
        Some(if dy > 0.0 {
            SwipeDirection::Down
        } else {
            SwipeDirection::Up
        })
    } else {
        None
    }
}

/// True if `translation` is past either threshold.
pub fn is_past_threshold(translation: Vec2, thresholds: DragThresholds) -> bool {
    classify(translation, thresholds).is_some()
}
