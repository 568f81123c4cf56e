// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal card list: the flat alternative to the stacked deck.

use core::ops::Range;

use kurbo::Rect;

/// Cards laid out left to right with fixed width and spacing.
///
/// ```
/// use cardstack_layout::HorizontalList;
///
/// let list = HorizontalList::new(100.0, 10.0);
/// assert_eq!(list.slot_offset(2), 220.0);
/// // A 250 wide viewport scrolled to 200 shows cards 1..=4.
/// assert_eq!(list.visible_range(20, 200.0, 250.0), 1..5);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HorizontalList {
    /// Width of every card.
    pub item_width: f64,
    /// Gap between adjacent cards.
    pub spacing: f64,
    /// Space before the first card and after the last.
    pub leading_inset: f64,
}

impl Default for HorizontalList {
    fn default() -> Self {
        Self::new(240.0, 16.0)
    }
}

impl HorizontalList {
    /// A list with no inset.
    pub const fn new(item_width: f64, spacing: f64) -> Self {
        Self {
            item_width,
            spacing,
            leading_inset: 0.0,
        }
    }

    /// Set the inset before the first card and after the last.
    #[must_use]
    pub const fn with_leading_inset(mut self, inset: f64) -> Self {
        self.leading_inset = inset;
        self
    }

    fn width(&self) -> f64 {
        clamp_non_negative(self.item_width)
    }

    fn stride(&self) -> f64 {
        self.width() + clamp_non_negative(self.spacing)
    }

    fn inset(&self) -> f64 {
        clamp_non_negative(self.leading_inset)
    }

    /// X coordinate of the left edge of card `index`.
    pub fn slot_offset(&self, index: usize) -> f64 {
        #[allow(
            clippy::cast_precision_loss,
            reason = "Card counts stay far below 2^52."
        )]
        let i = index as f64;
        self.inset() + i * self.stride()
    }

    /// Bounds of card `index` for a row of the given `height`.
    pub fn slot_rect(&self, index: usize, height: f64) -> Rect {
        let x0 = self.slot_offset(index);
        Rect::new(x0, 0.0, x0 + self.width(), clamp_non_negative(height))
    }

    /// Scrollable width of a list of `count` cards.
    pub fn content_width(&self, count: usize) -> f64 {
        if count == 0 {
            return 2.0 * self.inset();
        }
        self.slot_offset(count - 1) + self.width() + self.inset()
    }

    /// Cards that intersect the viewport `[scroll_x, scroll_x + viewport_width)`.
    pub fn visible_range(&self, count: usize, scroll_x: f64, viewport_width: f64) -> Range<usize> {
        let stride = self.stride();
        let width = self.width();
        let viewport_width = clamp_non_negative(viewport_width);
        if count == 0
            || stride <= 0.0
            || width <= 0.0
            || viewport_width <= 0.0
            || !scroll_x.is_finite()
        {
            return 0..0;
        }
        let left = scroll_x - self.inset();
        let right = left + viewport_width;
        // Card i spans [i * stride, i * stride + width).
        let start = floor_index((left - width) / stride).map_or(0, |i| i + 1);
        let end = ceil_index(right / stride).min(count);
        start.min(end)..end
    }
}

fn clamp_non_negative(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Largest index `i` with `i <= v`, or `None` if `v < 0`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Inputs are checked non-negative; saturating float casts are intended."
)]
fn floor_index(v: f64) -> Option<usize> {
    if v < 0.0 { None } else { Some(v as usize) }
}

/// Smallest index `i` with `i >= v`, clamped at zero.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "Inputs are checked non-negative; saturating float casts are intended."
)]
fn ceil_index(v: f64) -> usize {
    if v <= 0.0 {
        return 0;
    }
    let t = v as usize;
    if (t as f64) < v { t.saturating_add(1) } else { t }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_include_inset_and_spacing() {
        let list = HorizontalList::new(100.0, 10.0).with_leading_inset(5.0);
        assert_eq!(list.slot_offset(0), 5.0);
        assert_eq!(list.slot_offset(3), 335.0);
        assert_eq!(list.content_width(4), 440.0);
        assert_eq!(list.content_width(0), 10.0);
    }

    #[test]
    fn visible_range_at_origin() {
        let list = HorizontalList::new(100.0, 10.0);
        assert_eq!(list.visible_range(10, 0.0, 250.0), 0..3);
    }

    #[test]
    fn gap_only_boundary_is_not_visible() {
        // Viewport starts inside the gap after card 0.
        let list = HorizontalList::new(100.0, 10.0);
        assert_eq!(list.visible_range(10, 105.0, 50.0), 1..2);
    }

    #[test]
    fn visible_range_clamped_to_count() {
        let list = HorizontalList::new(100.0, 10.0);
        assert_eq!(list.visible_range(3, 200.0, 1000.0), 1..3);
        assert_eq!(list.visible_range(3, 5000.0, 100.0), 3..3);
    }

    #[test]
    fn negative_scroll_shows_leading_cards() {
        let list = HorizontalList::new(100.0, 10.0);
        assert_eq!(list.visible_range(5, -50.0, 100.0), 0..1);
    }

    #[test]
    fn degenerate_lists_show_nothing() {
        assert_eq!(
            HorizontalList::new(0.0, 0.0).visible_range(5, 0.0, 100.0),
            0..0
        );
        assert_eq!(
            HorizontalList::new(100.0, 10.0).visible_range(0, 0.0, 100.0),
            0..0
        );
        assert_eq!(
            HorizontalList::new(100.0, 10.0).visible_range(5, f64::NAN, 100.0),
            0..0
        );
    }

    #[test]
    fn slot_rect_spans_item_width() {
        let list = HorizontalList::new(100.0, 10.0);
        assert_eq!(list.slot_rect(1, 80.0), Rect::new(110.0, 0.0, 210.0, 80.0));
    }
}
