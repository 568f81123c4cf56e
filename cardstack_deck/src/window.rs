// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible window selection.

use alloc::vec::Vec;

/// Indices of the items rendered for a deck of `len` items.
///
/// The window holds the first `display_count` items. With `always_show_last`,
/// the bottom item replaces the last slot when it would otherwise be hidden.
///
/// A `display_count` of zero is treated as one. In a single-card window a
/// pinned bottom item takes the only slot.
///
/// ```
/// use cardstack_deck::visible_indices;
///
/// assert_eq!(visible_indices(5, 3, false), vec![0, 1, 2]);
/// assert_eq!(visible_indices(5, 3, true), vec![0, 1, 4]);
/// assert_eq!(visible_indices(2, 3, true), vec![0, 1]);
/// ```
pub fn visible_indices(len: usize, display_count: usize, always_show_last: bool) -> Vec<usize> {
    let count = display_count.max(1).min(len);
    let mut out: Vec<usize> = (0..count).collect();
    if always_show_last
        && len > count
        && let Some(slot) = out.last_mut()
    {
        *slot = len - 1;
    }
    out
}
