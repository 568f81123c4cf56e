// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core deck implementation: construction, lookup, and reordering.

use alloc::string::String;
use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{trace, warn};

use crate::types::{DeckError, DeckId, DeckItem};
use crate::window::visible_indices;

/// An identifiable, ordered collection of items.
///
/// The front of [`items`](Deck::items) is the top of the visual stack.
///
/// ## Semantics
///
/// - Item identities are unique at all times.
/// - Reorders only permute; they never add, drop, or duplicate items.
/// - Operations naming an item that is not present are silent no-ops.
///   Every reorder returns whether the order actually changed.
#[derive(Clone, Debug)]
pub struct Deck<T: DeckItem> {
    id: DeckId,
    name: String,
    items: Vec<T>,
}

impl<T: DeckItem> Deck<T> {
    /// Create a deck, keeping the first occurrence of each identity.
    ///
    /// Later items that repeat an identity are dropped with a warning.
    /// Use [`Deck::try_new`] to reject such input instead.
    pub fn new(name: impl Into<String>, items: Vec<T>) -> Self {
        Self {
            id: DeckId::new(),
            name: name.into(),
            items: dedup_by_id(items),
        }
    }

    /// Create a deck, failing if two items share an identity.
    pub fn try_new(name: impl Into<String>, items: Vec<T>) -> Result<Self, DeckError> {
        if let Some((first, duplicate)) = first_duplicate(&items) {
            return Err(DeckError::DuplicateItem { first, duplicate });
        }
        Ok(Self {
            id: DeckId::new(),
            name: name.into(),
            items,
        })
    }

    /// Identifier assigned at creation.
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in stack order, top first.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the deck holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The top item, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The bottom item, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterate items top to bottom.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// True if an item with the same identity is present.
    pub fn contains(&self, item: &T) -> bool {
        self.index_of(item).is_some()
    }

    /// Position of `item` by identity.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.index_of_id(&item.id())
    }

    /// Position of the item carrying `id`.
    pub fn index_of_id(&self, id: &T::Id) -> Option<usize> {
        self.items.iter().position(|it| it.id() == *id)
    }

    /// The item carrying `id`, if present.
    pub fn get_by_id(&self, id: &T::Id) -> Option<&T> {
        self.index_of_id(id).map(|i| &self.items[i])
    }

    /// Replace the whole backing collection.
    ///
    /// Duplicate identities are dropped as in [`Deck::new`]. The deck keeps its
    /// id and name.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = dedup_by_id(items);
    }

    /// Move `item` to the bottom of the deck.
    pub fn move_to_back(&mut self, item: &T) -> bool {
        self.move_id_to_back(&item.id())
    }

    /// Move `item` to the top of the deck.
    pub fn move_to_front(&mut self, item: &T) -> bool {
        self.move_id_to_front(&item.id())
    }

    /// Move the item carrying `id` to the bottom of the deck.
    ///
    /// No-op if the item is absent or already last.
    pub fn move_id_to_back(&mut self, id: &T::Id) -> bool {
        let Some(i) = self.index_of_id(id) else {
            trace!(?id, "move_to_back: item not in deck");
            return false;
        };
        if i + 1 == self.items.len() {
            return false;
        }
        self.items[i..].rotate_left(1);
        true
    }

    /// Move the item carrying `id` to the top of the deck.
    ///
    /// No-op if the item is absent or already first.
    pub fn move_id_to_front(&mut self, id: &T::Id) -> bool {
        let Some(i) = self.index_of_id(id) else {
            trace!(?id, "move_to_front: item not in deck");
            return false;
        };
        if i == 0 {
            return false;
        }
        self.items[..=i].rotate_right(1);
        true
    }

    /// Move the top item to the bottom. No-op on an empty deck.
    pub fn move_first_to_back(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.rotate_left(1);
        true
    }

    /// Move the bottom item to the top. No-op on an empty deck.
    pub fn move_last_to_front(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.rotate_right(1);
        true
    }

    /// Apply a uniformly random permutation using the thread-local RNG.
    ///
    /// Returns `false` (and does nothing) when there are fewer than two items.
    #[cfg(feature = "std")]
    pub fn shuffle(&mut self) -> bool {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// Apply a uniformly random permutation drawn from `rng`.
    ///
    /// Returns `false` (and does nothing) when there are fewer than two items.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.shuffle(rng);
        true
    }

    /// Items rendered for a stack of `display_count` cards.
    ///
    /// See [`visible_indices`] for the selection rule.
    pub fn visible_window(&self, display_count: usize, always_show_last: bool) -> Vec<&T> {
        visible_indices(self.items.len(), display_count, always_show_last)
            .into_iter()
            .map(|i| &self.items[i])
            .collect()
    }
}

impl<'a, T: DeckItem> IntoIterator for &'a Deck<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn dedup_by_id<T: DeckItem>(items: Vec<T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        let id = item.id();
        if out.iter().any(|kept| kept.id() == id) {
            warn!(?id, "dropping item with duplicate id");
            continue;
        }
        out.push(item);
    }
    out
}

fn first_duplicate<T: DeckItem>(items: &[T]) -> Option<(usize, usize)> {
    for (j, item) in items.iter().enumerate() {
        let id = item.id();
        if let Some(i) = items[..j].iter().position(|earlier| earlier.id() == id) {
            return Some((i, j));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn letters() -> Deck<char> {
        Deck::new("letters", vec!['A', 'B', 'C', 'D', 'E'])
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Card {
        id: u32,
        face: &'static str,
    }

    impl DeckItem for Card {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    #[test]
    fn move_to_back_appends() {
        let mut d = letters();
        assert!(d.move_to_back(&'B'));
        assert_eq!(d.items(), &['A', 'C', 'D', 'E', 'B']);
    }

    #[test]
    fn move_to_front_prepends() {
        let mut d = letters();
        assert!(d.move_to_front(&'D'));
        assert_eq!(d.items(), &['D', 'A', 'B', 'C', 'E']);
    }

    #[test]
    fn move_to_front_of_first_is_noop() {
        let mut d = letters();
        assert!(!d.move_to_front(&'A'));
        assert_eq!(d.items(), &['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn move_to_back_of_last_is_noop() {
        let mut d = letters();
        assert!(!d.move_to_back(&'E'));
        assert_eq!(d.items(), &['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn absent_item_is_ignored() {
        let mut d = letters();
        assert!(!d.move_to_back(&'Z'));
        assert!(!d.move_to_front(&'Z'));
        assert_eq!(d.items(), &['A', 'B', 'C', 'D', 'E']);
        assert_eq!(d.index_of(&'Z'), None);
    }

    #[test]
    fn first_and_last_wrappers() {
        let mut d = letters();
        assert!(d.move_first_to_back());
        assert_eq!(d.items(), &['B', 'C', 'D', 'E', 'A']);
        assert!(d.move_last_to_front());
        assert_eq!(d.items(), &['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn wrappers_on_empty_and_single_decks() {
        let mut empty: Deck<char> = Deck::new("empty", vec![]);
        assert!(!empty.move_first_to_back());
        assert!(!empty.move_last_to_front());
        assert!(!empty.shuffle_with(&mut ChaCha8Rng::seed_from_u64(1)));
        let mut one = Deck::new("one", vec!['A']);
        assert!(!one.move_first_to_back());
        assert_eq!(one.items(), &['A']);
    }

    #[test]
    fn identity_not_value_drives_lookup() {
        let mut d = Deck::new(
            "cards",
            vec![
                Card { id: 1, face: "ace" },
                Card { id: 2, face: "two" },
            ],
        );
        // Same id, different face: still the same card.
        let stale = Card { id: 1, face: "renamed" };
        assert_eq!(d.index_of(&stale), Some(0));
        assert!(d.move_to_back(&stale));
        assert_eq!(d.items()[1].face, "ace");
    }

    #[test]
    fn new_drops_later_duplicates() {
        let d = Deck::new("dups", vec!['A', 'B', 'A', 'C', 'B']);
        assert_eq!(d.items(), &['A', 'B', 'C']);
    }

    #[test]
    fn try_new_rejects_duplicates() {
        let err = Deck::try_new("dups", vec!['A', 'B', 'C', 'B']).unwrap_err();
        assert_eq!(
            err,
            DeckError::DuplicateItem {
                first: 1,
                duplicate: 3
            }
        );
        assert!(Deck::try_new("ok", vec!['A', 'B']).is_ok());
    }

    #[test]
    fn replace_items_keeps_identity_and_name() {
        let mut d = letters();
        let id = d.id();
        d.replace_items(vec!['X', 'Y', 'X']);
        assert_eq!(d.items(), &['X', 'Y']);
        assert_eq!(d.id(), id);
        assert_eq!(d.name(), "letters");
    }

    #[test]
    fn seeded_shuffle_is_a_permutation() {
        let mut d = letters();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(d.shuffle_with(&mut rng));
        let mut sorted: Vec<char> = d.items().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec!['A', 'B', 'C', 'D', 'E']);
    }

    #[test]
    fn get_by_id_finds_item() {
        let d = letters();
        assert_eq!(d.get_by_id(&'C'), Some(&'C'));
        assert_eq!(d.get_by_id(&'Q'), None);
        assert!(d.contains(&'E'));
    }
}
