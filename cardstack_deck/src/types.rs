// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the deck: the item capability, deck identifiers, and errors.

use alloc::string::String;
use core::fmt;

use uuid::Uuid;

/// Capability required of anything stored in a [`Deck`](crate::Deck).
///
/// An item needs a stable identity and value equality, nothing else.
/// The deck never inspects any other field.
///
/// ## Identity
///
/// Two items with the same [`id`](DeckItem::id) are the same card, even when
/// other fields differ. A deck never holds two items with equal ids.
///
/// ```
/// use cardstack_deck::DeckItem;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Card {
///     id: u32,
///     title: &'static str,
/// }
///
/// impl DeckItem for Card {
///     type Id = u32;
///     fn id(&self) -> u32 {
///         self.id
///     }
/// }
/// ```
pub trait DeckItem: PartialEq {
    /// Identity type; cheap to clone and compare.
    type Id: Clone + Eq + fmt::Debug;

    /// Returns the stable identity of this item.
    fn id(&self) -> Self::Id;
}

macro_rules! self_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DeckItem for $ty {
                type Id = Self;
                #[inline]
                fn id(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

self_identified!(
    char,
    u8,
    u16,
    u32,
    u64,
    usize,
    i8,
    i16,
    i32,
    i64,
    isize,
    &'static str,
    String,
);

/// Opaque, unique identifier of a [`Deck`](crate::Deck).
///
/// Assigned once at creation from a random (v4) UUID and never changes.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckId(Uuid);

impl DeckId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// The underlying UUID.
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for DeckId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Errors reported by the checked deck constructor [`Deck::try_new`](crate::Deck::try_new).
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DeckError {
    /// Two items in the initial sequence share an identity.
    #[error("item at index {duplicate} has the same id as the item at index {first}")]
    DuplicateItem {
        /// Index of the first item carrying the identity.
        first: usize,
        /// Index of the later item carrying the same identity.
        duplicate: usize,
    },
}
