// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification between the controller and whoever renders it.
//!
//! The controller records what each handled event changed as [`Changes`].
//! A renderer can either poll with
//! [`DeckController::take_changes`](crate::DeckController::take_changes), or
//! register an observer with
//! [`DeckController::subscribe`](crate::DeckController::subscribe) that is called
//! once per handled event that changed anything.

use alloc::boxed::Box;
use alloc::vec::Vec;

bitflags::bitflags! {
    /// What a handled event changed.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// Deck order changed.
        const ORDER     = 0b0000_0001;
        /// The active item was adopted or released.
        const ACTIVE    = 0b0000_0010;
        /// The drag offset changed.
        const OFFSET    = 0b0000_0100;
        /// A shuffle phase started or ended.
        const ANIMATION = 0b0000_1000;
        /// The effective configuration changed.
        const CONFIG    = 0b0001_0000;
        /// The backing collection was replaced.
        const ITEMS     = 0b0010_0000;
    }
}

impl Changes {
    /// True if the visual layout has to be recomputed.
    ///
    /// Every change kind affects layout; this exists so call sites read as intent.
    pub fn needs_layout(self) -> bool {
        !self.is_empty()
    }
}

/// Handle returned by [`DeckController::subscribe`](crate::DeckController::subscribe).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(Changes)>;

/// Registry of change observers.
#[derive(Default)]
pub(crate) struct Observers {
    next: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl core::fmt::Debug for Observers {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Observers {
    pub(crate) fn subscribe(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub(crate) fn notify(&mut self, changes: Changes) {
        if changes.is_empty() {
            return;
        }
        for (_, observer) in &mut self.entries {
            observer(changes);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
