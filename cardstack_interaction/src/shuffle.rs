// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-phase shuffle sequencing.
//!
//! ## Phases
//!
//! 1) Flip-out: [`ShuffleLatch::try_acquire`] sets the latch and hands out a
//!    [`ShuffleTicket`]. While it is held the renderer animates the top card
//!    off-stage for the configured duration.
//! 2) Completion: the ticket is handed back through
//!    [`ShuffleLatch::release`], which clears the latch in the same step.
//!    The controller applies the reorder and resets the drag state then.
//!
//! A second acquire while the latch is held yields `None`.
//! A ticket is not `Clone` and is consumed by release, so each sequence
//! completes or is cancelled exactly once. A ticket only releases the latch it
//! came from, and only for the run it was issued for; anything else is handed
//! back.
//!
//! Tickets carry the owning deck's [`DeckId`] and a per-latch generation that
//! advances on every acquire, so no shared counter or atomics are involved.
//!
//! ```
//! use cardstack_interaction::shuffle::{ShuffleKind, ShuffleLatch};
//!
//! let mut latch = ShuffleLatch::new();
//! let ticket = latch.try_acquire(ShuffleKind::Flip).unwrap();
//! assert!(latch.try_acquire(ShuffleKind::Shuffle).is_none());
//! assert_eq!(latch.release(ticket), Ok(ShuffleKind::Flip));
//! assert!(!latch.is_held());
//! ```

use cardstack_deck::DeckId;
use tracing::debug;

/// What the completion phase does to the deck.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShuffleKind {
    /// The top card goes to the bottom.
    Flip,
    /// The whole deck is randomly permuted.
    Shuffle,
}

/// Proof that a shuffle sequence is in flight.
///
/// Hand it back to complete or cancel the sequence. Dropping it leaves the
/// latch held.
#[must_use = "a dropped ticket leaves the shuffle latch held"]
#[derive(Debug, Eq, PartialEq)]
pub struct ShuffleTicket {
    owner: DeckId,
    generation: u32,
    kind: ShuffleKind,
}

impl ShuffleTicket {
    /// What completion will do.
    pub fn kind(&self) -> ShuffleKind {
        self.kind
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct InFlight {
    generation: u32,
    kind: ShuffleKind,
}

/// Re-entrancy guard for shuffle sequences.
#[derive(Debug, Eq, PartialEq)]
pub struct ShuffleLatch {
    owner: DeckId,
    generation: u32,
    in_flight: Option<InFlight>,
}

impl Default for ShuffleLatch {
    fn default() -> Self {
        Self::new()
    }
}

impl ShuffleLatch {
    /// An unheld latch with a fresh owner identity.
    pub fn new() -> Self {
        Self::for_deck(DeckId::new())
    }

    /// An unheld latch whose tickets are tied to `owner`.
    pub const fn for_deck(owner: DeckId) -> Self {
        Self {
            owner,
            generation: 0,
            in_flight: None,
        }
    }

    /// True while a sequence is in flight.
    pub fn is_held(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Kind of the sequence in flight, if any.
    pub fn kind(&self) -> Option<ShuffleKind> {
        self.in_flight.map(|f| f.kind)
    }

    /// Start a sequence. Returns `None` if one is already in flight.
    pub fn try_acquire(&mut self, kind: ShuffleKind) -> Option<ShuffleTicket> {
        if let Some(current) = self.in_flight {
            debug!(?current.kind, requested = ?kind, "shuffle already in flight");
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        let generation = self.generation;
        self.in_flight = Some(InFlight { generation, kind });
        Some(ShuffleTicket {
            owner: self.owner,
            generation,
            kind,
        })
    }

    /// End the sequence `ticket` belongs to and return its kind.
    ///
    /// A ticket issued by another latch, or for an earlier run of this one, is
    /// handed back unchanged in `Err`, and this latch is left as it was.
    pub fn release(&mut self, ticket: ShuffleTicket) -> Result<ShuffleKind, ShuffleTicket> {
        match self.in_flight {
            Some(current)
                if ticket.owner == self.owner && current.generation == ticket.generation =>
            {
                self.in_flight = None;
                Ok(current.kind)
            }
            _ => {
                debug!(generation = ticket.generation, "ignoring foreign shuffle ticket");
                Err(ticket)
            }
        }
    }
}
