// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deck interaction controller.
//!
//! ## States
//!
//! - **Idle**: no active item, zero drag offset.
//! - **Dragging**: one active item and its live translation.
//!
//! ## Drag events
//!
//! - [`DeckController::on_drag_changed`] adopts the item when idle, ignores
//!   other items while dragging, and otherwise records the translation and
//!   reorders live: past threshold the active item goes to the back of the
//!   deck, below threshold it goes (back) to the front.
//! - [`DeckController::on_drag_ended`] applies the same reorder rule to the
//!   final translation, fires at most one swipe callback, and always returns to
//!   Idle.
//! - [`DeckController::on_drag_cancelled`] returns to Idle without a callback
//!   and puts the active item back on top.
//!
//! Mid-gesture readers see the optimistic preview order.
//!
//! ## Shuffles
//!
//! [`DeckController::begin_shuffle`] starts a two-phase sequence
//! (see [`shuffle`](crate::shuffle)); [`DeckController::complete_shuffle`] or
//! [`DeckController::cancel_shuffle`] ends it.

use alloc::boxed::Box;
use alloc::vec::Vec;

use cardstack_deck::{Deck, DeckItem};
use cardstack_layout::{ConfigContext, DeckConfig, PlacedCard, StackState, layout_deck};
use kurbo::Vec2;
use rand::Rng;
use tracing::{debug, trace};

use crate::actions::{Swipe, SwipeActions};
use crate::changes::{Changes, Observers, SubscriptionId};
use crate::classify::{DragThresholds, SwipeDirection, classify};
use crate::shuffle::{ShuffleKind, ShuffleLatch, ShuffleTicket};

/// Owns a deck and turns drag events into reorders and swipe actions.
///
/// ## Usage
///
/// - Construct with [`DeckController::new`] to inherit configuration from a
///   [`ConfigContext`], then optionally give it its own with
///   [`DeckController::set_config`].
/// - Register callbacks with [`DeckController::set_actions`].
/// - Feed drag events; read [`DeckController::layout`] whenever
///   [`DeckController::take_changes`] (or a [subscriber](DeckController::subscribe))
///   reports a change.
///
/// Callbacks and observers run while the controller is mutably borrowed; they
/// cannot call back into it. Use the [`Swipe`] returned by
/// [`on_drag_ended`](DeckController::on_drag_ended) to act on the controller
/// afterwards.
pub struct DeckController<T: DeckItem> {
    deck: Deck<T>,
    ambient: DeckConfig,
    explicit: Option<DeckConfig>,
    config: DeckConfig,
    active: Option<T::Id>,
    drag_offset: Vec2,
    latch: ShuffleLatch,
    actions: SwipeActions<T>,
    pending: Changes,
    unnotified: Changes,
    observers: Observers,
}

impl<T: DeckItem + core::fmt::Debug> core::fmt::Debug for DeckController<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DeckController")
            .field("deck", &self.deck)
            .field("config", &self.config)
            .field("active", &self.active)
            .field("drag_offset", &self.drag_offset)
            .field("latch", &self.latch)
            .field("actions", &self.actions)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl<T: DeckItem> DeckController<T> {
    /// Create a controller that inherits its configuration from `context`.
    pub fn new(deck: Deck<T>, context: &ConfigContext) -> Self {
        let ambient = context.deck_config().clone();
        let config = DeckConfig::resolve(None, &ambient);
        let latch = ShuffleLatch::for_deck(deck.id());
        Self {
            deck,
            ambient,
            explicit: None,
            config,
            active: None,
            drag_offset: Vec2::ZERO,
            latch,
            actions: SwipeActions::new(),
            pending: Changes::empty(),
            unnotified: Changes::empty(),
            observers: Observers::default(),
        }
    }

    /// Create a controller with its own configuration.
    pub fn with_config(deck: Deck<T>, config: DeckConfig) -> Self {
        let mut this = Self::new(deck, &ConfigContext::default());
        this.explicit = Some(config);
        this.config = DeckConfig::resolve(this.explicit.as_ref(), &this.ambient);
        this
    }

    // --- accessors ---

    /// The deck, in its current (possibly preview) order.
    pub fn deck(&self) -> &Deck<T> {
        &self.deck
    }

    /// The effective, sanitized configuration.
    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    /// Identity of the item being dragged, if any.
    pub fn active_item(&self) -> Option<&T::Id> {
        self.active.as_ref()
    }

    /// Translation of the active item; zero when idle.
    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// True while a reshuffle sequence is in flight.
    pub fn is_shuffling(&self) -> bool {
        self.latch.kind() == Some(ShuffleKind::Shuffle)
    }

    /// True while a flip sequence is in flight.
    pub fn is_flipping(&self) -> bool {
        self.latch.kind() == Some(ShuffleKind::Flip)
    }

    /// True while any shuffle sequence holds the latch.
    pub fn is_animating(&self) -> bool {
        self.latch.is_held()
    }

    /// Drag thresholds from the effective configuration.
    pub fn thresholds(&self) -> DragThresholds {
        DragThresholds::from(&self.config)
    }

    // --- configuration ---

    /// Set (or clear, with `None`) this deck's own configuration.
    pub fn set_config(&mut self, config: Option<DeckConfig>) {
        self.explicit = config;
        self.reresolve();
        self.flush();
    }

    /// Replace the ambient configuration this deck inherits from.
    pub fn set_context(&mut self, context: &ConfigContext) {
        self.ambient = context.deck_config().clone();
        self.reresolve();
        self.flush();
    }

    fn reresolve(&mut self) {
        let config = DeckConfig::resolve(self.explicit.as_ref(), &self.ambient);
        if config != self.config {
            self.config = config;
            self.mark(Changes::CONFIG);
        }
    }

    // --- callbacks and observers ---

    /// Replace all swipe callbacks.
    pub fn set_actions(&mut self, actions: SwipeActions<T>) {
        self.actions = actions;
    }

    /// Replace (or clear) the callback for one direction.
    pub fn set_action(&mut self, direction: SwipeDirection, action: Option<Box<dyn FnMut(&T)>>) {
        self.actions.set(direction, action);
    }

    /// Register an observer called once per handled event that changed anything.
    pub fn subscribe(&mut self, observer: impl FnMut(Changes) + 'static) -> SubscriptionId {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Changes accumulated since the last call.
    pub fn take_changes(&mut self) -> Changes {
        core::mem::take(&mut self.pending)
    }

    fn mark(&mut self, changes: Changes) {
        self.pending |= changes;
        self.unnotified |= changes;
    }

    fn flush(&mut self) {
        let changes = core::mem::take(&mut self.unnotified);
        self.observers.notify(changes);
    }

    // --- items ---

    /// Replace the whole backing collection.
    ///
    /// A drag whose item disappears is abandoned.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.deck.replace_items(items);
        self.mark(Changes::ITEMS | Changes::ORDER);
        if let Some(id) = &self.active
            && self.deck.index_of_id(id).is_none()
        {
            debug!(?id, "active item removed; abandoning drag");
            self.reset_drag();
        }
        self.flush();
    }

    // --- drag events ---

    /// Handle a drag translation for `item`.
    pub fn on_drag_changed(&mut self, item: &T, translation: Vec2) {
        let id = item.id();
        match &self.active {
            None => {
                if self.deck.index_of_id(&id).is_none() {
                    trace!(?id, "ignoring drag for item not in deck");
                    return;
                }
                debug!(?id, "drag began");
                self.active = Some(id.clone());
                self.mark(Changes::ACTIVE);
            }
            Some(active) if *active != id => {
                trace!(?id, ?active, "ignoring drag for non-active item");
                return;
            }
            Some(_) => {}
        }
        if self.drag_offset != translation {
            self.drag_offset = translation;
            self.mark(Changes::OFFSET);
        }
        self.preview_order(&id, translation);
        self.flush();
    }

    /// Handle the end of a drag gesture.
    ///
    /// Returns the swipe that fired, if the final translation was past threshold.
    /// The matching callback, when registered, has already run.
    pub fn on_drag_ended(&mut self, translation: Vec2) -> Option<Swipe<T::Id>> {
        let Some(id) = self.active.clone() else {
            trace!("drag ended with no active item");
            return None;
        };
        self.preview_order(&id, translation);
        let swipe = classify(translation, self.thresholds()).map(|direction| Swipe {
            direction,
            item: id.clone(),
        });
        if let Some(s) = &swipe {
            debug!(?id, direction = ?s.direction, "swipe");
            if let Some(item) = self.deck.get_by_id(&id) {
                self.actions.fire(s.direction, item);
            }
        } else {
            debug!(?id, "drag ended below threshold");
        }
        self.reset_drag();
        self.flush();
        swipe
    }

    /// Handle a gesture the host cancelled without an end event.
    ///
    /// No callback fires. The active item is put back on top, undoing any
    /// preview reorder, and the controller returns to Idle.
    pub fn on_drag_cancelled(&mut self) {
        let Some(id) = self.active.clone() else {
            return;
        };
        debug!(?id, "drag cancelled");
        if self.deck.move_id_to_front(&id) {
            self.mark(Changes::ORDER);
        }
        self.reset_drag();
        self.flush();
    }

    fn preview_order(&mut self, id: &T::Id, translation: Vec2) {
        let moved = if classify(translation, self.thresholds()).is_some() {
            self.deck.move_id_to_back(id)
        } else {
            self.deck.move_id_to_front(id)
        };
        if moved {
            trace!(?id, "preview reorder");
            self.mark(Changes::ORDER);
        }
    }

    fn reset_drag(&mut self) {
        if self.active.take().is_some() {
            self.mark(Changes::ACTIVE);
        }
        if self.drag_offset != Vec2::ZERO {
            self.drag_offset = Vec2::ZERO;
            self.mark(Changes::OFFSET);
        }
    }

    // --- shuffles ---

    /// Start a shuffle sequence.
    ///
    /// Returns `None`, changing nothing, while another sequence is in flight or
    /// when the deck has fewer than two items.
    pub fn begin_shuffle(&mut self, kind: ShuffleKind) -> Option<ShuffleTicket> {
        if self.deck.len() < 2 {
            debug!(len = self.deck.len(), "not enough items to shuffle");
            return None;
        }
        let ticket = self.latch.try_acquire(kind)?;
        debug!(?kind, "shuffle began");
        self.mark(Changes::ANIMATION);
        self.flush();
        Some(ticket)
    }

    /// Finish the sequence `ticket` belongs to, drawing randomness from the thread RNG.
    ///
    /// See [`complete_shuffle_with`](Self::complete_shuffle_with).
    #[cfg(feature = "std")]
    pub fn complete_shuffle(&mut self, ticket: ShuffleTicket) -> Result<(), ShuffleTicket> {
        self.complete_shuffle_with(ticket, &mut rand::thread_rng())
    }

    /// Finish the sequence `ticket` belongs to.
    ///
    /// Applies the reorder ([`Flip`](ShuffleKind::Flip) moves the top card to
    /// the back, [`Shuffle`](ShuffleKind::Shuffle) permutes the deck),
    /// returns to Idle, and releases the latch in one step.
    /// A ticket from another controller is handed back in `Err`.
    pub fn complete_shuffle_with<R: Rng + ?Sized>(
        &mut self,
        ticket: ShuffleTicket,
        rng: &mut R,
    ) -> Result<(), ShuffleTicket> {
        let kind = self.latch.release(ticket)?;
        let moved = match kind {
            ShuffleKind::Flip => self.deck.move_first_to_back(),
            ShuffleKind::Shuffle => self.deck.shuffle_with(rng),
        };
        if moved {
            self.mark(Changes::ORDER);
        }
        debug!(?kind, "shuffle completed");
        self.reset_drag();
        self.mark(Changes::ANIMATION);
        self.flush();
        Ok(())
    }

    /// Abandon the sequence `ticket` belongs to, leaving the order untouched.
    ///
    /// The latch is released. A ticket from another controller is handed back in `Err`.
    pub fn cancel_shuffle(&mut self, ticket: ShuffleTicket) -> Result<(), ShuffleTicket> {
        let kind = self.latch.release(ticket)?;
        debug!(?kind, "shuffle cancelled");
        self.reset_drag();
        self.mark(Changes::ANIMATION);
        self.flush();
        Ok(())
    }

    // --- layout ---

    /// Live state for the layout function.
    pub fn stack_state(&self) -> StackState<'_, T::Id> {
        StackState {
            active: self.active.as_ref(),
            drag_offset: self.drag_offset,
            shuffling: self.latch.is_held(),
            animation_offset: if self.latch.is_held() {
                self.config.flip_out_offset
            } else {
                Vec2::ZERO
            },
        }
    }

    /// Visible window under the effective configuration.
    pub fn visible_window(&self) -> Vec<&T> {
        self.deck.visible_window(
            self.config.item_display_count,
            self.config.always_show_last_item,
        )
    }

    /// Visible cards with their computed layout, top first.
    pub fn layout(&self) -> Vec<PlacedCard<'_, T>> {
        layout_deck(&self.deck, &self.stack_state(), &self.config)
    }
}
