// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe action callbacks.

use alloc::boxed::Box;

use crate::classify::SwipeDirection;

type Action<T> = Box<dyn FnMut(&T)>;

/// A swipe resolved on release: the direction and the identity of the swiped item.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Swipe<Id> {
    /// Direction of the swipe.
    pub direction: SwipeDirection,
    /// Identity of the released item.
    pub item: Id,
}

/// Up to four optional callbacks, one per [`SwipeDirection`].
///
/// ```
/// use cardstack_interaction::{SwipeActions, SwipeDirection};
///
/// let actions: SwipeActions<char> = SwipeActions::new()
///     .on_swipe_left(|card| println!("discarded {card}"))
///     .on_swipe_right(|card| println!("kept {card}"));
/// assert!(actions.is_registered(SwipeDirection::Left));
/// assert!(!actions.is_registered(SwipeDirection::Up));
/// ```
pub struct SwipeActions<T> {
    left: Option<Action<T>>,
    right: Option<Action<T>>,
    up: Option<Action<T>>,
    down: Option<Action<T>>,
}

impl<T> Default for SwipeActions<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for SwipeActions<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwipeActions")
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("up", &self.up.is_some())
            .field("down", &self.down.is_some())
            .finish()
    }
}

impl<T> SwipeActions<T> {
    /// No callbacks registered.
    pub const fn new() -> Self {
        Self {
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    /// Register the swipe-left callback.
    #[must_use]
    pub fn on_swipe_left(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.left = Some(Box::new(f));
        self
    }

    /// Register the swipe-right callback.
    #[must_use]
    pub fn on_swipe_right(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.right = Some(Box::new(f));
        self
    }

    /// Register the swipe-up callback.
    #[must_use]
    pub fn on_swipe_up(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.up = Some(Box::new(f));
        self
    }

    /// Register the swipe-down callback.
    #[must_use]
    pub fn on_swipe_down(mut self, f: impl FnMut(&T) + 'static) -> Self {
        self.down = Some(Box::new(f));
        self
    }

    /// Replace (or clear, with `None`) the callback for `direction`.
    pub fn set(&mut self, direction: SwipeDirection, action: Option<Box<dyn FnMut(&T)>>) {
        *self.slot(direction) = action;
    }

    /// True if a callback is registered for `direction`.
    pub fn is_registered(&self, direction: SwipeDirection) -> bool {
        match direction {
            SwipeDirection::Left => self.left.is_some(),
            SwipeDirection::Right => self.right.is_some(),
            SwipeDirection::Up => self.up.is_some(),
            SwipeDirection::Down => self.down.is_some(),
        }
    }

    fn slot(&mut self, direction: SwipeDirection) -> &mut Option<Action<T>> {
        match direction {
            SwipeDirection::Left => &mut self.left,
            SwipeDirection::Right => &mut self.right,
            SwipeDirection::Up => &mut self.up,
            SwipeDirection::Down => &mut self.down,
        }
    }

    /// Invoke the callback for `direction`, if any. Returns whether one ran.
    pub(crate) fn fire(&mut self, direction: SwipeDirection, item: &T) -> bool {
        match self.slot(direction) {
            Some(action) => {
                action(item);
                true
            }
            None => false,
        }
    }
}
