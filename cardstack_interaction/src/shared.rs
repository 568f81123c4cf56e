// Copyright 2025 the Cardstack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared-ownership handle to a controller.
//!
//! The gesture layer and the renderer usually both need the controller.
//! [`SharedController`] is a cheap-to-clone `Rc<RefCell<_>>` handle for that.
//! It is single-threaded, like the event loop that drives it.
//!
//! Access goes through [`SharedController::read`] and [`SharedController::update`].
//! A call made while the controller is already mutably borrowed (for example
//! from inside a swipe callback or change observer) does nothing and returns
//! `None`.

use alloc::rc::{Rc, Weak};
use core::cell::RefCell;

use cardstack_deck::DeckItem;
use tracing::warn;

use crate::controller::DeckController;

/// Reference-counted handle to a [`DeckController`].
pub struct SharedController<T: DeckItem> {
    inner: Rc<RefCell<DeckController<T>>>,
}

impl<T: DeckItem> Clone for SharedController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: DeckItem> core::fmt::Debug for SharedController<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedController")
            .field("handles", &Rc::strong_count(&self.inner))
            .finish_non_exhaustive()
    }
}

impl<T: DeckItem> From<DeckController<T>> for SharedController<T> {
    fn from(controller: DeckController<T>) -> Self {
        Self::new(controller)
    }
}

impl<T: DeckItem> SharedController<T> {
    /// Wrap `controller` in a shared handle.
    pub fn new(controller: DeckController<T>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(controller)),
        }
    }

    /// Run `f` with shared access. `None` if the controller is mutably borrowed.
    pub fn read<R>(&self, f: impl FnOnce(&DeckController<T>) -> R) -> Option<R> {
        match self.inner.try_borrow() {
            Ok(controller) => Some(f(&controller)),
            Err(_) => {
                warn!("controller read while it is being updated");
                None
            }
        }
    }

    /// Run `f` with exclusive access. `None` if the controller is borrowed.
    pub fn update<R>(&self, f: impl FnOnce(&mut DeckController<T>) -> R) -> Option<R> {
        match self.inner.try_borrow_mut() {
            Ok(mut controller) => Some(f(&mut controller)),
            Err(_) => {
                warn!("re-entrant controller update ignored");
                None
            }
        }
    }

    /// A non-owning handle, for observers that must not keep the controller alive.
    pub fn downgrade(&self) -> WeakController<T> {
        WeakController {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// True if both handles point at the same controller.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Non-owning counterpart of [`SharedController`].
pub struct WeakController<T: DeckItem> {
    inner: Weak<RefCell<DeckController<T>>>,
}

impl<T: DeckItem> Clone for WeakController<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T: DeckItem> core::fmt::Debug for WeakController<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WeakController")
            .field("alive", &(self.inner.strong_count() > 0))
            .finish_non_exhaustive()
    }
}

impl<T: DeckItem> WeakController<T> {
    /// The shared handle, if the controller is still alive.
    pub fn upgrade(&self) -> Option<SharedController<T>> {
        self.inner.upgrade().map(|inner| SharedController { inner })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use cardstack_deck::Deck;
    use cardstack_layout::ConfigContext;
    use kurbo::Vec2;

    fn shared() -> SharedController<char> {
        SharedController::new(DeckController::new(
            Deck::new("letters", vec!['A', 'B', 'C']),
            &ConfigContext::default(),
        ))
    }

    #[test]
    fn clones_see_the_same_controller() {
        let gestures = shared();
        let renderer = gestures.clone();
        assert!(gestures.ptr_eq(&renderer));
        gestures.update(|c| c.on_drag_changed(&'A', Vec2::new(500.0, 0.0)));
        let order = renderer.read(|c| c.deck().items().to_vec()).unwrap();
        assert_eq!(order, vec!['B', 'C', 'A']);
    }

    #[test]
    fn reentrant_update_from_observer_is_refused() {
        let handle = shared();
        let weak = handle.downgrade();
        let refused = alloc::rc::Rc::new(core::cell::Cell::new(false));
        let flag = alloc::rc::Rc::clone(&refused);
        handle.update(|c| {
            c.subscribe(move |_| {
                if let Some(h) = weak.upgrade() {
                    flag.set(h.update(|_| ()).is_none());
                }
            })
        });
        handle.update(|c| c.on_drag_changed(&'A', Vec2::new(10.0, 0.0)));
        assert!(refused.get(), "nested update must be refused");
    }

    #[test]
    fn weak_handle_expires_with_last_strong_handle() {
        let handle = shared();
        let weak = handle.downgrade();
        assert!(weak.upgrade().is_some());
        drop(handle);
        assert!(weak.upgrade().is_none());
    }
}
