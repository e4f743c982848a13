//! Controller State Cells
//!
//! Async workflows read and mutate controller state between awaits through
//! [`StateCell`], so the same code drives a Leptos signal in the browser and a
//! plain `RefCell` in tests.

use std::cell::RefCell;

use leptos::prelude::*;

pub trait StateCell<T> {
    /// Mutate the state. `None` when the owner is gone (component unmounted).
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read the state without subscribing to it.
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: 'static> StateCell<T> for RwSignal<T, LocalStorage> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn modify<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}
