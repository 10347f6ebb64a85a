//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each concern lives in one `RwSignal<…State>` provided at the app root and
//! read with `expect_context`. State structs expose named operations; views
//! and async flows never poke fields they do not own.
//!
//! DESIGN
//! ======
//! Async flows in `net::pipeline` take a [`StateCell`] instead of a concrete
//! signal, so the same flow drives a `RwSignal` in the browser and a plain
//! `Rc<RefCell<_>>` under native tests.

pub mod auth;
pub mod databases;
pub mod form;
pub mod history;
pub mod thread;
pub mod ui;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

/// Shared, interior-mutable state handle.
///
/// Both operations return `None` when the underlying cell is gone (a
/// disposed signal) or already borrowed.
pub trait StateCell<T> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn inspect<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        match self.try_borrow() {
            Ok(guard) => Some(f(&guard)),
            Err(_) => None,
        }
    }

    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        match self.try_borrow_mut() {
            Ok(mut guard) => Some(f(&mut guard)),
            Err(_) => None,
        }
    }
}
