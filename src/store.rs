//! Global Application State Store
//!
//! The reactive cell holding `TodoState`. Components read it through
//! `Memo`s; only the controller writes to it.

use leptos::prelude::*;

use crate::state::{StateCell, TodoState};

/// Type alias for the store
pub type TodoStore = RwSignal<TodoState>;

pub fn create_store() -> TodoStore {
    RwSignal::new(TodoState::new())
}

impl StateCell for RwSignal<TodoState> {
    fn mutate<R>(&self, f: impl FnOnce(&mut TodoState) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn inspect<R>(&self, f: impl FnOnce(&TodoState) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}
