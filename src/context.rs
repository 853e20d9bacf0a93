//! Application Context
//!
//! Shared state provided via Leptos Context API.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::RestTaskStore;
use crate::controller::TodoController;
use crate::store::TodoStore;

/// Controller type used by the running app
pub type AppController = TodoController<RestTaskStore, TodoStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Reactive state - read
    pub state: TodoStore,
    /// Owner new tasks are created for
    pub owner_id: u32,
    controller: StoredValue<AppController, LocalStorage>,
}

impl AppContext {
    pub fn new(state: TodoStore, controller: AppController, owner_id: u32) -> Self {
        Self {
            state,
            owner_id,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    /// Run an async controller operation without waiting for it
    pub fn spawn<F, Fut>(&self, op: F)
    where
        F: FnOnce(AppController) -> Fut,
        Fut: Future<Output = ()> + 'static,
    {
        spawn_local(op(self.controller()));
    }
}

/// Get the app context
pub fn use_todos() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
