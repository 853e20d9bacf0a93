//! Todos Frontend App
//!
//! Root component: builds the controller, loads the list on mount and
//! clears error notifications after the configured delay.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::commands::RestTaskStore;
use crate::components::{ErrorNotification, Footer, Header, TaskList};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::store::create_store;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let state = create_store();
    let controller = TodoController::new(RestTaskStore::new(&config), state);
    let ctx = AppContext::new(state, controller, config.owner_id);

    // Provide context to all children
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| {
        ctx.spawn(|todos| async move {
            let _ = todos.load().await;
        });
    });

    // Each new error gets its own timer; an older timer finds a newer
    // generation and leaves the message alone
    let error_generation = Memo::new(move |_| {
        state.with(|s| s.error.message().map(|_| s.error.generation()))
    });
    let timeout_ms = config.error_timeout_ms;
    Effect::new(move |_| {
        if let Some(generation) = error_generation.get() {
            Timeout::new(timeout_ms, move || ctx.controller().expire_error(generation)).forget();
        }
    });

    let has_tasks = Memo::new(move |_| state.with(|s| !s.tasks.is_empty()));

    view! {
        <div class="todoapp">
            <h1 class="todoapp__title">"todos"</h1>

            <div class="todoapp__content">
                <Header />

                <TaskList />

                <Show when=move || has_tasks.get()>
                    <Footer />
                </Show>
            </div>

            <ErrorNotification />
        </div>
    }
}
