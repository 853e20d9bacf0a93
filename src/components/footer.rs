//! Footer Component
//!
//! Remaining count, filter links and "Clear completed".

use leptos::prelude::*;

use crate::context::use_todos;
use crate::models::Filter;

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_todos();
    let state = ctx.state;

    let active = Memo::new(move |_| state.with(|s| s.active_count()));
    let completed = Memo::new(move |_| state.with(|s| s.completed_count()));
    let filter = Memo::new(move |_| state.with(|s| s.filter));

    view! {
        <footer class="todoapp__footer">
            <span class="todo-count">{move || format!("{} items left", active.get())}</span>

            <nav class="filter">
                {Filter::ALL.into_iter().map(move |f| view! {
                    <a
                        href=f.href()
                        class=move || if filter.get() == f { "filter__link selected" } else { "filter__link" }
                        on:click=move |_| ctx.controller().set_filter(f)
                    >
                        {f.label()}
                    </a>
                }).collect_view()}
            </nav>

            <button
                type="button"
                class="todoapp__clear-completed"
                disabled=move || completed.get() == 0
                on:click=move |_| {
                    ctx.spawn(|todos| async move {
                        let _ = todos.clear_completed().await;
                    });
                }
            >
                "Clear completed"
            </button>
        </footer>
    }
}
