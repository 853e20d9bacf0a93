//! Task List Component
//!
//! Visible tasks for the current filter, followed by the placeholder of a
//! pending create.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::use_todos;

#[component]
pub fn TaskList() -> impl IntoView {
    let state = use_todos().state;

    let visible = Memo::new(move |_| state.with(|s| s.visible()));
    let placeholder = Memo::new(move |_| state.with(|s| s.placeholder.clone()));

    view! {
        <section class="todoapp__main">
            <For
                each=move || visible.get()
                // Completion is read reactively inside the row; a rename rebuilds it
                key=|task| (task.id, task.title.clone())
                children=move |task| view! { <TaskItem task=task /> }
            />

            {move || placeholder.get().map(|task| view! { <TaskItem task=task /> })}
        </section>
    }
}
