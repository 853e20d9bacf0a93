//! Header Component
//!
//! New-task form and the toggle-all button.

use leptos::prelude::*;

use crate::context::use_todos;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_todos();
    let state = ctx.state;
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let tasks = Memo::new(move |_| state.with(|s| s.tasks.clone()));
    let is_loading = Memo::new(move |_| state.with(|s| s.is_loading));
    let all_completed = Memo::new(move |_| {
        state.with(|s| !s.tasks.is_empty() && s.active_count() == 0)
    });

    // Refocus whenever the field is enabled again or the list changes
    Effect::new(move |_| {
        tasks.track();
        if !is_loading.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = state.with_untracked(|s| s.new_title.clone());
        let owner_id = ctx.owner_id;
        ctx.spawn(move |todos| async move {
            let _ = todos.add_task(&title, owner_id).await;
        });
    };

    view! {
        <header class="todoapp__header">
            <Show when=move || !tasks.with(Vec::is_empty)>
                <button
                    type="button"
                    class=move || if all_completed.get() { "todoapp__toggle-all active" } else { "todoapp__toggle-all" }
                    on:click=move |_| {
                        ctx.spawn(|todos| async move {
                            let _ = todos.toggle_all().await;
                        });
                    }
                ></button>
            </Show>

            <form on:submit=on_submit>
                <input
                    type="text"
                    class="todoapp__new-todo"
                    placeholder="What needs to be done?"
                    node_ref=input_ref
                    prop:value=move || state.with(|s| s.new_title.clone())
                    disabled=move || is_loading.get()
                    on:input=move |ev| ctx.controller().set_new_title(event_target_value(&ev))
                />
            </form>
        </header>
    }
}
