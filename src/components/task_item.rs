//! Task Item Component
//!
//! One row: status checkbox, title (double-click to edit), delete button
//! and the loading overlay.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::models::Task;

#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_todos();
    let state = ctx.state;

    let id = task.id;
    let completed = task.completed;
    let is_placeholder = task.is_placeholder();
    let title = task.title;

    let (draft, set_draft) = signal(title.clone());
    let edit_ref = NodeRef::<leptos::html::Input>::new();

    let is_editing = Memo::new(move |_| state.with(|s| s.is_editing(id)));
    let shows_loader = Memo::new(move |_| state.with(|s| s.shows_loader(id)));
    // The row outlives toggles, so its status follows the collection
    let is_completed = Memo::new(move |_| state.with(|s| s.is_completed(id).unwrap_or(completed)));

    Effect::new(move |_| {
        if is_editing.get() {
            if let Some(input) = edit_ref.get() {
                let _ = input.focus();
            }
        }
    });

    // Submit (Enter) and blur both land here; a blur after the edit already
    // closed or while its request is outstanding is ignored
    let commit = move || {
        let closed = state.with_untracked(|s| !s.is_editing(id) || s.is_in_flight(id));
        if closed {
            return;
        }
        let new_title = draft.get_untracked();
        ctx.spawn(move |todos| async move {
            let _ = todos.edit_task(id, &new_title).await;
        });
    };

    let title_view = move || {
        if is_editing.get() {
            let original = title.clone();
            view! {
                <form on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    commit();
                }>
                    <input
                        type="text"
                        class="todo__title-field"
                        placeholder="Empty todo will be deleted"
                        node_ref=edit_ref
                        prop:value=move || draft.get()
                        on:input=move |ev| set_draft.set(event_target_value(&ev))
                        on:keyup=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                set_draft.set(original.clone());
                                ctx.controller().stop_editing(id);
                            }
                        }
                        on:blur=move |_| commit()
                    />
                </form>
            }
            .into_any()
        } else {
            view! {
                <span
                    class="todo__title"
                    on:dblclick=move |_| ctx.controller().start_editing(id)
                >
                    {title.clone()}
                </span>

                <button
                    type="button"
                    class="todo__remove"
                    disabled=is_placeholder
                    on:click=move |_| {
                        ctx.spawn(move |todos| async move {
                            let _ = todos.delete_task(id).await;
                        });
                    }
                >
                    "×"
                </button>
            }
            .into_any()
        }
    };

    view! {
        <div class=move || if is_completed.get() { "todo completed" } else { "todo" }>
            <label class="todo__status-label">
                <input
                    type="checkbox"
                    class="todo__status"
                    prop:checked=move || is_completed.get()
                    disabled=move || is_placeholder || shows_loader.get()
                    on:click=move |ev: web_sys::MouseEvent| {
                        // Leave the box as is until the update settles
                        ev.prevent_default();
                        ctx.spawn(move |todos| async move {
                            let _ = todos.toggle_task(id).await;
                        });
                    }
                />
            </label>

            {title_view}

            <div class=move || if shows_loader.get() { "modal overlay is-active" } else { "modal overlay" }>
                <div class="modal-background has-background-white-ter"></div>
                <div class="loader"></div>
            </div>
        </div>
    }
}
