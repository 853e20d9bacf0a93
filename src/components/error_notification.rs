//! Error Notification Component

use leptos::prelude::*;

use crate::context::use_todos;

/// The single transient error message, with a close button
#[component]
pub fn ErrorNotification() -> impl IntoView {
    let ctx = use_todos();
    let state = ctx.state;
    let message = Memo::new(move |_| state.with(|s| s.error.message().map(str::to_string)));

    view! {
        <div class=move || {
            if message.with(Option::is_some) {
                "notification is-danger is-light has-text-weight-normal"
            } else {
                "notification is-danger is-light has-text-weight-normal hidden"
            }
        }>
            <button
                type="button"
                class="delete"
                on:click=move |_| ctx.controller().dismiss_error()
            ></button>
            {move || message.get().unwrap_or_default()}
        </div>
    }
}
