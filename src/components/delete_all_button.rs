//! Delete All Button Component
//!
//! Inline two-step confirmation before wiping the whole list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;

/// "Delete all" trigger with confirm/cancel
#[component]
pub fn DeleteAllButton() -> impl IntoView {
    let controller = use_controller();
    let (confirming, set_confirming) = signal(false);

    let on_confirm = move |_| {
        set_confirming.set(false);
        spawn_local(async move {
            controller.clear_tasks().await;
        });
    };

    view! {
        <Show when=move || !confirming.get()>
            <button
                class="delete-all-btn"
                on:click=move |_| set_confirming.set(true)
            >
                "Delete all"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete all tasks?"</span>
                <button
                    class="confirm-btn"
                    on:click=on_confirm
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |_| set_confirming.set(false)
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
