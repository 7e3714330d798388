//! New Task Form Component
//!
//! Input bound to the draft, with a submit trigger that sends the task.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;

/// Form for adding a new task
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let controller = use_controller();
    let draft = controller.draft();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.add_task().await;
        });
    };

    view! {
        <form class="new-task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Write a task..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
