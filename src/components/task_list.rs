//! Task List Component
//!
//! Renders the committed list in order; each row's delete trigger passes the
//! row's current position, since the store knows tasks by position only.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::controller::use_controller;

/// Ordered task list with per-row delete
#[component]
pub fn TaskList() -> impl IntoView {
    let controller = use_controller();
    let tasks = controller.tasks();

    view! {
        <ul class="task-list">
            <For
                each={move || tasks.get().into_iter().enumerate().collect::<Vec<_>>()}
                key={|(index, task)| (*index, task.label.clone())}
                children={move |(index, task)| {
                    let on_delete = move |_| {
                        spawn_local(async move {
                            controller.remove_task(index).await;
                        });
                    };

                    view! {
                        <li class="task-row">
                            <span class="task-label">{task.label.clone()}</span>
                            <button class="delete-btn" on:click=on_delete>"×"</button>
                        </li>
                    }
                }}
            />
        </ul>

        {move || tasks.get().is_empty().then(|| view! {
            <p class="empty-hint">"No tasks yet."</p>
        })}

        <p class="task-count">{move || format!("{} tasks", tasks.get().len())}</p>
    }
}
