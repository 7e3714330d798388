//! To-do Fetch App
//!
//! Root component: builds the API client, provides the controller, runs the
//! one-time bootstrap, and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RemoteTodoApi;
use crate::components::{DeleteAllButton, NewTaskForm, TaskList};
use crate::config::ApiConfig;
use crate::controller::TaskController;

#[component]
pub fn App() -> impl IntoView {
    let controller = TaskController::new(Rc::new(RemoteTodoApi::new(ApiConfig::default())));

    // Provide the controller to all children
    provide_context(controller);

    // Bootstrap once on mount: ensure the owner exists, then load its list
    Effect::new(move |_| {
        spawn_local(async move {
            controller.bootstrap().await;
        });
    });

    view! {
        <div class="container">
            <h1>"My Todo List"</h1>

            <NewTaskForm />

            <DeleteAllButton />

            <TaskList />
        </div>
    }
}
