//! Task Synchronization Controller
//!
//! Owns the draft input and the committed task list, and mediates every
//! read/write against the remote store. Local state changes only after the
//! store acknowledges a write; a failed call is logged and swallowed, leaving
//! the UI on the last acknowledged state.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::TodoApi;
use crate::models::Task;

/// Shared controller, provided via context to all components.
///
/// The API client lives in local storage so the handle stays `Copy` and can
/// move freely into event handlers and child views.
#[derive(Clone, Copy)]
pub struct TaskController {
    api: StoredValue<Rc<dyn TodoApi>, LocalStorage>,
    tasks: RwSignal<Vec<Task>>,
    draft: RwSignal<String>,
}

/// Get the controller from context
pub fn use_controller() -> TaskController {
    expect_context::<TaskController>()
}

impl TaskController {
    pub fn new(api: Rc<dyn TodoApi>) -> Self {
        Self {
            api: StoredValue::new_local(api),
            tasks: RwSignal::new(Vec::new()),
            draft: RwSignal::new(String::new()),
        }
    }

    /// Committed task list signal, for rendering.
    pub fn tasks(&self) -> RwSignal<Vec<Task>> {
        self.tasks
    }

    /// Draft input signal, for binding the text field.
    pub fn draft(&self) -> RwSignal<String> {
        self.draft
    }

    fn api(&self) -> Rc<dyn TodoApi> {
        self.api.get_value()
    }

    /// Ensure the owner record exists, then load its list.
    ///
    /// The fetch runs even when ensure-owner fails: the record may well exist
    /// already, and a stale or empty list is the agreed degraded state.
    pub async fn bootstrap(&self) {
        match self.api().ensure_owner().await {
            Ok(body) => log(format!("[BOOT] owner ready: {body}")),
            Err(err) => log_error(format!("[BOOT] ensure-owner failed: {err}")),
        }

        match self.api().fetch_todos().await {
            Ok(todos) => self.tasks.set(todos),
            Err(err) => log_error(format!("[BOOT] fetch failed: {err}")),
        }
    }

    /// Send the current draft as a new task; append locally and clear the
    /// draft only after the store acknowledges. Whitespace-only drafts are a
    /// no-op with no network call. On failure the draft stays put so the user
    /// can retry.
    pub async fn add_task(&self) {
        let draft = self.draft.get_untracked();
        if draft.trim().is_empty() {
            return;
        }

        let task = Task::new(draft);
        match self.api().append_todo(&task).await {
            Ok(()) => {
                self.tasks.update(|tasks| tasks.push(task));
                self.draft.set(String::new());
            }
            Err(err) => log_error(format!("[SYNC] append failed: {err}")),
        }
    }

    /// Remove the task at `index`.
    ///
    /// The store has no delete-by-position primitive, so this sends the whole
    /// remaining list as a replacement and adopts it locally on ack. An
    /// out-of-range index is a no-op.
    pub async fn remove_task(&self, index: usize) {
        let Some(candidate) = without_index(&self.tasks.get_untracked(), index) else {
            log_error(format!("[SYNC] delete ignored, index {index} out of range"));
            return;
        };

        match self.api().replace_todos(&candidate).await {
            Ok(()) => self.tasks.set(candidate),
            Err(err) => log_error(format!("[SYNC] replace failed: {err}")),
        }
    }

    /// Replace the remote list with an empty one and clear locally on ack.
    pub async fn clear_tasks(&self) {
        match self.api().replace_todos(&[]).await {
            Ok(()) => self.tasks.set(Vec::new()),
            Err(err) => log_error(format!("[SYNC] clear failed: {err}")),
        }
    }
}

/// Candidate list with the element at `index` removed, order preserved.
/// `None` when the index is out of range.
fn without_index(tasks: &[Task], index: usize) -> Option<Vec<Task>> {
    if index >= tasks.len() {
        return None;
    }
    let mut next = tasks.to_vec();
    next.remove(index);
    Some(next)
}

#[cfg(target_arch = "wasm32")]
fn log(msg: String) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log(msg: String) {
    println!("{msg}");
}

#[cfg(target_arch = "wasm32")]
fn log_error(msg: String) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
fn log_error(msg: String) {
    eprintln!("{msg}");
}
