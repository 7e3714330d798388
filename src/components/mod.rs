//! UI Components
//!
//! Reusable Leptos components.

mod delete_all_button;
mod new_task_form;
mod task_list;

pub use delete_all_button::DeleteAllButton;
pub use new_task_form::NewTaskForm;
pub use task_list::TaskList;
