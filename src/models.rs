//! Frontend Models
//!
//! Data structures matching the hosted to-do API contract.

use serde::{Deserialize, Serialize};

/// A single to-do entry as the remote store represents it.
///
/// The API assigns no client-visible identifier; within the local list a
/// task's identity is its position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub label: String,
    pub done: bool,
}

impl Task {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            done: false,
        }
    }
}

/// Response body of `GET /todo/users/{owner}`.
///
/// The API returns more fields than `todos`; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoPage {
    #[serde(default)]
    pub todos: Vec<Task>,
}
