//! Remote API Bindings
//!
//! Frontend bindings to the hosted to-do store, one wrapper per endpoint.
//! The store keys everything on the owner name; it has no partial-delete
//! primitive, so removal goes through [`TodoApi::replace_todos`].

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::models::{Task, TodoPage};

/// The remote task store, seen from the controller.
///
/// Every failure collapses into one transport-error string: connectivity
/// problems, non-2xx statuses, and undecodable bodies alike.
#[async_trait(?Send)]
pub trait TodoApi {
    /// Create the owner record with an empty list. The service answers
    /// non-2xx when the owner already exists, so any response with a JSON
    /// body counts as success; the body is returned for logging only.
    async fn ensure_owner(&self) -> Result<serde_json::Value, String>;

    /// Fetch the owner's current task list.
    async fn fetch_todos(&self) -> Result<Vec<Task>, String>;

    /// Append one task to the owner's list.
    async fn append_todo(&self, task: &Task) -> Result<(), String>;

    /// Replace the owner's entire list.
    async fn replace_todos(&self, tasks: &[Task]) -> Result<(), String>;
}

/// HTTP client for the hosted playground API.
pub struct RemoteTodoApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl RemoteTodoApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn user_url(&self) -> String {
        format!("{}/todo/users/{}", self.config.base_url, self.config.owner)
    }

    fn todos_url(&self) -> String {
        format!("{}/todo/todos/{}", self.config.base_url, self.config.owner)
    }
}

#[async_trait(?Send)]
impl TodoApi for RemoteTodoApi {
    async fn ensure_owner(&self) -> Result<serde_json::Value, String> {
        let response = self
            .client
            .post(self.user_url())
            .json(&Vec::<Task>::new())
            .send()
            .await
            .map_err(|e| e.to_string())?;

        // No error_for_status here: "already exists" arrives as a non-2xx
        // with a message body and must not be treated as failure.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|e| e.to_string())
    }

    async fn fetch_todos(&self) -> Result<Vec<Task>, String> {
        let page = self
            .client
            .get(self.user_url())
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?
            .json::<TodoPage>()
            .await
            .map_err(|e| e.to_string())?;

        Ok(page.todos)
    }

    async fn append_todo(&self, task: &Task) -> Result<(), String> {
        self.client
            .post(self.todos_url())
            .json(task)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn replace_todos(&self, tasks: &[Task]) -> Result<(), String> {
        self.client
            .put(self.user_url())
            .json(&tasks)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
