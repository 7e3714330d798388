//! API Configuration
//!
//! Identifies which remote task list the whole session operates on.

/// Remote store configuration, threaded into the API client constructor.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the hosted to-do service, without a trailing slash.
    pub base_url: String,
    /// Fixed identifier the remote store groups this session's tasks under.
    pub owner: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://playground.4geeks.com".to_string(),
            owner: "todo-fetch-demo".to_string(),
        }
    }
}
