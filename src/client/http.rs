//! Blocking task client.

use anyhow::Context;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::task::{HashedIds, IdStrategy, SystemInfo, Task, TaskPatch};

use super::{CREATE_PATH, DELETE_PATH, SYSTEM_PATH, TASKS_PATH, UPDATE_PATH};

/// Talks to the task service described by a [`TodoConfig`].
pub struct TaskClient {
    client: Client,
    base_url: String,
    timeout: Duration,
    ids: Box<dyn IdStrategy>,
}

/// Status and body of a response that is echoed back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Echo {
    /// HTTP status code.
    pub status: u16,
    /// Response body, verbatim.
    pub body: String,
}

impl Echo {
    /// Whether the status was 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl TaskClient {
    /// Create a client for the configured service, with client-side
    /// hashed ids.
    pub fn new(config: &TodoConfig) -> Result<Self> {
        Self::with_ids(config, Box::new(HashedIds))
    }

    /// Create a client that assigns ids with `ids`.
    pub fn with_ids(config: &TodoConfig, ids: Box<dyn IdStrategy>) -> Result<Self> {
        let timeout = config.timeout_duration();
        let client = Client::builder()
            .user_agent(concat!("todo/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            timeout,
            ids,
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch every task. There is no pagination.
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        self.get_json(&self.endpoint(TASKS_PATH))
    }

    /// Submit a new, incomplete task named `name` and return what was sent.
    ///
    /// `name` is hashed and sent as given; callers strip whitespace first.
    ///
    /// # Errors
    ///
    /// Returns `SubmissionRejected` unless the server answers 201 Created.
    pub fn add_task(&self, name: &str) -> Result<Task> {
        let task = Task::new(name, self.ids.as_ref());
        let url = self.endpoint(CREATE_PATH);

        tracing::debug!("POST {} id={} name={}", url, task.id, task.name);
        let response = self.send(self.client.post(&url).json(&task), &url)?;
        let status = response.status();
        tracing::debug!("POST {} -> {}", url, status);

        if status != StatusCode::CREATED {
            let body = response.text().unwrap_or_default();
            return Err(TodoError::SubmissionRejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(task)
    }

    /// Mark task `id` as done. The server's reply is returned verbatim,
    /// whatever its status.
    pub fn complete_task(&self, id: &str) -> Result<Echo> {
        let url = self.task_url(UPDATE_PATH, id)?;
        tracing::debug!("PATCH {}", url);
        let request = self.client.patch(url.clone()).json(&TaskPatch::completed());
        self.echo(request, url.as_str())
    }

    /// Delete task `id`. The server's reply is returned verbatim, whatever
    /// its status.
    pub fn delete_task(&self, id: &str) -> Result<Echo> {
        let url = self.task_url(DELETE_PATH, id)?;
        tracing::debug!("DELETE {}", url);
        self.echo(self.client.delete(url.clone()), url.as_str())
    }

    /// URL for a single task: `prefix` followed by `id` as one path segment.
    ///
    /// `/`, `?`, `#` and `%` in the id are percent-encoded, so an id can
    /// never reach another endpoint. `.` and `..` are refused outright.
    pub fn task_url(&self, prefix: &str, id: &str) -> Result<Url> {
        if id == "." || id == ".." {
            return Err(TodoError::Usage {
                message: format!("'{}' is not a task id", id),
            });
        }

        let endpoint = self.endpoint(prefix);
        let mut url = Url::parse(&endpoint).map_err(|e| TodoError::Network {
            url: endpoint.clone(),
            message: e.to_string(),
        })?;
        url.path_segments_mut()
            .map_err(|()| TodoError::Network {
                url: endpoint.clone(),
                message: "base URL cannot take a path".to_string(),
            })?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    /// Ask the server for its hostname.
    pub fn system_info(&self) -> Result<SystemInfo> {
        self.get_json(&self.endpoint(SYSTEM_PATH))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        request.send().map_err(|e| TodoError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn read_body(response: Response, url: &str) -> Result<String> {
        response.text().map_err(|e| TodoError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("GET {}", url);
        let response = self.send(self.client.get(url), url)?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(TodoError::Network {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = Self::read_body(response, url)?;
        serde_json::from_str(&body).map_err(|e| TodoError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn echo(&self, request: RequestBuilder, url: &str) -> Result<Echo> {
        let response = self.send(request, url)?;
        let status = response.status().as_u16();
        tracing::debug!("{} -> {}", url, status);
        let body = Self::read_body(response, url)?;
        Ok(Echo { status, body })
    }
}
