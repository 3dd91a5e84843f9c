//! HTTP client for the task service.
//!
//! Every operation is a single blocking round trip against the base URL
//! from the config plus one of the fixed paths below.

pub mod http;

pub use http::{Echo, TaskClient};

/// `GET` the full task list.
pub const TASKS_PATH: &str = "/api/tasks/";
/// `POST` a new task.
pub const CREATE_PATH: &str = "/api/create";
/// `PATCH` a task by id (id appended).
pub const UPDATE_PATH: &str = "/api/update/";
/// `DELETE` a task by id (id appended).
pub const DELETE_PATH: &str = "/api/delete/";
/// `GET` server information.
pub const SYSTEM_PATH: &str = "/api/system";
