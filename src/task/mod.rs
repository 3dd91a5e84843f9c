//! Task records exchanged with the task service.
//!
//! Tasks are transient: built locally for submission or decoded from a
//! response for display. Nothing here is cached.

pub mod id;

pub use id::{fnv1a_32, HashedIds, IdStrategy, ServerAssigned};

use serde::{Deserialize, Serialize};

/// A unit of work tracked by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned, or FNV-1a of the name when the client assigns ids.
    pub id: String,
    /// Text label.
    pub name: String,
    /// Whether the task is done.
    #[serde(default)]
    pub complete: bool,
}

impl Task {
    /// Create a new, incomplete task with its id assigned by `ids`.
    pub fn new(name: impl Into<String>, ids: &dyn IdStrategy) -> Self {
        let name = name.into();
        Self {
            id: ids.assign(&name),
            name,
            complete: false,
        }
    }

    /// Status label shown in listings.
    pub fn status_label(&self) -> &'static str {
        if self.complete {
            "DONE"
        } else {
            "TODO"
        }
    }
}

/// Partial update sent when completing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub complete: bool,
}

impl TaskPatch {
    /// Patch that marks a task as done.
    pub fn completed() -> Self {
        Self { complete: true }
    }
}

/// Response of the system endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
}
