use crate::{ProjectId, Service, Task, TaskStatus};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEFAULT_PROJECT_STATUS: &str = "active";

/// Project as returned by the backend after creation.
///
/// Fields the client does not model are kept in `extra` and written back
/// out on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default = "default_project_status")]
    pub status: String,
    #[serde(default)]
    pub app: Vec<Service>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    /// Tasks not yet marked done, in backend order
    pub fn open_tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.status != TaskStatus::Done)
    }
}

fn default_project_status() -> String {
    DEFAULT_PROJECT_STATUS.to_string()
}
