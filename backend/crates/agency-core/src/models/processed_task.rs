use crate::Task;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A task the backend assigned to an agent and ran
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedTask {
    pub task: Task,
    /// Name of the agent that handled the task
    pub agent: String,
    /// Agent-specific output, passed through untouched
    #[serde(default)]
    pub result: Value,
}
