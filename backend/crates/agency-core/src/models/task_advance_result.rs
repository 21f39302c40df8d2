use crate::ProcessedTask;

use serde::{Deserialize, Serialize};

/// Outcome of `POST /projects/{id}/next-task`.
///
/// The backend either runs the next task and reports it, or answers
/// `{"status": "no_tasks_available"}`. Any other shape fails to deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TaskAdvanceWire", into = "TaskAdvanceWire")]
pub enum TaskAdvanceResult {
    Processed(ProcessedTask),
    NoTasksAvailable,
}

impl TaskAdvanceResult {
    pub fn processed(&self) -> Option<&ProcessedTask> {
        match self {
            Self::Processed(p) => Some(p),
            Self::NoTasksAvailable => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::NoTasksAvailable)
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum TaskAdvanceWire {
    Processed(ProcessedTask),
    Idle { status: IdleStatus },
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum IdleStatus {
    NoTasksAvailable,
}

impl From<TaskAdvanceWire> for TaskAdvanceResult {
    fn from(wire: TaskAdvanceWire) -> Self {
        match wire {
            TaskAdvanceWire::Processed(p) => Self::Processed(p),
            TaskAdvanceWire::Idle { .. } => Self::NoTasksAvailable,
        }
    }
}

impl From<TaskAdvanceResult> for TaskAdvanceWire {
    fn from(result: TaskAdvanceResult) -> Self {
        match result {
            TaskAdvanceResult::Processed(p) => Self::Processed(p),
            TaskAdvanceResult::NoTasksAvailable => Self::Idle {
                status: IdleStatus::NoTasksAvailable,
            },
        }
    }
}
