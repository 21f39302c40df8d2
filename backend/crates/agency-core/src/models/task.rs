use crate::TaskStatus;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A unit of work belonging to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// Name of the agent the backend handed the task to
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// IDs of tasks that must be done first
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
}
