use serde::{Deserialize, Serialize};

const DEFAULT_SERVICE_STATUS: &str = "todo";

/// An application service attached to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub doc: String,
    #[serde(default = "default_service_status")]
    pub status: String,
    #[serde(rename = "type")]
    pub service_type: String,
}

fn default_service_status() -> String {
    DEFAULT_SERVICE_STATUS.to_string()
}
