use serde::{Deserialize, Serialize};

/// Body of `POST /projects/`.
///
/// Nothing is validated locally; empty or oversized strings are sent as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub description: String,
}

impl CreateProjectRequest {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}
