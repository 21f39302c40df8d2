use serde::{Deserialize, Serialize};

/// Backend-assigned project identifier.
///
/// The backend is free to hand out numeric or string IDs; both are kept in
/// their original JSON form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    Number(u64),
    Text(String),
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self::Number(id)
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for ProjectId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}
