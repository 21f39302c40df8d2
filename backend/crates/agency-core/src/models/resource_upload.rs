use serde::{Deserialize, Serialize};

/// Response of `POST /projects/{id}/ressources/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUpload {
    pub file_size: u64,
}
