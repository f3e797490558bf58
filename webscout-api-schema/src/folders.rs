use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /folders/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoldersResponse {
    pub my_folders: Vec<Value>,
}
