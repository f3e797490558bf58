use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /dashboard/{initials}`: projects owned by the analyst plus projects
/// shared with them by the lead analyst.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub my_projects: Vec<Value>,
    pub shared_projects: Vec<Value>,
}
