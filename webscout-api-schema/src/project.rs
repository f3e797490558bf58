use serde::{Deserialize, Serialize};

/// Form fields for `POST /create/`. File attachments are not supported here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProjectRequest {
    pub project_name: String,
    pub description: String,
    pub machine_ip: String,
    pub status: String,
    pub lead_analyst_initials: String,
    pub locked: String,
}

/// Generic `{"status": ..., "project": ...}` acknowledgement returned by the
/// project lifecycle endpoints. `project` is absent on `POST /create/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}
