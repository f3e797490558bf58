use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /export/{project}`. On success `data` carries the full project dump;
/// on failure `error` carries the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_export_failure() {
        let body = r#"{"status":"failure","error":"Failed to export project"}"#;
        let res: ExportResponse = serde_json::from_str(body).unwrap();
        assert_eq!(res.status, "failure");
        assert!(res.data.is_none());
        assert_eq!(res.error.as_deref(), Some("Failed to export project"));
    }
}
