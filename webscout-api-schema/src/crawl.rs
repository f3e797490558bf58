use serde::{Deserialize, Serialize};

/// Crawl parameters as submitted by the front-end form. Every field except
/// `url` is optional; omitted fields fall back to the backend's defaults.
/// Also the request body of `POST /validate_url`, which only reads `url`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
}

/// `POST /validate_url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidateUrlResponse {
    pub valid: bool,
    pub message: String,
}

/// Acknowledgement from the stop/pause/resume endpoints of the crawler and
/// the fuzzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanControlResponse {
    pub message: String,
}
