use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use webscout_api_schema::{
    crawl::{CrawlRequest, ScanControlResponse, ValidateUrlResponse},
    dashboard::DashboardResponse,
    export::ExportResponse,
    folders::FoldersResponse,
    project::{CreateProjectRequest, StatusResponse},
    tree::TreeResponse,
};

/// Characters that pass through unencoded in a URL path segment, matching
/// ECMAScript's `encodeURIComponent`: alphanumerics and `- _ . ! ~ * ' ( )`.
/// Everything else, `/` included, is percent-encoded.
const PATH_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_path_component(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_COMPONENT).to_string()
}

#[derive(Debug, Error)]
pub enum WebscoutApiClientError {
    /// The backend answered with a non-2xx status. The body is not consulted.
    #[error("request failed: {0}")]
    RequestFailed(u16),
    /// Connection-level failures and JSON decode failures, passed through
    /// from reqwest unwrapped.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Async client for the WebScout backend. One method per endpoint; every call
/// issues exactly one request, with no caching, retries, or shared state
/// beyond reqwest's connection pool.
#[derive(Debug, Clone)]
pub struct WebscoutApiClient {
    pub base_url: String,
    client: reqwest::Client,
}

impl WebscoutApiClient {
    pub fn new(base_url: String) -> Self {
        let mut base_url = base_url;
        if base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the crawl graph of a project: `GET /tree/{project}`.
    pub async fn fetch_tree(&self, project: &str) -> Result<TreeResponse, WebscoutApiClientError> {
        self.get(&format!("/tree/{}", encode_path_component(project)))
            .await
    }

    /// `GET /dashboard/{initials}`.
    pub async fn dashboard(
        &self,
        initials: &str,
    ) -> Result<DashboardResponse, WebscoutApiClientError> {
        self.get(&format!("/dashboard/{}", encode_path_component(initials)))
            .await
    }

    /// `GET /folders/`.
    pub async fn folders(&self) -> Result<FoldersResponse, WebscoutApiClientError> {
        self.get("/folders/").await
    }

    /// `POST /create/` with the project fields as a multipart form.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> Result<StatusResponse, WebscoutApiClientError> {
        let form = reqwest::multipart::Form::new()
            .text("project_name", request.project_name)
            .text("description", request.description)
            .text("machine_IP", request.machine_ip)
            .text("status", request.status)
            .text("lead_analyst_initials", request.lead_analyst_initials)
            .text("locked", request.locked);
        let url = format!("{}/create/", self.base_url);
        let res = self.client.post(&url).multipart(form).send().await?;
        Self::decode(res).await
    }

    /// `POST /delete/{project}`. The backend returns a raw database record.
    pub async fn delete_project(&self, project: &str) -> Result<Value, WebscoutApiClientError> {
        self.post_empty(&format!("/delete/{}", encode_path_component(project)))
            .await
    }

    /// `POST /restore/{project}`.
    pub async fn restore_project(&self, project: &str) -> Result<Value, WebscoutApiClientError> {
        self.post_empty(&format!("/restore/{}", encode_path_component(project)))
            .await
    }

    /// `POST /lock/{project}/{initials}`.
    pub async fn lock_project(
        &self,
        project: &str,
        initials: &str,
    ) -> Result<StatusResponse, WebscoutApiClientError> {
        self.post_empty(&format!(
            "/lock/{}/{}",
            encode_path_component(project),
            encode_path_component(initials)
        ))
        .await
    }

    /// `POST /unlock/{project}/{initials}`.
    pub async fn unlock_project(
        &self,
        project: &str,
        initials: &str,
    ) -> Result<StatusResponse, WebscoutApiClientError> {
        self.post_empty(&format!(
            "/unlock/{}/{}",
            encode_path_component(project),
            encode_path_component(initials)
        ))
        .await
    }

    /// `POST /analyst/{initials}/`.
    pub async fn check_login(&self, initials: &str) -> Result<Value, WebscoutApiClientError> {
        self.post_empty(&format!("/analyst/{}/", encode_path_component(initials)))
            .await
    }

    /// `GET /export/{project}`.
    pub async fn export_project(
        &self,
        project: &str,
    ) -> Result<ExportResponse, WebscoutApiClientError> {
        self.get(&format!("/export/{}", encode_path_component(project)))
            .await
    }

    /// `POST /validate_url`. Only the `url` field of the request is read.
    pub async fn validate_url(
        &self,
        request: &CrawlRequest,
    ) -> Result<ValidateUrlResponse, WebscoutApiClientError> {
        self.post_json("/validate_url", request).await
    }

    /// `POST /stop_crawler`.
    pub async fn stop_crawler(&self) -> Result<ScanControlResponse, WebscoutApiClientError> {
        self.post_empty("/stop_crawler").await
    }

    /// `POST /pause_crawler`.
    pub async fn pause_crawler(&self) -> Result<ScanControlResponse, WebscoutApiClientError> {
        self.post_empty("/pause_crawler").await
    }

    /// `POST /resume_crawler`.
    pub async fn resume_crawler(&self) -> Result<ScanControlResponse, WebscoutApiClientError> {
        self.post_empty("/resume_crawler").await
    }

    /// `POST /stop_fuzzer`.
    pub async fn stop_fuzzer(&self) -> Result<ScanControlResponse, WebscoutApiClientError> {
        self.post_empty("/stop_fuzzer").await
    }

    /// `POST /pause_fuzzer`.
    pub async fn pause_fuzzer(&self) -> Result<ScanControlResponse, WebscoutApiClientError> {
        self.post_empty("/pause_fuzzer").await
    }

    /// `POST /resume_fuzzer`.
    pub async fn resume_fuzzer(&self) -> Result<ScanControlResponse, WebscoutApiClientError> {
        self.post_empty("/resume_fuzzer").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, WebscoutApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self.client.get(&url).send().await?;
        Self::decode(res).await
    }

    async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, WebscoutApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self.client.post(&url).send().await?;
        Self::decode(res).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, WebscoutApiClientError> {
        let url = format!("{}{}", self.base_url, path);
        let res = self.client.post(&url).json(body).send().await?;
        Self::decode(res).await
    }

    // Status is checked before any body read; error bodies are ignored.
    async fn decode<T: DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<T, WebscoutApiClientError> {
        if !res.status().is_success() {
            return Err(WebscoutApiClientError::RequestFailed(res.status().as_u16()));
        }
        Ok(res.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_component_reserved_characters() {
        assert_eq!(encode_path_component("my project/1"), "my%20project%2F1");
        assert_eq!(encode_path_component("a?b=c&d"), "a%3Fb%3Dc%26d");
        assert_eq!(encode_path_component("100%"), "100%25");
    }

    #[test]
    fn test_encode_path_component_unreserved_characters() {
        assert_eq!(
            encode_path_component("AZaz09-_.!~*'()"),
            "AZaz09-_.!~*'()"
        );
    }

    #[test]
    fn test_encode_path_component_non_ascii() {
        assert_eq!(encode_path_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let client = WebscoutApiClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_new_keeps_base_url_without_trailing_slash() {
        let client = WebscoutApiClient::new("http://localhost:8000".to_string());
        assert_eq!(client.base_url, "http://localhost:8000");
    }
}
