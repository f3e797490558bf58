use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WebscoutConfigToml {
    pub base_url: Option<String>,
}
