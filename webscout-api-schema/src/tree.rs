use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Crawl graph of a project as served by `GET /tree/{project}`.
///
/// Node and edge records are database rows with no fixed shape, so they stay
/// opaque JSON values. Only the two top-level fields are asserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeResponse {
    pub nodes: Vec<Value>,
    pub edges: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_tree_response() {
        let body = r#"{"nodes":[{"id":"a"}],"edges":[]}"#;
        let tree: TreeResponse = serde_json::from_str(body).unwrap();
        assert_eq!(tree.nodes, vec![json!({"id": "a"})]);
        assert!(tree.edges.is_empty());
    }

    #[test]
    fn test_deserialize_tree_response_requires_both_fields() {
        let body = r#"{"nodes":[]}"#;
        assert!(serde_json::from_str::<TreeResponse>(body).is_err());
    }
}
