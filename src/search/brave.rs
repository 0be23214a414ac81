//! Brave Web Search API client.
//!
//! Thin wrapper over `GET /res/v1/web/search`. The interesting parts of
//! the response live under `web.results`; a missing tree deserializes to
//! an empty result list rather than an error.

use async_trait::async_trait;
use serde::Deserialize;

use super::{SearchProvider, SearchResult};
use crate::agent::config::ResearchConfig;
use crate::error::AgentError;

/// Default Brave Search API endpoint.
const BASE_URL: &str = "https://api.search.brave.com/res/v1/web/search";

/// Environment variable supplying the subscription token.
const API_KEY_VAR: &str = "BRAVE_SEARCH_API_KEY";

const PROVIDER: &str = "brave";

/// Client for the Brave Web Search API.
pub struct BraveSearch {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Default, Deserialize)]
struct WebSearchResponse {
    #[serde(default)]
    web: WebResults,
}

#[derive(Debug, Default, Deserialize)]
struct WebResults {
    #[serde(default)]
    results: Vec<SearchResult>,
}

impl BraveSearch {
    /// Creates a new client from the research configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ApiKeyMissing`] if no Brave API key is
    /// configured.
    pub fn new(config: &ResearchConfig) -> Result<Self, AgentError> {
        let api_key = config
            .brave_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AgentError::ApiKeyMissing { var: API_KEY_VAR })?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(config.search_timeout)
            .build()
            .map_err(|e| AgentError::ApiRequest {
                provider: PROVIDER,
                message: format!("client construction failed: {e}"),
                status: None,
            })?;

        Ok(Self {
            http,
            api_key,
            base_url: config
                .search_base_url
                .clone()
                .unwrap_or_else(|| BASE_URL.to_string()),
        })
    }
}

impl std::fmt::Debug for BraveSearch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BraveSearch")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl SearchProvider for BraveSearch {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>, AgentError> {
        tracing::debug!(query, count, "dispatching web search");

        let count_param = count.to_string();
        let response = self
            .http
            .get(&self.base_url)
            .header("Accept", "application/json")
            .header("X-Subscription-Token", &self.api_key)
            .query(&[("q", query), ("count", count_param.as_str())])
            .send()
            .await
            .map_err(|e| request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AgentError::ApiRequest {
                provider: PROVIDER,
                message: format!("status {status}: {body}"),
                status: Some(status.as_u16()),
            });
        }

        let payload: WebSearchResponse =
            response
                .json()
                .await
                .map_err(|e| AgentError::ResponseParse {
                    provider: PROVIDER,
                    message: e.to_string(),
                })?;

        tracing::debug!(results = payload.web.results.len(), "web search complete");
        Ok(payload.web.results)
    }
}

fn request_error(e: &reqwest::Error) -> AgentError {
    let message = if e.is_timeout() {
        format!("request timed out: {e}")
    } else {
        e.to_string()
    };
    AgentError::ApiRequest {
        provider: PROVIDER,
        message,
        status: e.status().map(|s| s.as_u16()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: &str) -> ResearchConfig {
        ResearchConfig::builder().brave_api_key(key).build()
    }

    #[test]
    fn test_new_requires_api_key() {
        let config = ResearchConfig::builder().build();
        let result = BraveSearch::new(&config);
        assert!(matches!(
            result,
            Err(AgentError::ApiKeyMissing {
                var: "BRAVE_SEARCH_API_KEY"
            })
        ));
    }

    #[test]
    fn test_new_rejects_empty_api_key() {
        let result = BraveSearch::new(&config_with_key(""));
        assert!(matches!(result, Err(AgentError::ApiKeyMissing { .. })));
    }

    #[test]
    fn test_new_with_key() {
        let client = BraveSearch::new(&config_with_key("token"));
        assert!(client.is_ok());
        assert_eq!(client.map(|c| c.name()).unwrap_or_default(), "brave");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "query": {"original": "rust"},
            "web": {"results": [
                {"title": "The Rust Programming Language", "url": "https://rust-lang.org", "description": "A language"},
                {"url": "https://example.com"}
            ]}
        }"#;
        let payload: WebSearchResponse = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(payload.web.results.len(), 2);
        assert_eq!(payload.web.results[0].title, "The Rust Programming Language");
        assert!(payload.web.results[1].title.is_empty());
    }

    #[test]
    fn test_response_parsing_missing_web_tree() {
        let payload: WebSearchResponse = serde_json::from_str("{}").unwrap_or_default();
        assert!(payload.web.results.is_empty());
    }
}
