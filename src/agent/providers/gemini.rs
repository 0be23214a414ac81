//! Gemini provider implementation over the `generateContent` REST API.
//!
//! Posts a single-turn request body and extracts the generated text
//! from `candidates[0].content.parts[0].text`. Any other response shape
//! is a parse error, not a panic.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::agent::config::ResearchConfig;
use crate::agent::provider::LlmProvider;
use crate::error::AgentError;

/// Default Gemini model endpoint root.
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment variable supplying the API key.
const API_KEY_VAR: &str = "GEMINI_API_KEY";

const PROVIDER: &str = "gemini";

/// Client for the Gemini text-generation API.
pub struct GeminiProvider {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Creates a new provider from the research configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ApiKeyMissing`] if no Gemini API key is
    /// configured.
    pub fn new(config: &ResearchConfig) -> Result<Self, AgentError> {
        let api_key = config
            .gemini_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(AgentError::ApiKeyMissing { var: API_KEY_VAR })?
            .to_string();

        let http = reqwest::Client::builder()
            .timeout(config.generate_timeout)
            .build()
            .map_err(|e| AgentError::ApiRequest {
                provider: PROVIDER,
                message: format!("client construction failed: {e}"),
                status: None,
            })?;

        Ok(Self {
            http,
            api_key,
            model: config.model.clone(),
            base_url: config
                .generate_base_url
                .clone()
                .unwrap_or_else(|| BASE_URL.to_string()),
        })
    }

    fn request_body(prompt: &str) -> GenerateRequest<'_> {
        GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        }
    }

    /// Extracts the generated text from a response body.
    fn extract_text(response: GenerateResponse) -> Result<String, AgentError> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| AgentError::ResponseParse {
                provider: PROVIDER,
                message: "missing candidates[0].content.parts[0].text".to_string(),
            })
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "dispatching generation request");

        let url = format!("{}/{}:generateContent", self.base_url, self.model);
        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&Self::request_body(prompt))
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

        let payload: GenerateResponse =
            response
                .json()
                .await
                .map_err(|e| AgentError::ResponseParse {
                    provider: PROVIDER,
                    message: e.to_string(),
                })?;

        Self::extract_text(payload)
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
