//! Research configuration with builder pattern and environment variable support.
//!
//! Configuration is resolved in order: explicit values → environment variables → defaults.

use std::path::PathBuf;
use std::time::Duration;

/// Default fan-out width: sub-queries planned and dispatched per run.
pub const DEFAULT_FAN_OUT: usize = 3;
/// Default number of search results requested per sub-query.
pub const DEFAULT_SEARCH_COUNT: usize = 5;
/// Default search request timeout in seconds.
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;
/// Default text-generation request timeout in seconds.
const DEFAULT_GENERATE_TIMEOUT_SECS: u64 = 30;
/// Default text-generation model.
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for the research pipeline.
///
/// API keys are optional here; each provider client checks for its own
/// key at construction time and fails with a configuration error when
/// it is absent.
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// LLM provider name (e.g., "gemini").
    pub provider: String,
    /// Brave Search API key.
    pub brave_api_key: Option<String>,
    /// Gemini API key.
    pub gemini_api_key: Option<String>,
    /// Text-generation model identifier.
    pub model: String,
    /// Optional search endpoint override (for proxies or tests).
    pub search_base_url: Option<String>,
    /// Optional generation endpoint override (for proxies or tests).
    pub generate_base_url: Option<String>,
    /// Maximum sub-queries planned and dispatched per run. Always at
    /// least 1.
    pub fan_out: usize,
    /// Search results requested per sub-query.
    pub search_count: usize,
    /// Timeout for search requests.
    pub search_timeout: Duration,
    /// Timeout for generation requests.
    pub generate_timeout: Duration,
    /// Directory containing prompt template files.
    ///
    /// When set, the agents load their instruction preambles from
    /// markdown files in this directory, falling back to compiled-in
    /// defaults for any missing files.
    pub prompt_dir: Option<PathBuf>,
}

impl ResearchConfig {
    /// Creates a new builder for `ResearchConfig`.
    #[must_use]
    pub fn builder() -> ResearchConfigBuilder {
        ResearchConfigBuilder::default()
    }

    /// Creates configuration from environment variables with defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::builder().from_env().build()
    }
}

/// Builder for [`ResearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct ResearchConfigBuilder {
    provider: Option<String>,
    brave_api_key: Option<String>,
    gemini_api_key: Option<String>,
    model: Option<String>,
    search_base_url: Option<String>,
    generate_base_url: Option<String>,
    fan_out: Option<usize>,
    search_count: Option<usize>,
    search_timeout: Option<Duration>,
    generate_timeout: Option<Duration>,
    prompt_dir: Option<PathBuf>,
}

impl ResearchConfigBuilder {
    /// Populates unset fields from environment variables.
    #[must_use]
    pub fn from_env(mut self) -> Self {
        if self.provider.is_none() {
            self.provider = std::env::var("RESEARCH_PROVIDER").ok();
        }
        if self.brave_api_key.is_none() {
            self.brave_api_key = std::env::var("BRAVE_SEARCH_API_KEY").ok();
        }
        if self.gemini_api_key.is_none() {
            self.gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        }
        if self.model.is_none() {
            self.model = std::env::var("RESEARCH_MODEL").ok();
        }
        if self.fan_out.is_none() {
            self.fan_out = std::env::var("RESEARCH_FAN_OUT")
                .ok()
                .and_then(|v| v.parse().ok());
        }
        if self.search_count.is_none() {
            self.search_count = std::env::var("RESEARCH_SEARCH_COUNT")
                .ok()
                .and_then(|v| v.parse().ok());
        }
        if self.prompt_dir.is_none() {
            self.prompt_dir = std::env::var("RESEARCH_PROMPT_DIR").ok().map(PathBuf::from);
        }
        self
    }

    /// Sets the LLM provider name.
    #[must_use]
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    /// Sets the Brave Search API key.
    #[must_use]
    pub fn brave_api_key(mut self, key: impl Into<String>) -> Self {
        self.brave_api_key = Some(key.into());
        self
    }

    /// Sets the Gemini API key.
    #[must_use]
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// Sets the text-generation model.
    #[must_use]
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the search endpoint override.
    #[must_use]
    pub fn search_base_url(mut self, url: impl Into<String>) -> Self {
        self.search_base_url = Some(url.into());
        self
    }

    /// Sets the generation endpoint override.
    #[must_use]
    pub fn generate_base_url(mut self, url: impl Into<String>) -> Self {
        self.generate_base_url = Some(url.into());
        self
    }

    /// Sets the fan-out width.
    #[must_use]
    pub const fn fan_out(mut self, n: usize) -> Self {
        self.fan_out = Some(n);
        self
    }

    /// Sets the search result count per sub-query.
    #[must_use]
    pub const fn search_count(mut self, n: usize) -> Self {
        self.search_count = Some(n);
        self
    }

    /// Sets the search request timeout.
    #[must_use]
    pub const fn search_timeout(mut self, duration: Duration) -> Self {
        self.search_timeout = Some(duration);
        self
    }

    /// Sets the generation request timeout.
    #[must_use]
    pub const fn generate_timeout(mut self, duration: Duration) -> Self {
        self.generate_timeout = Some(duration);
        self
    }

    /// Sets the prompt template directory.
    #[must_use]
    pub fn prompt_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.prompt_dir = Some(dir.into());
        self
    }

    /// Builds the [`ResearchConfig`].
    #[must_use]
    pub fn build(self) -> ResearchConfig {
        ResearchConfig {
            provider: self.provider.unwrap_or_else(|| "gemini".to_string()),
            brave_api_key: self.brave_api_key,
            gemini_api_key: self.gemini_api_key,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            search_base_url: self.search_base_url,
            generate_base_url: self.generate_base_url,
            fan_out: self.fan_out.unwrap_or(DEFAULT_FAN_OUT).max(1),
            search_count: self.search_count.unwrap_or(DEFAULT_SEARCH_COUNT),
            search_timeout: self
                .search_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_SEARCH_TIMEOUT_SECS)),
            generate_timeout: self
                .generate_timeout
                .unwrap_or(Duration::from_secs(DEFAULT_GENERATE_TIMEOUT_SECS)),
            prompt_dir: self.prompt_dir,
        }
    }
}
