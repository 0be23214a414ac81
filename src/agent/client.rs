//! Provider registry and factory.
//!
//! Maps provider names to concrete [`LlmProvider`] implementations.

use crate::agent::config::ResearchConfig;
use crate::agent::provider::LlmProvider;
use crate::agent::providers::GeminiProvider;
use crate::error::AgentError;

/// Creates an [`LlmProvider`] based on the configured provider name.
///
/// # Supported Providers
///
/// - `"gemini"` (default) — Gemini `generateContent` REST API
///
/// # Errors
///
/// Returns [`AgentError::UnsupportedProvider`] for unknown provider
/// names, or the provider's own construction error (e.g. a missing API
/// key).
pub fn create_provider(config: &ResearchConfig) -> Result<Box<dyn LlmProvider>, AgentError> {
    match config.provider.as_str() {
        "gemini" => Ok(Box::new(GeminiProvider::new(config)?)),
        other => Err(AgentError::UnsupportedProvider {
            name: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_gemini_provider() {
        let config = ResearchConfig::builder()
            .gemini_api_key("test")
            .provider("gemini")
            .build();
        let provider = create_provider(&config);
        assert!(provider.is_ok());
        assert_eq!(provider.map(|p| p.name()).unwrap_or_default(), "gemini");
    }

    #[test]
    fn test_create_unknown_provider() {
        let config = ResearchConfig::builder()
            .gemini_api_key("test")
            .provider("unknown")
            .build();
        let result = create_provider(&config);
        assert!(matches!(
            result,
            Err(AgentError::UnsupportedProvider { .. })
        ));
    }

    #[test]
    fn test_create_provider_missing_key() {
        let config = ResearchConfig::builder().provider("gemini").build();
        let result = create_provider(&config);
        assert!(matches!(result, Err(AgentError::ApiKeyMissing { .. })));
    }
}
