//! Pluggable LLM provider trait.
//!
//! Implementations translate a plain prompt-in, text-out contract into
//! provider-specific HTTP calls. This keeps all agent logic decoupled
//! from any particular LLM vendor.

use async_trait::async_trait;

use crate::error::AgentError;

/// Trait for text-generation backends.
///
/// Implementations handle the transport layer (HTTP, timeouts) for a
/// specific provider while presenting a uniform interface to agents.
/// They hold only configuration (credentials, endpoint, model) and are
/// safe to share across concurrent sub-agent executions.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name (e.g., `"gemini"`).
    fn name(&self) -> &'static str;

    /// Generates text from a single prompt.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] on API failures, timeouts, or malformed
    /// response bodies.
    async fn generate(&self, prompt: &str) -> Result<String, AgentError>;
}
