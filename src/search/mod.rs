//! Web-search provider abstraction.
//!
//! [`SearchProvider`] is the capability interface the research pipeline
//! depends on; [`BraveSearch`] is the production implementation. Test
//! doubles implement the same trait, so the pipeline never needs network
//! access in tests.

pub mod brave;

pub use brave::BraveSearch;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;

/// A single web search result.
///
/// Every field is optional on the wire; absent fields deserialize to
/// empty strings and render as empty text downstream. Result order is
/// the provider's relevance order and is preserved end to end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Result title.
    #[serde(default)]
    pub title: String,
    /// Result URL.
    #[serde(default)]
    pub url: String,
    /// Snippet describing the result.
    #[serde(default)]
    pub description: String,
}

/// Trait for web-search backends.
///
/// Implementations handle the transport layer for a specific provider
/// while presenting a uniform interface to the pipeline. Implementations
/// hold only configuration (credentials, endpoint) and are safe to share
/// across concurrent sub-agent executions.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Provider name (e.g., `"brave"`).
    fn name(&self) -> &'static str;

    /// Runs a web search, returning results in provider relevance order.
    ///
    /// An empty result list is a valid outcome, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] on non-success responses, timeouts, or
    /// transport failures.
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>, AgentError>;
}
