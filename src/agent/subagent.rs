//! Search-and-summarize sub-agent.
//!
//! Each sub-agent handles exactly one sub-query: web search, context
//! formatting, and a single summarization call. The orchestrator fans
//! out one sub-agent per planned sub-query; sub-agents share no state
//! with each other.

use crate::error::AgentError;
use crate::search::{SearchProvider, SearchResult};

use super::config::ResearchConfig;
use super::prompt::build_summary_prompt;
use super::provider::LlmProvider;

/// Outcome of one sub-query execution.
///
/// Immutable after creation; ownership transfers to the orchestrator
/// when the sub-agent returns.
#[derive(Debug, Clone)]
pub struct SubagentResult {
    /// Generated summary of the search results.
    pub summary: String,
    /// Raw search results backing the summary, in provider order.
    pub sources: Vec<SearchResult>,
}

/// Agent that researches a single sub-query.
pub struct SubAgent {
    search_count: usize,
    prompt: String,
}

impl SubAgent {
    /// Creates a new sub-agent with the given configuration and
    /// summarization preamble.
    #[must_use]
    pub fn new(config: &ResearchConfig, prompt: String) -> Self {
        Self {
            search_count: config.search_count,
            prompt,
        }
    }

    /// Formats search results into the context block fed to the summarizer.
    ///
    /// One line per result, `"title (url): description"`, provider order
    /// preserved. Missing fields render as empty text. Deterministic:
    /// the same input always produces byte-identical output.
    #[must_use]
    pub fn format_results(results: &[SearchResult]) -> String {
        results
            .iter()
            .map(|r| format!("{} ({}): {}", r.title, r.url, r.description))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Runs the sub-query: search, format, summarize.
    ///
    /// An empty result list is valid input; the summarizer then sees an
    /// empty context block and produces a degenerate summary.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] when either remote call fails. The two
    /// remote calls are the only failure sources; formatting is pure.
    pub async fn execute(
        &self,
        search: &dyn SearchProvider,
        provider: &dyn LlmProvider,
        subquery: &str,
    ) -> Result<SubagentResult, AgentError> {
        let sources = search.search(subquery, self.search_count).await?;
        tracing::debug!(subquery, sources = sources.len(), "search complete, summarizing");

        let context = Self::format_results(&sources);
        let prompt = build_summary_prompt(&self.prompt, subquery, &context);
        let summary = provider.generate(&prompt).await?;

        Ok(SubagentResult { summary, sources })
    }
}
