//! Citation agent.
//!
//! Annotates a synthesized report with bracketed numeric markers and a
//! reference list in a single best-effort generation pass. There is no
//! verification that the markers are grounded in the provided sources
//! and no retry when the output lacks them.

use crate::error::AgentError;
use crate::search::SearchResult;

use super::prompt::build_citation_prompt;
use super::provider::LlmProvider;

/// Agent that adds citations to a synthesized report.
pub struct CitationAgent {
    prompt: String,
}

impl CitationAgent {
    /// Creates a new citation agent with the given preamble.
    #[must_use]
    pub const fn new(prompt: String) -> Self {
        Self { prompt }
    }

    /// Formats the grouped per-sub-query sources into a numbered block.
    ///
    /// Sources keep their sub-query grouping order and are numbered
    /// sequentially across groups. Duplicates across sub-queries are
    /// kept as-is.
    #[must_use]
    pub fn format_sources(all_sources: &[Vec<SearchResult>]) -> String {
        let mut lines = Vec::new();
        let mut n = 0usize;
        for group in all_sources {
            for r in group {
                n += 1;
                lines.push(format!("[{n}] {} ({}): {}", r.title, r.url, r.description));
            }
        }
        lines.join("\n")
    }

    /// Runs the citation pass over the report, returning the annotated
    /// text verbatim from the generator.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError`] when the generation call fails.
    pub async fn annotate(
        &self,
        provider: &dyn LlmProvider,
        report: &str,
        all_sources: &[Vec<SearchResult>],
    ) -> Result<String, AgentError> {
        let sources = Self::format_sources(all_sources);
        tracing::debug!(
            groups = all_sources.len(),
            sources = all_sources.iter().map(Vec::len).sum::<usize>(),
            "running citation pass"
        );
        let prompt = build_citation_prompt(&self.prompt, report, &sources);
        provider.generate(&prompt).await
    }
}
