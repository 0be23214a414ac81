//! Orchestrator for the plan → fan-out → reduce → cite pipeline.
//!
//! Coordinates one research run end to end: plans sub-queries from the
//! original question, dispatches one sub-agent per sub-query
//! concurrently, reduces their summaries into a synthesized report, and
//! delegates the citation pass. Phases run in strict sequence; any
//! remote-call failure aborts the run with no partial report.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::AgentError;
use crate::search::{SearchProvider, SearchResult};

use super::citation::CitationAgent;
use super::config::ResearchConfig;
use super::memory::MemoryLog;
use super::planner;
use super::prompt::{self, PromptSet};
use super::provider::LlmProvider;
use super::subagent::{SubAgent, SubagentResult};

/// Coordinates the research pipeline.
///
/// Owns the run's memory log for its duration and holds shared handles
/// to the two stateless provider clients. The fan-out step is the only
/// point of parallelism; the plan bounds it to at most the configured
/// fan-out width.
pub struct Orchestrator {
    search: Arc<dyn SearchProvider>,
    provider: Arc<dyn LlmProvider>,
    config: ResearchConfig,
    prompts: PromptSet,
}

/// Final result of one research run.
#[derive(Debug, Clone, Serialize)]
pub struct ResearchOutcome {
    /// The cited report, verbatim from the citation pass.
    pub report: String,
    /// Sub-queries dispatched for this run, in plan order.
    pub subqueries: Vec<String>,
    /// True when planner output yielded no usable sub-queries and the
    /// run fell back to the original query.
    pub plan_degraded: bool,
    /// Total search results consulted across all sub-queries.
    pub sources_consulted: usize,
    /// Ordered trace of the run's steps.
    pub log: MemoryLog,
    /// Total elapsed time.
    #[serde(serialize_with = "serialize_duration")]
    pub elapsed: Duration,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_duration<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}

impl Orchestrator {
    /// Creates a new orchestrator with the given providers and configuration.
    ///
    /// Loads instruction preambles from the directory specified in
    /// [`ResearchConfig::prompt_dir`], falling back to compiled-in
    /// defaults.
    #[must_use]
    pub fn new(
        search: Arc<dyn SearchProvider>,
        provider: Arc<dyn LlmProvider>,
        config: ResearchConfig,
    ) -> Self {
        let prompts = PromptSet::load(config.prompt_dir.as_deref());
        Self {
            search,
            provider,
            config,
            prompts,
        }
    }

    /// Executes the full research pipeline for `query`.
    ///
    /// # Steps
    ///
    /// 1. Plan sub-queries (silent fallback to the original query on
    ///    malformed planner output)
    /// 2. Fan out one sub-agent per sub-query concurrently
    /// 3. Reduce the collected summaries into one synthesized report
    /// 4. Annotate the report with citations
    ///
    /// # Errors
    ///
    /// Returns the first [`AgentError`] from any remote call; no partial
    /// report is produced on failure.
    pub async fn run(&self, query: &str) -> Result<ResearchOutcome, AgentError> {
        if query.trim().is_empty() {
            return Err(AgentError::Orchestration {
                message: "query cannot be empty".to_string(),
            });
        }

        let start = Instant::now();
        let mut log = MemoryLog::new();
        log.append("user", query);

        // Step 1: plan sub-queries
        let (subqueries, plan_degraded) = self.plan(query, &mut log).await?;

        // Step 2: fan out one sub-agent per sub-query
        let outcomes = self.dispatch(&subqueries).await?;
        for (subquery, outcome) in subqueries.iter().zip(&outcomes) {
            log.append("subagent", format!("{subquery}: {}", outcome.summary));
        }

        // Step 3: reduce summaries into one report
        let report = self.reduce(query, &outcomes).await?;
        log.append("synthesizer", report.clone());

        // Step 4: citation pass over the report and all grouped sources
        let all_sources: Vec<Vec<SearchResult>> =
            outcomes.into_iter().map(|o| o.sources).collect();
        let citation = CitationAgent::new(self.prompts.citation.clone());
        let cited = citation
            .annotate(&*self.provider, &report, &all_sources)
            .await?;
        log.append("citation", cited.clone());

        let elapsed = start.elapsed();
        tracing::info!(
            subqueries = subqueries.len(),
            sources = all_sources.iter().map(Vec::len).sum::<usize>(),
            elapsed_ms = elapsed.as_millis() as u64,
            "research run complete"
        );

        Ok(ResearchOutcome {
            report: cited,
            sources_consulted: all_sources.iter().map(Vec::len).sum(),
            subqueries,
            plan_degraded,
            log,
            elapsed,
        })
    }

    /// Plans sub-queries for the run.
    ///
    /// Malformed planner output never fails the run: extraction falls
    /// back to a single-element plan holding the original query.
    async fn plan(
        &self,
        query: &str,
        log: &mut MemoryLog,
    ) -> Result<(Vec<String>, bool), AgentError> {
        let width = self.config.fan_out;
        let prompt = prompt::build_planner_prompt(&self.prompts.planner, query, width);
        let response = self.provider.generate(&prompt).await?;

        let (subqueries, degraded) = planner::plan_with_fallback(&response, query, width);
        if degraded {
            tracing::warn!(query, "planner output unusable, falling back to the original query");
        }
        tracing::info!(count = subqueries.len(), "planned sub-queries");
        log.append("planner", subqueries.join("\n"));
        Ok((subqueries, degraded))
    }

    /// Dispatches one sub-agent per sub-query and collects outcomes in
    /// input order.
    ///
    /// Collection joins task handles in spawn order, so `result[i]`
    /// corresponds to `subqueries[i]` no matter which task finishes
    /// first. The first failure aborts the dispatch as a unit — no
    /// partial outcome list — and sibling tasks still in flight are
    /// abandoned rather than cancelled.
    async fn dispatch(&self, subqueries: &[String]) -> Result<Vec<SubagentResult>, AgentError> {
        let mut handles = Vec::with_capacity(subqueries.len());
        for subquery in subqueries {
            let search = Arc::clone(&self.search);
            let provider = Arc::clone(&self.provider);
            let agent = SubAgent::new(&self.config, self.prompts.summary.clone());
            let subquery = subquery.clone();

            handles.push(tokio::spawn(async move {
                agent.execute(&*search, &*provider, &subquery).await
            }));
        }

        let mut outcomes = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(Ok(outcome)) => outcomes.push(outcome),
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    return Err(AgentError::Orchestration {
                        message: format!("task join failed: {e}"),
                    });
                }
            }
        }
        Ok(outcomes)
    }

    /// Reduces sub-agent summaries into one synthesized report.
    ///
    /// Summaries are concatenated in input order, separated by blank
    /// lines; the generated text is returned verbatim.
    async fn reduce(
        &self,
        query: &str,
        outcomes: &[SubagentResult],
    ) -> Result<String, AgentError> {
        let summaries: Vec<&str> = outcomes.iter().map(|o| o.summary.as_str()).collect();
        let prompt = prompt::build_synthesis_prompt(
            &self.prompts.synthesis,
            query,
            &summaries.join("\n\n"),
        );
        self.provider.generate(&prompt).await
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("search", &self.search.name())
            .field("provider", &self.provider.name())
            .field("config", &self.config)
            .finish()
    }
}
