//! End-to-end pipeline tests with in-process provider doubles.
//!
//! Both providers are stubbed, so these tests exercise the real
//! plan → fan-out → reduce → cite pipeline without network access.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;

use scour_rs::agent::provider::LlmProvider;
use scour_rs::agent::{Orchestrator, ResearchConfig};
use scour_rs::error::AgentError;
use scour_rs::search::{SearchProvider, SearchResult};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Search double: records queries, serves two canned results per query,
/// with optional per-query latency and failure injection.
#[derive(Default)]
struct StubSearch {
    calls: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
    delays: HashMap<String, Duration>,
    fail_on: Option<String>,
}

#[async_trait]
impl SearchProvider for StubSearch {
    fn name(&self) -> &'static str {
        "stub-search"
    }

    async fn search(&self, query: &str, _count: usize) -> Result<Vec<SearchResult>, AgentError> {
        lock(&self.calls).push(query.to_string());
        if let Some(delay) = self.delays.get(query) {
            tokio::time::sleep(*delay).await;
        }
        lock(&self.completed).push(query.to_string());

        if self.fail_on.as_deref() == Some(query) {
            return Err(AgentError::ApiRequest {
                provider: "stub-search",
                message: format!("injected failure for {query}"),
                status: Some(500),
            });
        }

        let slug = query.replace(' ', "-");
        Ok(vec![
            SearchResult {
                title: format!("{query} first"),
                url: format!("https://example.com/{slug}/1"),
                description: format!("about {query}"),
            },
            SearchResult {
                title: format!("{query} second"),
                url: format!("https://example.com/{slug}/2"),
                description: format!("more about {query}"),
            },
        ])
    }
}

/// Generator double: recognizes each pipeline step by its prompt shape
/// and answers with a canned, step-specific response.
#[derive(Default)]
struct StubGenerator {
    prompts: Mutex<Vec<String>>,
    plan_response: String,
}

#[async_trait]
impl LlmProvider for StubGenerator {
    fn name(&self) -> &'static str {
        "stub-llm"
    }

    async fn generate(&self, prompt: &str) -> Result<String, AgentError> {
        lock(&self.prompts).push(prompt.to_string());

        if prompt.contains("citation assistant") {
            return Ok("report with citations".to_string());
        }
        if prompt.contains("independent search tasks") {
            return Ok(self.plan_response.clone());
        }
        if let Some(task) = prompt.lines().find_map(|l| l.strip_prefix("Search task: ")) {
            return Ok(format!("summary:{task}"));
        }
        if prompt.contains("Partial summaries:") {
            return Ok("synthesized report".to_string());
        }
        Err(AgentError::Orchestration {
            message: format!("unexpected prompt: {prompt}"),
        })
    }
}

fn config(fan_out: usize) -> ResearchConfig {
    // Point prompt_dir at a path that cannot exist so the compiled-in
    // preambles are always used, regardless of the host environment.
    ResearchConfig::builder()
        .fan_out(fan_out)
        .prompt_dir("/nonexistent/scour-prompts")
        .build()
}

#[tokio::test]
async fn test_end_to_end_research_run() {
    let search = Arc::new(StubSearch::default());
    let generator = Arc::new(StubGenerator {
        plan_response: "1. topic one\n2. topic two".to_string(),
        ..StubGenerator::default()
    });
    let orchestrator = Orchestrator::new(search.clone(), generator.clone(), config(2));

    let outcome = orchestrator.run("open source multi agent systems").await;
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => unreachable!("run failed: {e}"),
    };

    // Final report comes back verbatim from the citation pass.
    assert_eq!(outcome.report, "report with citations");
    assert_eq!(outcome.subqueries, vec!["topic one", "topic two"]);
    assert!(!outcome.plan_degraded);
    assert_eq!(outcome.sources_consulted, 4);

    // Both sub-queries were searched (concurrently, so order may vary).
    let mut searched = lock(&search.calls).clone();
    searched.sort();
    assert_eq!(searched, vec!["topic one", "topic two"]);

    // planning + 2 sub-agent summaries + synthesis + citation
    let prompts = lock(&generator.prompts).clone();
    assert_eq!(prompts.len(), 5);
    assert!(prompts[0].contains("open source multi agent systems"));
    assert!(prompts[0].contains("independent search tasks"));
    assert!(prompts[4].contains("citation assistant"));

    // The citation prompt carries all four sources, numbered across
    // groups with grouping order preserved.
    assert!(prompts[4].contains("[1] topic one first"));
    assert!(prompts[4].contains("[2] topic one second"));
    assert!(prompts[4].contains("[3] topic two first"));
    assert!(prompts[4].contains("[4] topic two second"));

    // The run trace records every step in pipeline order.
    let roles: Vec<&str> = outcome.log.entries().iter().map(|e| e.role).collect();
    assert_eq!(
        roles,
        vec![
            "user",
            "planner",
            "subagent",
            "subagent",
            "synthesizer",
            "citation"
        ]
    );
}

#[tokio::test]
async fn test_dispatch_preserves_input_order() {
    // Stagger completion: the first sub-query finishes last, the second
    // first. Outcomes must still come back in plan order.
    let mut delays = HashMap::new();
    delays.insert("q-one".to_string(), Duration::from_millis(50));
    delays.insert("q-two".to_string(), Duration::ZERO);
    delays.insert("q-three".to_string(), Duration::from_millis(25));

    let search = Arc::new(StubSearch {
        delays,
        ..StubSearch::default()
    });
    let generator = Arc::new(StubGenerator {
        plan_response: "1. q-one\n2. q-two\n3. q-three".to_string(),
        ..StubGenerator::default()
    });
    let orchestrator = Orchestrator::new(search.clone(), generator.clone(), config(3));

    let outcome = orchestrator.run("ordering question").await;
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => unreachable!("run failed: {e}"),
    };

    // Completion order differs from input order...
    let completed = lock(&search.completed).clone();
    assert_eq!(completed, vec!["q-two", "q-three", "q-one"]);

    // ...but collected outcomes match the plan order.
    let subagent_entries: Vec<&str> = outcome
        .log
        .entries()
        .iter()
        .filter(|e| e.role == "subagent")
        .map(|e| e.content.as_str())
        .collect();
    assert_eq!(
        subagent_entries,
        vec![
            "q-one: summary:q-one",
            "q-two: summary:q-two",
            "q-three: summary:q-three"
        ]
    );
}

#[tokio::test]
async fn test_dispatch_fails_fast() {
    let search = Arc::new(StubSearch {
        fail_on: Some("bad topic".to_string()),
        ..StubSearch::default()
    });
    let generator = Arc::new(StubGenerator {
        plan_response: "1. good topic\n2. bad topic".to_string(),
        ..StubGenerator::default()
    });
    let orchestrator = Orchestrator::new(search, generator.clone(), config(2));

    let result = orchestrator.run("failing question").await;
    assert!(matches!(
        result,
        Err(AgentError::ApiRequest {
            provider: "stub-search",
            ..
        })
    ));

    // The failure aborts the run before synthesis and citation.
    let prompts = lock(&generator.prompts).clone();
    assert!(!prompts.iter().any(|p| p.contains("Partial summaries:")));
    assert!(!prompts.iter().any(|p| p.contains("citation assistant")));
}

#[tokio::test]
async fn test_malformed_plan_falls_back_to_original_query() {
    let search = Arc::new(StubSearch::default());
    let generator = Arc::new(StubGenerator {
        plan_response: "the model rambled instead of numbering tasks".to_string(),
        ..StubGenerator::default()
    });
    let orchestrator = Orchestrator::new(search.clone(), generator.clone(), config(3));

    let outcome = orchestrator.run("fallback question").await;
    let outcome = match outcome {
        Ok(outcome) => outcome,
        Err(e) => unreachable!("run failed: {e}"),
    };

    assert!(outcome.plan_degraded);
    assert_eq!(outcome.subqueries, vec!["fallback question"]);
    assert_eq!(lock(&search.calls).clone(), vec!["fallback question"]);

    // planning + 1 sub-agent summary + synthesis + citation
    assert_eq!(lock(&generator.prompts).len(), 4);
    assert_eq!(outcome.report, "report with citations");
}

#[tokio::test]
async fn test_empty_query_is_rejected() {
    let search = Arc::new(StubSearch::default());
    let generator = Arc::new(StubGenerator::default());
    let orchestrator = Orchestrator::new(search, generator.clone(), config(3));

    let result = orchestrator.run("   ").await;
    assert!(matches!(result, Err(AgentError::Orchestration { .. })));
    assert!(lock(&generator.prompts).is_empty());
}
