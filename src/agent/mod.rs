//! Multi-agent research pipeline.
//!
//! Coordinates a web-search provider and an LLM provider to answer a
//! research question:
//!
//! ```text
//! User query → Orchestrator
//!   ├── Plan: LLM decomposes the query into N search tasks
//!   ├── Fan-out → N concurrent SubAgents
//!   │   └── each: web search → context block → summary
//!   ├── Collect outcomes (input order, fail-fast)
//!   ├── Reduce: LLM synthesizes one report
//!   └── CitationAgent → cited final report
//! ```
//!
//! Both providers are capability traits ([`SearchProvider`](crate::search::SearchProvider),
//! [`LlmProvider`]), so the whole pipeline runs against test doubles
//! without network access.

pub mod citation;
pub mod client;
pub mod config;
pub mod memory;
pub mod orchestrator;
pub mod planner;
pub mod prompt;
pub mod provider;
pub mod providers;
pub mod subagent;

// Re-export key types
pub use citation::CitationAgent;
pub use config::ResearchConfig;
pub use memory::{LogEntry, MemoryLog};
pub use orchestrator::{Orchestrator, ResearchOutcome};
pub use prompt::PromptSet;
pub use provider::LlmProvider;
pub use subagent::{SubAgent, SubagentResult};
