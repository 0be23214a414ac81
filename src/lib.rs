//! Scour: multi-agent web research.
//!
//! Decomposes a research question into independent search tasks, runs
//! them concurrently against a web-search API, and synthesizes a cited
//! report with an LLM. The library is a thin orchestration layer over
//! two remote HTTP services; see [`agent::Orchestrator`] for the
//! pipeline and [`agent::ResearchConfig`] for configuration.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use scour_rs::agent::{client::create_provider, Orchestrator, ResearchConfig};
//! use scour_rs::search::BraveSearch;
//!
//! # async fn run() -> Result<(), scour_rs::AgentError> {
//! let config = ResearchConfig::from_env();
//! let search = Arc::new(BraveSearch::new(&config)?);
//! let provider = Arc::from(create_provider(&config)?);
//! let orchestrator = Orchestrator::new(search, provider, config);
//!
//! let outcome = orchestrator.run("open source multi agent systems").await?;
//! # let _ = outcome.report;
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod cli;
pub mod error;
pub mod search;

pub use agent::{Orchestrator, ResearchConfig, ResearchOutcome};
pub use error::AgentError;
pub use search::{SearchProvider, SearchResult};
