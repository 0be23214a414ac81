//! Error types for scour-rs.
//!
//! The library surface uses [`AgentError`] for everything that can go
//! wrong while talking to the remote providers or running the research
//! pipeline. The CLI layer wraps those in [`CommandError`] variants
//! carrying user-facing context.

use thiserror::Error;

/// Errors from provider clients and the research pipeline.
///
/// Remote-call failures are fatal to a run: there is no retry and no
/// partial report. They propagate unmodified to the caller of
/// [`Orchestrator::run`](crate::agent::Orchestrator::run).
#[derive(Debug, Error)]
pub enum AgentError {
    /// No API key was configured for a provider.
    ///
    /// Surfaced at provider construction time, never retried.
    #[error("API key not configured: set {var}")]
    ApiKeyMissing {
        /// Environment variable that would supply the key.
        var: &'static str,
    },

    /// A remote call failed: non-success HTTP status, timeout, or
    /// transport failure.
    #[error("{provider} request failed: {message}")]
    ApiRequest {
        /// Provider that produced the failure.
        provider: &'static str,
        /// Failure description.
        message: String,
        /// HTTP status code, when one was received.
        status: Option<u16>,
    },

    /// A provider response body did not match the expected shape.
    #[error("failed to parse {provider} response: {message}")]
    ResponseParse {
        /// Provider that produced the response.
        provider: &'static str,
        /// Parse failure description.
        message: String,
    },

    /// Unknown provider name in configuration.
    #[error("unsupported provider: {name}")]
    UnsupportedProvider {
        /// The unrecognized provider name.
        name: String,
    },

    /// Pipeline-internal failure (task join, invalid input).
    #[error("orchestration failed: {message}")]
    Orchestration {
        /// Failure description.
        message: String,
    },
}

/// Errors from CLI command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command could not be executed.
    #[error("{0}")]
    ExecutionFailed(String),

    /// Output serialization failed.
    #[error("output formatting failed: {0}")]
    OutputFormat(String),
}

/// Top-level error type unifying the library and CLI layers.
#[derive(Debug, Error)]
pub enum Error {
    /// Provider or pipeline failure.
    #[error(transparent)]
    Agent(#[from] AgentError),

    /// CLI command failure.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Filesystem I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for fallible scour-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
