//! Append-only run log.
//!
//! The orchestrator records each pipeline step here for traceability.
//! The log is write-only: the pipeline never reads it back, and it is
//! discarded with the run's outcome. Only the orchestrator's own task
//! appends entries, so no locking is involved.

use serde::Serialize;

/// A single entry in the run's memory log.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Role tag for the step that produced the entry
    /// (`user`, `planner`, `subagent`, `synthesizer`, `citation`).
    pub role: &'static str,
    /// Entry content.
    pub content: String,
}

/// Ordered, append-only trace of one research run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemoryLog {
    entries: Vec<LogEntry>,
}

impl MemoryLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends an entry.
    pub fn append(&mut self, role: &'static str, content: impl Into<String>) {
        self.entries.push(LogEntry {
            role,
            content: content.into(),
        });
    }

    /// Returns the entries in append order.
    #[must_use]
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the log has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
