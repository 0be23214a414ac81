//! Instruction preambles and prompt builders for agents.
//!
//! Each pipeline step sends a single prompt string: a fixed instruction
//! preamble followed by the run's dynamic content. Preambles can be
//! customized via template files; builders do the embedding.

use std::path::Path;

/// Instruction preamble for the planning step.
pub const PLANNER_PROMPT: &str = "You are a research planning assistant. You decompose a research question into independent search tasks that can be investigated in parallel. Each task must stand alone as a web search query. Respond with a numbered list, one task per line, and no surrounding text.";

/// Instruction preamble for the sub-agent summarization step.
pub const SUMMARY_PROMPT: &str = "You are a research assistant. Summarize the search results below into a short, factual digest that answers the search task. Stick to what the results say; do not invent sources or facts. If the results are empty or unhelpful, say so briefly.";

/// Instruction preamble for the synthesis (reduction) step.
pub const SYNTHESIS_PROMPT: &str = "You are a research editor. Combine the partial summaries below into a single coherent answer to the original research question. Organize by theme, keep concrete facts and figures, and note open questions the summaries leave unresolved.";

/// Instruction preamble for the citation pass.
pub const CITATION_PROMPT: &str = "You are a citation assistant. Insert bracketed numeric markers like [1] after claims in the report that are supported by the numbered sources, and append a References section listing each cited source on its own line. Do not alter the report text otherwise.";

/// Default prompt directory under user config.
const DEFAULT_PROMPT_DIR: &str = ".config/scour-rs/prompts";

/// Filename for the planner preamble template.
const PLANNER_FILENAME: &str = "planner.md";
/// Filename for the summary preamble template.
const SUMMARY_FILENAME: &str = "summary.md";
/// Filename for the synthesis preamble template.
const SYNTHESIS_FILENAME: &str = "synthesis.md";
/// Filename for the citation preamble template.
const CITATION_FILENAME: &str = "citation.md";

/// A set of instruction preambles for all pipeline steps.
///
/// Loaded from external template files when available, falling back to
/// compiled-in defaults. Use [`PromptSet::load`] to resolve the prompt
/// directory from CLI flags, environment variables, or the default path.
#[derive(Debug, Clone)]
pub struct PromptSet {
    /// Preamble for the planning step.
    pub planner: String,
    /// Preamble for sub-agent summarization.
    pub summary: String,
    /// Preamble for the synthesis step.
    pub synthesis: String,
    /// Preamble for the citation pass.
    pub citation: String,
}

impl PromptSet {
    /// Loads preambles from the given directory, falling back to compiled-in defaults.
    ///
    /// Resolution order for `prompt_dir`:
    /// 1. Explicit `prompt_dir` argument (from `--prompt-dir` CLI flag)
    /// 2. `RESEARCH_PROMPT_DIR` environment variable
    /// 3. `~/.config/scour-rs/prompts/`
    ///
    /// Each file is loaded independently — a missing file uses its default.
    #[must_use]
    pub fn load(prompt_dir: Option<&Path>) -> Self {
        let resolved_dir = prompt_dir
            .map(std::path::PathBuf::from)
            .or_else(|| {
                std::env::var("RESEARCH_PROMPT_DIR")
                    .ok()
                    .map(std::path::PathBuf::from)
            })
            .or_else(|| dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR)));

        let load_file = |filename: &str, default: &str| -> String {
            resolved_dir
                .as_ref()
                .map(|dir| dir.join(filename))
                .and_then(|path| std::fs::read_to_string(&path).ok())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            planner: load_file(PLANNER_FILENAME, PLANNER_PROMPT),
            summary: load_file(SUMMARY_FILENAME, SUMMARY_PROMPT),
            synthesis: load_file(SYNTHESIS_FILENAME, SYNTHESIS_PROMPT),
            citation: load_file(CITATION_FILENAME, CITATION_PROMPT),
        }
    }

    /// Returns compiled-in defaults without checking the filesystem.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            planner: PLANNER_PROMPT.to_string(),
            summary: SUMMARY_PROMPT.to_string(),
            synthesis: SYNTHESIS_PROMPT.to_string(),
            citation: CITATION_PROMPT.to_string(),
        }
    }

    /// Writes the compiled-in default preambles to the given directory.
    ///
    /// Creates the directory if it does not exist. Existing files are
    /// **not** overwritten — use this for initial scaffolding only.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if directory creation or file writing fails.
    pub fn write_defaults(dir: &Path) -> std::io::Result<Vec<std::path::PathBuf>> {
        std::fs::create_dir_all(dir)?;

        let templates = [
            (PLANNER_FILENAME, PLANNER_PROMPT),
            (SUMMARY_FILENAME, SUMMARY_PROMPT),
            (SYNTHESIS_FILENAME, SYNTHESIS_PROMPT),
            (CITATION_FILENAME, CITATION_PROMPT),
        ];

        let mut written = Vec::new();
        for (filename, content) in &templates {
            let path = dir.join(filename);
            if !path.exists() {
                std::fs::write(&path, content)?;
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Returns the default prompt directory under the user's home.
    ///
    /// Returns `None` if the home directory cannot be determined.
    #[must_use]
    pub fn default_dir() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|h| h.join(DEFAULT_PROMPT_DIR))
    }
}

/// Builds the planning prompt asking for `width` numbered search tasks.
#[must_use]
pub fn build_planner_prompt(preamble: &str, query: &str, width: usize) -> String {
    format!(
        "{preamble}\n\nResearch question: {query}\n\n\
         Produce exactly {width} independent search tasks as a numbered list."
    )
}

/// Builds the summarization prompt for one sub-query and its context block.
#[must_use]
pub fn build_summary_prompt(preamble: &str, subquery: &str, context: &str) -> String {
    format!("{preamble}\n\nSearch task: {subquery}\n\nSearch results:\n{context}")
}

/// Builds the synthesis prompt from the joined sub-agent summaries.
#[must_use]
pub fn build_synthesis_prompt(preamble: &str, query: &str, summaries: &str) -> String {
    format!("{preamble}\n\nResearch question: {query}\n\nPartial summaries:\n\n{summaries}")
}

/// Builds the citation prompt embedding the report and numbered sources.
#[must_use]
pub fn build_citation_prompt(preamble: &str, report: &str, sources: &str) -> String {
    format!("{preamble}\n\nReport:\n{report}\n\nSources:\n{sources}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_planner_prompt() {
        let prompt = build_planner_prompt(PLANNER_PROMPT, "open source multi agent systems", 3);
        assert!(prompt.contains("independent search tasks"));
        assert!(prompt.contains("Research question: open source multi agent systems"));
        assert!(prompt.contains("exactly 3"));
    }

    #[test]
    fn test_build_summary_prompt() {
        let prompt = build_summary_prompt(SUMMARY_PROMPT, "tokio internals", "a (b): c");
        assert!(prompt.contains("Search task: tokio internals"));
        assert!(prompt.contains("Search results:\na (b): c"));
    }

    #[test]
    fn test_build_synthesis_prompt() {
        let prompt = build_synthesis_prompt(SYNTHESIS_PROMPT, "the question", "one\n\ntwo");
        assert!(prompt.contains("Research question: the question"));
        assert!(prompt.contains("Partial summaries:\n\none\n\ntwo"));
    }

    #[test]
    fn test_build_citation_prompt() {
        let prompt = build_citation_prompt(CITATION_PROMPT, "the report", "[1] a (b): c");
        assert!(prompt.contains("citation assistant"));
        assert!(prompt.contains("Report:\nthe report"));
        assert!(prompt.contains("Sources:\n[1] a (b): c"));
    }

    #[test]
    fn test_prompts_not_empty() {
        assert!(!PLANNER_PROMPT.is_empty());
        assert!(!SUMMARY_PROMPT.is_empty());
        assert!(!SYNTHESIS_PROMPT.is_empty());
        assert!(!CITATION_PROMPT.is_empty());
    }

    #[test]
    fn test_write_defaults_and_load() {
        let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
        let written = PromptSet::write_defaults(dir.path()).unwrap_or_default();
        assert_eq!(written.len(), 4);

        // Second write is a no-op; existing files are kept.
        let rewritten = PromptSet::write_defaults(dir.path()).unwrap_or_default();
        assert!(rewritten.is_empty());

        let prompts = PromptSet::load(Some(dir.path()));
        assert_eq!(prompts.planner, PLANNER_PROMPT);
        assert_eq!(prompts.citation, CITATION_PROMPT);
    }

    #[test]
    fn test_load_missing_dir_uses_defaults() {
        let prompts = PromptSet::load(Some(Path::new("/nonexistent/prompt/dir")));
        assert_eq!(prompts.summary, SUMMARY_PROMPT);
    }
}
