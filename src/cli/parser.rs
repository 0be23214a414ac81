//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::agent::config::{DEFAULT_FAN_OUT, DEFAULT_SEARCH_COUNT};

/// Scour: multi-agent web research from the command line.
///
/// Decomposes a research question into independent search tasks, runs
/// them concurrently against the Brave Search API, and synthesizes a
/// cited report with Gemini.
#[derive(Parser, Debug)]
#[command(name = "scour-rs")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Research a question end to end.
    ///
    /// Plans sub-queries, fans out concurrent search-and-summarize
    /// sub-agents, and synthesizes a cited report. Requires
    /// `BRAVE_SEARCH_API_KEY` and `GEMINI_API_KEY`.
    #[command(after_help = r#"Examples:
  scour-rs research "open source multi agent systems"
  scour-rs research "rust async runtimes compared" --fan-out 4
  scour-rs research "solid state battery startups" --count 8 --verbose
  scour-rs --format json research "weather model benchmarks" | jq -r '.report'
"#)]
    Research {
        /// The research question.
        query: String,

        /// Number of sub-queries to plan and dispatch concurrently.
        #[arg(long, default_value_t = DEFAULT_FAN_OUT)]
        fan_out: usize,

        /// Search results requested per sub-query.
        #[arg(long, default_value_t = DEFAULT_SEARCH_COUNT)]
        count: usize,

        /// Text-generation model identifier.
        #[arg(long)]
        model: Option<String>,

        /// Directory containing prompt template files.
        #[arg(long)]
        prompt_dir: Option<PathBuf>,
    },

    /// Write default prompt templates to disk for customization.
    ///
    /// Creates markdown template files in the prompt directory so users
    /// can customize agent instruction preambles without recompiling.
    #[command(name = "init-prompts")]
    #[command(after_help = r#"Examples:
  scour-rs init-prompts                          # Write to ~/.config/scour-rs/prompts/
  scour-rs init-prompts --dir ./my-prompts       # Write to custom directory
"#)]
    InitPrompts {
        /// Target directory for prompt templates.
        ///
        /// Defaults to `~/.config/scour-rs/prompts/`.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}
