//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

// Allow certain patterns that improve readability in CLI output formatting
#![allow(clippy::format_push_string)]

use std::path::Path;
use std::sync::Arc;

use crate::agent::client::create_provider;
use crate::agent::config::ResearchConfig;
use crate::agent::orchestrator::Orchestrator;
use crate::agent::prompt::PromptSet;
use crate::cli::output::OutputFormat;
use crate::cli::parser::{Cli, Commands};
use crate::error::{CommandError, Result};
use crate::search::BraveSearch;

/// Parameters for the research command.
#[derive(Debug, Clone)]
pub struct ResearchParams<'a> {
    /// The research question.
    pub query: &'a str,
    /// Number of sub-queries to plan and dispatch concurrently.
    pub fan_out: usize,
    /// Search results requested per sub-query.
    pub count: usize,
    /// Text-generation model identifier.
    pub model: Option<&'a str>,
    /// Directory containing prompt template files.
    pub prompt_dir: Option<&'a Path>,
    /// Include the run's step trace in the output.
    pub verbose: bool,
}

/// Executes the CLI command.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);

    match &cli.command {
        Commands::Research {
            query,
            fan_out,
            count,
            model,
            prompt_dir,
        } => {
            let params = ResearchParams {
                query,
                fan_out: *fan_out,
                count: *count,
                model: model.as_deref(),
                prompt_dir: prompt_dir.as_deref(),
                verbose: cli.verbose,
            };
            cmd_research(&params, format)
        }
        Commands::InitPrompts { dir } => cmd_init_prompts(dir.as_deref(), format),
    }
}

fn cmd_research(params: &ResearchParams<'_>, format: OutputFormat) -> Result<String> {
    // Build configuration from env + CLI overrides
    let mut builder = ResearchConfig::builder()
        .from_env()
        .fan_out(params.fan_out)
        .search_count(params.count);
    if let Some(model) = params.model {
        builder = builder.model(model);
    }
    if let Some(dir) = params.prompt_dir {
        builder = builder.prompt_dir(dir);
    }
    let config = builder.build();

    let search = BraveSearch::new(&config).map_err(|e| {
        CommandError::ExecutionFailed(format!("Search provider error: {e}"))
    })?;
    let provider = create_provider(&config).map_err(|e| {
        CommandError::ExecutionFailed(format!("Provider creation failed: {e}"))
    })?;
    let orchestrator = Orchestrator::new(Arc::new(search), Arc::from(provider), config);

    // Create tokio runtime as sync/async bridge
    let rt = tokio::runtime::Runtime::new().map_err(|e| {
        CommandError::ExecutionFailed(format!("Failed to create async runtime: {e}"))
    })?;

    let outcome = rt
        .block_on(orchestrator.run(params.query))
        .map_err(|e| CommandError::ExecutionFailed(format!("Research failed: {e}")))?;

    match format {
        OutputFormat::Text => {
            let mut output = outcome.report;
            output.push_str(&format!(
                "\n\n---\nSub-queries: {} | Sources: {} | Time: {:.1}s",
                outcome.subqueries.len(),
                outcome.sources_consulted,
                outcome.elapsed.as_secs_f64()
            ));
            if outcome.plan_degraded {
                output.push_str(
                    "\nPlanner output was unusable; fell back to the original query.",
                );
            }
            if params.verbose {
                for entry in outcome.log.entries() {
                    output.push_str(&format!("\n[{}] {}", entry.role, entry.content));
                }
            }
            Ok(output)
        }
        OutputFormat::Json => serde_json::to_string_pretty(&outcome).map_err(|e| {
            CommandError::OutputFormat(format!("JSON serialization failed: {e}")).into()
        }),
    }
}

fn cmd_init_prompts(dir: Option<&Path>, format: OutputFormat) -> Result<String> {
    let target_dir = dir
        .map(std::path::PathBuf::from)
        .or_else(PromptSet::default_dir)
        .ok_or_else(|| {
            CommandError::ExecutionFailed(
                "Could not determine home directory for default prompt path".to_string(),
            )
        })?;

    let written = PromptSet::write_defaults(&target_dir).map_err(|e| {
        CommandError::ExecutionFailed(format!("Failed to write prompt templates: {e}"))
    })?;

    match format {
        OutputFormat::Text => {
            if written.is_empty() {
                Ok(format!(
                    "All prompt templates already exist in: {}\n",
                    target_dir.display()
                ))
            } else {
                let mut output = format!(
                    "Wrote {} prompt template(s) to: {}\n",
                    written.len(),
                    target_dir.display()
                );
                for path in &written {
                    output.push_str(&format!(
                        "  {}\n",
                        path.file_name()
                            .and_then(|n| n.to_str())
                            .unwrap_or("unknown")
                    ));
                }
                output.push_str("\nEdit these files to customize agent instruction preambles.\n");
                Ok(output)
            }
        }
        OutputFormat::Json => {
            let json = serde_json::json!({
                "directory": target_dir.to_string_lossy(),
                "written": written.iter().map(|p| p.to_string_lossy().into_owned()).collect::<Vec<_>>(),
                "count": written.len()
            });
            Ok(format.to_json(&json))
        }
    }
}
