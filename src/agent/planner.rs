//! Sub-query extraction from planner output.
//!
//! The planner model is asked for a numbered list of search tasks. Its
//! output is untrusted free text, so extraction is best-effort line
//! parsing with an explicit fallback: a run always proceeds with at
//! least the original query.

/// Parses numbered-list planner output into sub-queries.
///
/// A line is accepted when it contains a `'.'` separating a leading
/// ordinal from the task text and the text after the first `'.'` is
/// non-empty once trimmed. Accepted lines are taken in response order
/// and truncated to `width` items.
#[must_use]
pub fn parse_subqueries(content: &str, width: usize) -> Vec<String> {
    let mut tasks = Vec::new();
    for line in content.lines() {
        if tasks.len() == width {
            break;
        }
        let Some((_, rest)) = line.split_once('.') else {
            continue;
        };
        let task = rest.trim();
        if !task.is_empty() {
            tasks.push(task.to_string());
        }
    }
    tasks
}

/// Builds the plan for a research run from raw planner output.
///
/// Returns the sub-queries plus a flag indicating whether extraction
/// yielded nothing and the plan fell back to the original query.
/// Malformed planner output degrades the plan; it never fails the run.
#[must_use]
pub fn plan_with_fallback(content: &str, query: &str, width: usize) -> (Vec<String>, bool) {
    let subqueries = parse_subqueries(content, width);
    if subqueries.is_empty() {
        (vec![query.to_string()], true)
    } else {
        (subqueries, false)
    }
}
