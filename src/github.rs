//! GitHub Actions workflow plumbing
//!
//! Writes the job step summary and step outputs through the environment
//! files the runner provides, and formats `::error::` workflow commands.

use anyhow::{Context as _, Result};
use std::path::PathBuf;
use uuid::Uuid;

use crate::plan::html_escape;
use crate::traits::FileSystem;

/// Heading of the job summary section
pub const SUMMARY_HEADING: &str = "Infrastructure Changes";

/// Name of the step output carrying the rendered summary
pub const CHANGES_SUMMARY_OUTPUT: &str = "changes-summary";

/// Environment files exposed by the Actions runner
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowEnvironment {
    /// `GITHUB_STEP_SUMMARY`
    pub step_summary: Option<PathBuf>,

    /// `GITHUB_OUTPUT`
    pub output: Option<PathBuf>,
}

impl WorkflowEnvironment {
    pub fn new(step_summary: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            step_summary,
            output,
        }
    }

    /// Read the runner environment; unset or empty variables mean "not in Actions"
    pub fn from_env() -> Self {
        Self::new(env_path("GITHUB_STEP_SUMMARY"), env_path("GITHUB_OUTPUT"))
    }

    /// Append the report to the job summary.
    ///
    /// Returns false when there is no summary file to write to.
    pub fn write_step_summary(&self, fs: &dyn FileSystem, report: &str) -> Result<bool> {
        let Some(path) = &self.step_summary else {
            return Ok(false);
        };

        fs.append(path, &summary_block(report))
            .with_context(|| format!("Failed to write job summary: {}", path.display()))?;

        Ok(true)
    }

    /// Set a step output. Returns false when there is no output file.
    pub fn set_output(&self, fs: &dyn FileSystem, name: &str, value: &str) -> Result<bool> {
        let Some(path) = &self.output else {
            return Ok(false);
        };

        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        let entry = output_entry(name, value, &delimiter)?;

        fs.append(path, &entry)
            .with_context(|| format!("Failed to write step output: {}", path.display()))?;

        Ok(true)
    }
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Job summary markup: a heading and the report as a terraform code block
pub fn summary_block(report: &str) -> String {
    format!(
        "<h1>{}</h1>\n<pre lang=\"terraform\"><code>{}</code></pre>\n",
        SUMMARY_HEADING,
        html_escape(report)
    )
}

/// Multiline `GITHUB_OUTPUT` entry using heredoc-style delimiters
pub fn output_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        anyhow::bail!(
            "Unexpected input: name should not contain the delimiter \"{}\"",
            delimiter
        );
    }

    if value.contains(delimiter) {
        anyhow::bail!(
            "Unexpected input: value should not contain the delimiter \"{}\"",
            delimiter
        );
    }

    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

/// `::error::` workflow command marking the step as failed with `message`
pub fn error_command(message: &str) -> String {
    format!("::error::{}\n", escape_data(message))
}

/// Escape a workflow command payload so it stays on one line
fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
