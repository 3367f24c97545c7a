//! Summarize Terraform JSON plans for GitHub Actions job summaries.
//!
//! The [`plan`] module holds the plan model, parser, renderer and input
//! checks. [`commands::SummarizeCommand`] wires them to the runner through
//! [`github::WorkflowEnvironment`].

pub mod commands;
pub mod context;
pub mod github;
pub mod output;
pub mod plan;
pub mod traits;
