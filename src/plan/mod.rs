//! Terraform plan summaries
//!
//! This module reads a JSON plan produced by `terraform show -json`,
//! validates it into a [`Plan`], and renders a plain-text change summary.
//!
//! # Example
//!
//! ```ignore
//! use plan_summary::plan::{PlanParser, PlanRenderer, TextRenderer};
//!
//! let plan = PlanParser::new().parse(&content)?;
//! let summary = TextRenderer::new().render(&plan);
//!
//! println!("{}", summary);
//! ```

mod error;
mod parser;
mod reader;
mod renderer;
mod types;
mod validator;

pub use error::{PlanError, PlanErrorKind, StructureDefect};
pub use parser::PlanParser;
pub use reader::PlanFileReader;
pub use renderer::{html_escape, PlanRenderer, TextRenderer};
pub use types::{ChangeAction, ChangeKind, Plan, PlanFile, PlanSummary, ResourceChange};
pub use validator::InputValidator;
