//! Renderers for parsed plans
//!
//! [`TextRenderer`] produces the plain-text change summary shown in CI logs
//! and job summaries. [`html_escape`] is shared with the job summary writer.

use super::types::{ChangeKind, Plan};

/// Trait for plan renderers
pub trait PlanRenderer {
    /// Render the parsed plan to a string
    fn render(&self, plan: &Plan) -> String;
}

/// Plain-text renderer grouping changes into created/updated/destroyed sections
pub struct TextRenderer;

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render one section; empty sections render nothing
    fn render_section(&self, plan: &Plan, kind: ChangeKind) -> String {
        let mut output = String::new();

        for resource in plan.changes_of(kind) {
            output.push_str(&format!(
                "  {} {} ({})\n",
                kind.symbol(),
                resource.address(),
                resource.actions_label()
            ));
        }

        if output.is_empty() {
            return output;
        }

        format!("{}\n{}\n", kind.section_title(), output)
    }
}

impl PlanRenderer for TextRenderer {
    fn render(&self, plan: &Plan) -> String {
        let summary = plan.summary();
        let mut output = String::new();

        if summary.has_changes() {
            output.push_str("Terraform will perform the following actions:\n\n");
        } else {
            output.push_str("No changes. Infrastructure is up-to-date.\n");
        }

        for kind in ChangeKind::PRIORITY {
            output.push_str(&self.render_section(plan, kind));
        }

        output.push_str(&format!("{}\n", summary));
        output
    }
}

/// Helper function to escape HTML special characters
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
