use crate::context::Context;
use crate::github::{CHANGES_SUMMARY_OUTPUT, WorkflowEnvironment};
use crate::plan::{InputValidator, PlanFileReader, PlanParser, PlanRenderer, TextRenderer};
use anyhow::Result;

/// Handles the plan summary run: validate, read, parse, render, publish
pub struct SummarizeCommand;

impl SummarizeCommand {
    /// Execute the summary pipeline and return the rendered report.
    ///
    /// Plan errors are returned unwrapped so their message reaches the
    /// workflow log verbatim.
    pub fn execute(
        ctx: &Context,
        workflow: &WorkflowEnvironment,
        plan_file_path: &str,
    ) -> Result<String> {
        ctx.output
            .info(&format!("Processing plan file: {}", plan_file_path));

        ctx.output.info("Validating plan file path...");
        InputValidator::new(ctx.fs.clone()).validate_plan_file_path(plan_file_path)?;
        ctx.output.success("Plan file path is valid");

        ctx.output.info("Reading plan file...");
        let plan_file = PlanFileReader::new(ctx.fs.clone()).read(plan_file_path)?;
        ctx.output.success(&format!(
            "Successfully read plan file ({} bytes)",
            plan_file.content.len()
        ));

        ctx.output.info("Parsing plan file...");
        let plan = PlanParser::new().parse_file(&plan_file)?;
        ctx.output.success(&format!(
            "Successfully parsed plan ({} resource changes)",
            plan.resource_changes().len()
        ));

        ctx.output.info("Formatting plan summary...");
        let report = TextRenderer::new().render(&plan);
        ctx.output.success("Successfully formatted plan summary");

        Self::publish(ctx, workflow, &report)?;

        ctx.output.success("Action completed successfully");

        Ok(report)
    }

    /// Send the report to the job summary and step output, or to stdout
    /// when not running under Actions
    fn publish(ctx: &Context, workflow: &WorkflowEnvironment, report: &str) -> Result<()> {
        if !workflow.write_step_summary(&*ctx.fs, report)? {
            ctx.output
                .dimmed("GITHUB_STEP_SUMMARY is not set, printing summary to stdout");
            ctx.output.plain(report);
        }

        if !workflow.set_output(&*ctx.fs, CHANGES_SUMMARY_OUTPUT, report)? {
            ctx.output.warning(&format!(
                "GITHUB_OUTPUT is not set, skipping step output '{}'",
                CHANGES_SUMMARY_OUTPUT
            ));
        }

        Ok(())
    }
}
