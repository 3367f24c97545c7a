use clap::Parser;
use plan_summary::commands::SummarizeCommand;
use plan_summary::context::Context;
use plan_summary::github::{self, WorkflowEnvironment};

#[derive(Parser)]
#[command(name = "plan-summary")]
#[command(about = "Summarize a Terraform JSON plan for CI job summaries", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the plan JSON (`terraform show -json plan.out > plan.json`)
    #[arg(
        value_name = "PLAN_FILE",
        env = "INPUT_PLAN-FILE-PATH",
        default_value = "",
        hide_default_value = true
    )]
    plan_file_path: String,
}

fn main() {
    let cli = Cli::parse();
    let ctx = Context::new();
    let workflow = WorkflowEnvironment::from_env();

    // Action inputs are trimmed by the runner toolkit; do the same here
    let plan_file_path = cli.plan_file_path.trim();

    if let Err(err) = SummarizeCommand::execute(&ctx, &workflow, plan_file_path) {
        let message = format!("{:#}", err);
        ctx.output.error(&message);
        ctx.output.plain(&github::error_command(&message));
        std::process::exit(1);
    }
}
