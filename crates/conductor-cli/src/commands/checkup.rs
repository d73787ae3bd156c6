//! Implementation of the `conductor checkup` command.

use tracing::instrument;

use conductor_core::application::checkup::checkup_prompt;

use crate::{cli::CheckupArgs, error::CliResult, output::OutputManager};

/// Execute the `conductor checkup` command.
#[instrument(skip_all)]
pub fn execute(args: CheckupArgs, output: OutputManager) -> CliResult<()> {
    let scan_path = std::path::absolute(&args.path).unwrap_or_else(|_| args.path.clone());

    output.header("Conductor Security & Health Checkup")?;
    output.print(&format!("Target path: {}", scan_path.display()))?;
    output.print("")?;

    let prompt = checkup_prompt(&scan_path);
    output.boxed("Copy this prompt to your AI assistant:", &prompt)?;

    output.print("")?;
    output.print("Tips:")?;
    output.print("- This checkup is read-only and won't modify your code")?;
    output.print("- Only critical security issues will be reported")?;
    output.print("- Run this periodically to maintain code health")?;

    Ok(())
}
