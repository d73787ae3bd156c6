//! Implementation of the `conductor init` command.

use tracing::{info, instrument};

use conductor_core::application::{ActionKind, InitOptions, InitOutcome, count_kind};

use crate::{
    cli::{GlobalArgs, InitArgs, OutputFormat},
    commands::{build_engine, render_action, resolve_dir, summary_line},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `conductor init` command.
#[instrument(skip_all)]
pub fn execute(
    args: InitArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let dir = resolve_dir(args.dir);
    let opts = InitOptions {
        force: args.force,
        full: args.full || config.defaults.full,
        deepscan: args.deepscan || config.defaults.deepscan,
        analyze: !args.no_analyze,
        yes: args.yes,
    };

    output.header("Conductor - documentation framework")?;
    output.print(&format!("Target directory: {}", dir.display()))?;
    if opts.deepscan && opts.analyze {
        output.info("Deep codebase analysis enabled; this may take a little while")?;
    }
    output.print("")?;

    info!(dir = %dir.display(), "init started");
    let outcome = build_engine(opts.yes).init(&dir, &opts).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&outcome).unwrap_or_else(|_| "{}".into()));
        return Ok(());
    }

    match outcome {
        InitOutcome::Blocked { existing } => {
            output.warning("Existing conductor files detected:")?;
            for file in &existing {
                output.print(&format!("   - {file}"))?;
            }
            output.print("")?;
            output.warning("These files would be overwritten. Use --force to proceed.")?;
            output.print("   Example: conductor init --force")?;
        }

        InitOutcome::Cancelled => {
            output.success("Operation cancelled. No files were modified.")?;
        }

        InitOutcome::Completed {
            actions,
            protected_preserved,
            analysis,
        } => {
            for action in &actions {
                render_action(action, &output)?;
            }
            if let Some(report) = &analysis {
                if !report.tech_stack.is_empty() {
                    output.print("")?;
                    output.info(&format!("Detected stack: {}", report.tech_stack.join(", ")))?;
                }
            }

            output.print("")?;
            output.success("Conductor framework initialized successfully!")?;
            output.print(&format!("   {}", summary_line(&actions)))?;

            if count_kind(&actions, &ActionKind::Created) > 0 {
                output.print("")?;
                output.print("Next steps:")?;
                output.print("1. Review and customize CLAUDE.md")?;
                output.print("2. Fill in the Critical Context section")?;
                output.print("3. Start documenting your architecture")?;
            }

            if protected_preserved && !args.force {
                output.print("")?;
                output.info("Existing CLAUDE.md detected - it was preserved.")?;
                output.print("To work best with Conductor, add this section to it:")?;
                output.print("")?;
                output.print("  ## Journal Update Requirements")?;
                output.print("  **IMPORTANT**: Update JOURNAL.md regularly throughout work sessions:")?;
                output.print("  - After completing any significant feature or fix")?;
                output.print("  - When encountering and resolving errors")?;
                output.print("  - At the end of each work session")?;
                output.print("  - When making architectural decisions")?;
                output.print("  - Format: What/Why/How/Issues/Result structure")?;
            }

            if !global.quiet {
                output.print("")?;
                output.print("To fill the docs with real project detail, ask your assistant to")?;
                output.print("review the codebase and update CLAUDE.md and CONDUCTOR.md.")?;
                output.print("For a security checkup, run: conductor checkup")?;
            }
        }
    }

    Ok(())
}
