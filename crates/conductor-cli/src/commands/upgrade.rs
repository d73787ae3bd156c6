//! Implementation of the `conductor upgrade` command (step 2/3).

use tracing::instrument;

use conductor_core::application::{
    ActionKind, InitOutcome, UpgradeOptions, UpgradeOutcome, count_kind,
};

use crate::{
    cli::UpgradeArgs,
    commands::{build_engine, render_action, resolve_dir},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `conductor upgrade` command.
#[instrument(skip_all)]
pub fn execute(args: UpgradeArgs, output: OutputManager) -> CliResult<()> {
    let dir = resolve_dir(args.dir);
    let opts = UpgradeOptions {
        clean: args.clean,
        force: args.force,
        full: args.full,
        yes: args.yes,
    };

    output.header("Conductor Clean Upgrade (Step 2/3)")?;
    output.warning("This command DELETES scaffold files. Ensure you have backups!")?;
    output.print("")?;

    let outcome = build_engine(opts.yes)
        .clean_upgrade(&dir, &opts)
        .map_err(CliError::Core)?;

    match outcome {
        UpgradeOutcome::CleanRequired => {
            output.warning("You must use the --clean flag for safety:")?;
            output.print("  conductor upgrade --clean")?;
            output.print("")?;
            output.print("This ensures you understand this will delete scaffold files.")?;
        }

        UpgradeOutcome::BackupMissing => {
            output.warning("No backup found! Run backup first:")?;
            output.print("  conductor backup")?;
            output.print("")?;
            output.print("Or use --force if you really want to proceed without backup.")?;
        }

        UpgradeOutcome::Cancelled => {
            output.success("Operation cancelled.")?;
        }

        UpgradeOutcome::Completed {
            had_backup,
            actions,
            init,
        } => {
            if !had_backup {
                output.warning("NO BACKUP FOUND - proceeding without one (--force)")?;
                output.print("")?;
            }

            output.print("Removing old Conductor files...")?;
            for action in &actions {
                render_action(action, &output)?;
            }

            output.print("")?;
            output.print("Installing fresh templates...")?;
            let deleted = count_kind(&actions, &ActionKind::Deleted);
            if let InitOutcome::Completed { actions: init_actions, .. } = init.as_ref() {
                for action in init_actions {
                    render_action(action, &output)?;
                }
            }

            output.print("")?;
            output.success("Clean installation completed!")?;
            output.print(&format!(
                "Deleted {deleted} old file(s), installed fresh templates."
            ))?;
            output.print("")?;
            output.print("Final step:")?;
            output.print("  conductor restore")?;
        }
    }

    Ok(())
}
