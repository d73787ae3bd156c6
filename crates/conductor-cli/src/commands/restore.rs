//! Implementation of the `conductor restore` command (step 3/3).

use tracing::instrument;

use conductor_core::application::{ActionKind, RestoreOutcome, count_kind};

use crate::{
    cli::RestoreArgs,
    commands::{build_engine, render_action, resolve_dir},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `conductor restore` command.
#[instrument(skip_all)]
pub fn execute(args: RestoreArgs, output: OutputManager) -> CliResult<()> {
    let dir = resolve_dir(args.dir);

    output.header("Conductor Restore (Step 3/3)")?;
    output.print("Restoring your work...")?;
    output.print("")?;

    // Restore never prompts; it is the undo step and always wins.
    let outcome = build_engine(true).restore(&dir).map_err(CliError::Core)?;

    match outcome {
        RestoreOutcome::BackupMissing => {
            output.warning("No backup found at ./conductor-backup/")?;
            output.print("   Run \"conductor backup\" first.")?;
        }

        RestoreOutcome::Completed {
            actions,
            journal_annotated,
            backup_removed,
        } => {
            for action in &actions {
                render_action(action, &output)?;
            }
            if journal_annotated {
                output.print("[*] Added upgrade entry to JOURNAL.md")?;
            }
            if backup_removed {
                output.print("[*] Cleaned up backup folder")?;
            } else {
                output.warning("Could not remove ./conductor-backup/ - delete it manually.")?;
            }

            let restored = count_kind(&actions, &ActionKind::Restored);
            output.print("")?;
            output.success("Upgrade completed successfully!")?;
            output.print(&format!("Restored {restored} file(s). Your data is back!"))?;
            output.print("")?;
            output.print("Your customizations and history have been preserved.")?;
        }
    }

    Ok(())
}
