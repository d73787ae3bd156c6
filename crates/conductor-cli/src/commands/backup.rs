//! Implementation of the `conductor backup` command (step 1/3).

use tracing::instrument;

use conductor_core::application::{ActionKind, BackupOutcome, count_kind};

use crate::{
    cli::BackupArgs,
    commands::{build_engine, render_action, resolve_dir},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `conductor backup` command.
#[instrument(skip_all)]
pub fn execute(args: BackupArgs, output: OutputManager) -> CliResult<()> {
    let dir = resolve_dir(args.dir);

    output.header("Conductor Backup (Step 1/3)")?;
    output.print("Safeguarding your work...")?;
    output.print("")?;

    // Backup has no prompts; the engine's confirm port is never consulted.
    let outcome = build_engine(true).backup(&dir).map_err(CliError::Core)?;

    match outcome {
        BackupOutcome::NothingToBackup => {
            output.warning("No Conductor files found in this directory.")?;
            output.print("   Nothing to backup. Run \"conductor init\" to initialize.")?;
        }

        BackupOutcome::AlreadyBackedUp => {
            output.warning("Backup already exists at ./conductor-backup/")?;
            output.print("   Your data is already safely backed up!")?;
            output.print("")?;
            output.success("Ready for Step 2: conductor upgrade --clean")?;
        }

        BackupOutcome::Completed { actions } => {
            for action in &actions {
                render_action(action, &output)?;
            }

            let backed_up = count_kind(&actions, &ActionKind::BackedUp);
            output.print("")?;
            if backed_up > 0 {
                output.success("Backup completed successfully!")?;
                output.print(&format!(
                    "{backed_up} file(s) safely backed up to ./conductor-backup/"
                ))?;
            } else {
                output.success("Backup folder created (no files to backup)")?;
            }

            output.print("")?;
            output.print("Next step:")?;
            output.print("  conductor upgrade --clean")?;
        }
    }

    Ok(())
}
