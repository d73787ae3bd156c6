//! Lifecycle Engine - the main application orchestrator.
//!
//! One engine, four operations over the same scaffold file set:
//!
//! 1. **Init** - lay down templates, optionally analyze and patch
//! 2. **Backup** - copy the two user documents into the BackupSet
//! 3. **CleanUpgrade** - delete the scaffold, reinstall fresh templates
//! 4. **Restore** - copy the user documents back, annotate the journal
//!
//! Operations return outcome values rather than printing; the CLI renders
//! them. Precondition failures (existing files, missing backup, missing
//! `--clean`) are outcome variants and never mutate the target. Only
//! genuine I/O failures surface as errors.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ports::{Analyzer, Confirm, Filesystem, ScanDepth, TemplateStore},
        report::AnalysisReport,
        session::RunSession,
    },
    domain::{
        journal, placeholder,
        template_set::{
            self, ARCHITECTURE_FILE, BACKUP_DIR, BACKUP_FILES, BUILD_FILE, JOURNAL_FILE,
            PROTECTED_FILE,
        },
    },
    error::ConductorResult,
};

// ── Options ───────────────────────────────────────────────────────────────────

/// Flags for [`LifecycleEngine::init`].
#[derive(Debug, Clone, Copy)]
pub struct InitOptions {
    /// Overwrite existing files (after confirmation).
    pub force: bool,
    /// Install the full fourteen-path scaffold instead of the core set.
    pub full: bool,
    /// Deep codebase analysis instead of shallow.
    pub deepscan: bool,
    /// Run the analyzer at all.
    pub analyze: bool,
    /// Skip interactive confirmation.
    pub yes: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            force: false,
            full: false,
            deepscan: false,
            analyze: true,
            yes: false,
        }
    }
}

/// Flags for [`LifecycleEngine::clean_upgrade`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeOptions {
    /// Explicit destructive-intent flag; nothing happens without it.
    pub clean: bool,
    /// Proceed without a BackupSet.
    pub force: bool,
    /// Reinstall the full scaffold.
    pub full: bool,
    /// Skip interactive confirmation.
    pub yes: bool,
}

// ── Per-file action log ───────────────────────────────────────────────────────

/// What happened to one file during an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum ActionKind {
    Created,
    Overwritten,
    Skipped,
    Patched,
    Deleted,
    BackedUp,
    Restored,
    Failed(String),
}

/// One entry in the per-file outcome log - the recovery aid for partially
/// completed operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileAction {
    pub rel_path: String,
    #[serde(flatten)]
    pub kind: ActionKind,
}

impl FileAction {
    fn new(rel_path: &str, kind: ActionKind) -> Self {
        Self {
            rel_path: rel_path.to_string(),
            kind,
        }
    }
}

// ── Outcomes ──────────────────────────────────────────────────────────────────

/// Result of [`LifecycleEngine::init`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum InitOutcome {
    /// Non-protected scaffold files already exist and `force` was not set.
    /// Nothing was written.
    Blocked { existing: Vec<String> },
    /// The user declined the force-overwrite confirmation.
    Cancelled,
    /// Templates were processed; see the per-file log.
    Completed {
        actions: Vec<FileAction>,
        /// The protected guidance document existed and was left untouched.
        protected_preserved: bool,
        analysis: Option<AnalysisReport>,
    },
}

/// Result of [`LifecycleEngine::backup`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum BackupOutcome {
    /// No recognized scaffold files in the directory.
    NothingToBackup,
    /// A BackupSet already exists; it was not touched.
    AlreadyBackedUp,
    /// The BackupSet was created; zero backed-up files is still a success.
    Completed { actions: Vec<FileAction> },
}

/// Result of [`LifecycleEngine::clean_upgrade`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum UpgradeOutcome {
    /// `--clean` was not given; nothing was touched.
    CleanRequired,
    /// No BackupSet and no `--force`; nothing was touched.
    BackupMissing,
    /// The user declined the confirmation.
    Cancelled,
    /// Old files deleted (per-file log) and fresh templates installed.
    Completed {
        had_backup: bool,
        actions: Vec<FileAction>,
        init: Box<InitOutcome>,
    },
}

/// Result of [`LifecycleEngine::restore`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RestoreOutcome {
    /// No BackupSet to restore from; nothing was touched.
    BackupMissing,
    /// Copy-back attempted for every backed-up file.
    Completed {
        actions: Vec<FileAction>,
        /// The upgrade entry was inserted into the restored journal.
        journal_annotated: bool,
        /// The BackupSet directory was removed afterwards.
        backup_removed: bool,
    },
}

// ── Engine ────────────────────────────────────────────────────────────────────

/// Orchestrates the scaffold file lifecycle over injected ports.
pub struct LifecycleEngine {
    templates: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
    analyzer: Box<dyn Analyzer>,
    confirm: Box<dyn Confirm>,
    version: String,
}

impl LifecycleEngine {
    /// Create an engine with the given adapters, stamping documents with
    /// this crate's version.
    pub fn new(
        templates: Box<dyn TemplateStore>,
        filesystem: Box<dyn Filesystem>,
        analyzer: Box<dyn Analyzer>,
        confirm: Box<dyn Confirm>,
    ) -> Self {
        Self {
            templates,
            filesystem,
            analyzer,
            confirm,
            version: crate::VERSION.to_string(),
        }
    }

    /// Override the stamped version (the CLI passes its own).
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    // ── Init ──────────────────────────────────────────────────────────────

    /// Initialize the documentation scaffold in `target`.
    #[instrument(skip_all, fields(target = %target.display(), force = opts.force, full = opts.full))]
    pub fn init(&self, target: &Path, opts: &InitOptions) -> ConductorResult<InitOutcome> {
        self.filesystem.create_dir_all(target)?;

        let mut session = RunSession::new(target, opts.force);
        debug!(session = %session.id(), "init session started");

        let existing = self.existing_scaffold_files(target, opts.full);
        let protected_exists = self.filesystem.exists(&target.join(PROTECTED_FILE));

        // The protected file never blocks the run; everything else does.
        let blocking: Vec<String> = existing
            .iter()
            .filter(|p| p.as_str() != PROTECTED_FILE)
            .cloned()
            .collect();

        if !blocking.is_empty() && !opts.force {
            info!(count = blocking.len(), "init blocked by existing files");
            return Ok(InitOutcome::Blocked { existing: blocking });
        }

        if opts.force && (protected_exists || !existing.is_empty()) && !opts.yes {
            let prompt = overwrite_prompt(target, &existing, protected_exists);
            if !self.confirm.confirm(&prompt)? {
                info!("force init cancelled at confirmation");
                return Ok(InitOutcome::Cancelled);
            }
        }

        let mut actions = Vec::new();
        let mut protected_preserved = false;

        for template in template_set::active(opts.full) {
            let dest = target.join(template.rel_path);
            let exists = self.filesystem.exists(&dest);

            if exists && !opts.force {
                if template.protected {
                    protected_preserved = true;
                }
                actions.push(FileAction::new(template.rel_path, ActionKind::Skipped));
                continue;
            }

            if let Some(parent) = dest.parent() {
                self.filesystem.create_dir_all(parent)?;
            }

            let mut body = self.templates.body(template.rel_path)?;
            if template_set::is_versioned(template.rel_path) {
                if let Some(stamped) = placeholder::rewrite_version_marker(&body, &self.version) {
                    body = stamped;
                }
            }
            self.filesystem.write_file(&dest, &body)?;

            if exists {
                actions.push(FileAction::new(template.rel_path, ActionKind::Overwritten));
            } else {
                session.record_created(template.rel_path);
                actions.push(FileAction::new(template.rel_path, ActionKind::Created));
            }
        }

        let analysis = if opts.analyze {
            let depth = if opts.deepscan {
                ScanDepth::Deep
            } else {
                ScanDepth::Shallow
            };
            let report = self.analyzer.analyze(target, depth)?;
            self.apply_patches(target, &report, &session, &mut actions)?;
            Some(report)
        } else {
            None
        };

        self.write_journal(target, &mut session, opts.force, &mut actions)?;

        info!(
            created = actions.iter().filter(|a| a.kind == ActionKind::Created).count(),
            skipped = actions.iter().filter(|a| a.kind == ActionKind::Skipped).count(),
            "init completed"
        );
        Ok(InitOutcome::Completed {
            actions,
            protected_preserved,
            analysis,
        })
    }

    // ── Backup ────────────────────────────────────────────────────────────

    /// Step 1/3: copy the journal and guidance documents into the BackupSet.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn backup(&self, target: &Path) -> ConductorResult<BackupOutcome> {
        let has_scaffold = template_set::recognized()
            .iter()
            .any(|f| self.filesystem.exists(&target.join(f)));
        if !has_scaffold {
            info!("no scaffold files found, nothing to backup");
            return Ok(BackupOutcome::NothingToBackup);
        }

        let backup_dir = target.join(BACKUP_DIR);
        if self.filesystem.exists(&backup_dir) {
            info!("backup already exists, refusing to clobber it");
            return Ok(BackupOutcome::AlreadyBackedUp);
        }

        self.filesystem.create_dir_all(&backup_dir)?;

        let mut actions = Vec::new();
        for file in BACKUP_FILES {
            let source = target.join(file);
            if !self.filesystem.exists(&source) {
                actions.push(FileAction::new(file, ActionKind::Skipped));
                continue;
            }
            match self.filesystem.copy_file(&source, &backup_dir.join(file)) {
                Ok(()) => actions.push(FileAction::new(file, ActionKind::BackedUp)),
                Err(e) => {
                    warn!(file, error = %e, "backup copy failed");
                    actions.push(FileAction::new(file, ActionKind::Failed(e.to_string())));
                }
            }
        }

        info!(
            backed_up = actions.iter().filter(|a| a.kind == ActionKind::BackedUp).count(),
            "backup completed"
        );
        Ok(BackupOutcome::Completed { actions })
    }

    // ── CleanUpgrade ──────────────────────────────────────────────────────

    /// Step 2/3: delete the existing scaffold and reinstall fresh templates.
    #[instrument(skip_all, fields(target = %target.display(), clean = opts.clean, force = opts.force))]
    pub fn clean_upgrade(
        &self,
        target: &Path,
        opts: &UpgradeOptions,
    ) -> ConductorResult<UpgradeOutcome> {
        if !opts.clean {
            return Ok(UpgradeOutcome::CleanRequired);
        }

        let had_backup = self.filesystem.exists(&target.join(BACKUP_DIR));
        if !had_backup && !opts.force {
            info!("no backup found, refusing to delete scaffold");
            return Ok(UpgradeOutcome::BackupMissing);
        }

        if !opts.yes {
            let prompt = upgrade_prompt(target, had_backup);
            if !self.confirm.confirm(&prompt)? {
                info!("clean upgrade cancelled at confirmation");
                return Ok(UpgradeOutcome::Cancelled);
            }
        }

        // Delete each scaffold path independently; one failure must not
        // strand the rest of the batch.
        let mut actions = Vec::new();
        for rel_path in template_set::removal_set() {
            let path = target.join(rel_path);
            if !self.filesystem.exists(&path) {
                continue;
            }
            let result = if self.filesystem.is_dir(&path) {
                self.filesystem.remove_dir_all(&path)
            } else {
                self.filesystem.remove_file(&path)
            };
            match result {
                Ok(()) => actions.push(FileAction::new(rel_path, ActionKind::Deleted)),
                Err(e) => {
                    warn!(rel_path, error = %e, "delete failed");
                    actions.push(FileAction::new(rel_path, ActionKind::Failed(e.to_string())));
                }
            }
        }

        // Fresh install: already confirmed, analysis deferred to restore.
        let init = self.init(
            target,
            &InitOptions {
                force: true,
                full: opts.full,
                deepscan: false,
                analyze: false,
                yes: true,
            },
        )?;

        info!(
            deleted = actions.iter().filter(|a| a.kind == ActionKind::Deleted).count(),
            "clean upgrade completed"
        );
        Ok(UpgradeOutcome::Completed {
            had_backup,
            actions,
            init: Box::new(init),
        })
    }

    // ── Restore ───────────────────────────────────────────────────────────

    /// Step 3/3: copy the user documents back and consume the BackupSet.
    #[instrument(skip_all, fields(target = %target.display()))]
    pub fn restore(&self, target: &Path) -> ConductorResult<RestoreOutcome> {
        let backup_dir = target.join(BACKUP_DIR);
        if !self.filesystem.exists(&backup_dir) {
            info!("no backup found, nothing to restore");
            return Ok(RestoreOutcome::BackupMissing);
        }

        let mut actions = Vec::new();
        let mut journal_restored = false;
        for file in BACKUP_FILES {
            let source = backup_dir.join(file);
            if !self.filesystem.exists(&source) {
                actions.push(FileAction::new(file, ActionKind::Skipped));
                continue;
            }
            // Restore always wins over the freshly-templated placeholder.
            match self.filesystem.copy_file(&source, &target.join(file)) {
                Ok(()) => {
                    if file == JOURNAL_FILE {
                        journal_restored = true;
                    }
                    actions.push(FileAction::new(file, ActionKind::Restored));
                }
                Err(e) => {
                    warn!(file, error = %e, "restore copy failed");
                    actions.push(FileAction::new(file, ActionKind::Failed(e.to_string())));
                }
            }
        }

        let journal_annotated = if journal_restored {
            self.annotate_journal(target)
        } else {
            false
        };

        // Data safety is already achieved; a stuck backup dir is a warning.
        let backup_removed = match self.filesystem.remove_dir_all(&backup_dir) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "could not remove backup directory");
                false
            }
        };

        info!(
            restored = actions.iter().filter(|a| a.kind == ActionKind::Restored).count(),
            journal_annotated,
            "restore completed"
        );
        Ok(RestoreOutcome::Completed {
            actions,
            journal_annotated,
            backup_removed,
        })
    }

    // ── Internal helpers ──────────────────────────────────────────────────

    /// Scaffold files from the check set that exist in `target`.
    fn existing_scaffold_files(&self, target: &Path, full: bool) -> Vec<String> {
        template_set::check_set(full)
            .into_iter()
            .filter(|rel_path| self.filesystem.exists(&target.join(rel_path)))
            .map(str::to_string)
            .collect()
    }

    /// Patch analysis results into eligible documents.
    ///
    /// Eligibility is decided solely by [`RunSession::may_patch`]; a marker
    /// that is absent from a document leaves it untouched.
    fn apply_patches(
        &self,
        target: &Path,
        report: &AnalysisReport,
        session: &RunSession,
        actions: &mut Vec<FileAction>,
    ) -> ConductorResult<()> {
        if session.may_patch(PROTECTED_FILE) {
            let patches = [
                (placeholder::TECH_STACK_MARKER, report.tech_stack_line()),
                (placeholder::MAIN_FILE_MARKER, report.main_file_line()),
                (placeholder::CORE_MECHANIC_MARKER, report.core_mechanic_line()),
            ];
            if self.patch_lines(&target.join(PROTECTED_FILE), &patches)? {
                actions.push(FileAction::new(PROTECTED_FILE, ActionKind::Patched));
            }
        }

        let Some(deep) = &report.deep else {
            return Ok(());
        };

        if session.may_patch(ARCHITECTURE_FILE) {
            let path = target.join(ARCHITECTURE_FILE);
            if self.filesystem.exists(&path) {
                let content = self.filesystem.read_to_string(&path)?;
                if let Some(patched) = placeholder::replace_section(
                    &content,
                    placeholder::TECH_STACK_HEADING,
                    &deep.tech_stack_section(),
                ) {
                    self.filesystem.write_file(&path, &patched)?;
                    actions.push(FileAction::new(ARCHITECTURE_FILE, ActionKind::Patched));
                }
            }
        }

        if session.may_patch(BUILD_FILE) && !deep.build_scripts.is_empty() {
            let path = target.join(BUILD_FILE);
            if self.filesystem.exists(&path) {
                let content = self.filesystem.read_to_string(&path)?;
                let patched = placeholder::replace_or_append_section(
                    &content,
                    placeholder::SCRIPTS_HEADING,
                    &deep.scripts_section(),
                );
                self.filesystem.write_file(&path, &patched)?;
                actions.push(FileAction::new(BUILD_FILE, ActionKind::Patched));
            }
        }

        Ok(())
    }

    /// Apply replace-first line patches to one document. Returns whether
    /// anything changed.
    fn patch_lines(&self, path: &Path, patches: &[(&str, String)]) -> ConductorResult<bool> {
        if !self.filesystem.exists(path) {
            return Ok(false);
        }
        let mut content = self.filesystem.read_to_string(path)?;
        let mut changed = false;
        for (marker, replacement) in patches {
            if let Some(next) = placeholder::replace_first(&content, marker, replacement) {
                content = next;
                changed = true;
            }
        }
        if changed {
            self.filesystem.write_file(path, &content)?;
        }
        Ok(changed)
    }

    /// Generate the initial journal unless one exists (and force is off).
    fn write_journal(
        &self,
        target: &Path,
        session: &mut RunSession,
        force: bool,
        actions: &mut Vec<FileAction>,
    ) -> ConductorResult<()> {
        let path = target.join(JOURNAL_FILE);
        let existed = self.filesystem.exists(&path);

        if existed && !force {
            actions.push(FileAction::new(JOURNAL_FILE, ActionKind::Skipped));
            return Ok(());
        }

        let content = journal::initial_journal(&self.version, &now_stamp());
        self.filesystem.write_file(&path, &content)?;

        if existed {
            actions.push(FileAction::new(JOURNAL_FILE, ActionKind::Overwritten));
        } else {
            session.record_created(JOURNAL_FILE);
            actions.push(FileAction::new(JOURNAL_FILE, ActionKind::Created));
        }
        Ok(())
    }

    /// Insert the upgrade entry into a just-restored journal. Best-effort:
    /// failure is a warning, the restored bytes are already safe on disk.
    fn annotate_journal(&self, target: &Path) -> bool {
        let path = target.join(JOURNAL_FILE);
        let result: ConductorResult<()> = (|| {
            let content = self.filesystem.read_to_string(&path)?;
            let entry = journal::upgrade_entry(&self.version, &now_stamp());
            self.filesystem
                .write_file(&path, &journal::insert_entry(&content, &entry))
        })();

        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "could not add upgrade entry to journal");
                false
            }
        }
    }
}

// ── Prompt text ───────────────────────────────────────────────────────────────

fn overwrite_prompt(target: &Path, existing: &[String], protected_exists: bool) -> String {
    let mut files: Vec<&str> = Vec::new();
    if protected_exists {
        files.push(PROTECTED_FILE);
    }
    for file in existing {
        if file != PROTECTED_FILE {
            files.push(file.as_str());
        }
    }

    let mut prompt = String::from("WARNING: force mode will OVERWRITE these files:\n");
    for file in files {
        prompt.push_str(&format!("  - {file}\n"));
    }
    prompt.push_str(&format!("Target directory: {}\n", target.display()));
    prompt.push_str("This action cannot be undone. Continue?");
    prompt
}

fn upgrade_prompt(target: &Path, had_backup: bool) -> String {
    let backup_line = if had_backup {
        "A backup was found - your journal and guidance document are safe."
    } else {
        "NO BACKUP FOUND - anything not backed up will be lost."
    };
    format!(
        "This will DELETE all Conductor files in {} and reinstall fresh templates.\n{}\nContinue with clean reinstall?",
        target.display(),
        backup_line
    )
}

fn now_stamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M").to_string()
}

// ── Convenience accessors used by the CLI ─────────────────────────────────────

/// Count actions of a given kind in a per-file log.
pub fn count_kind(actions: &[FileAction], kind: &ActionKind) -> usize {
    actions.iter().filter(|a| &a.kind == kind).count()
}
