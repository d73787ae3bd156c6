//! Command handlers, one module per verb.
//!
//! Responsibility: translate CLI arguments into engine options, run one
//! lifecycle operation, and display the outcome. No business logic lives
//! here.

pub mod backup;
pub mod checkup;
pub mod completions;
pub mod init;
pub mod restore;
pub mod upgrade;

use std::path::PathBuf;

use conductor_adapters::{BuiltinTemplates, HeuristicAnalyzer, LocalFilesystem};
use conductor_core::{
    application::{
        ActionKind, FileAction, LifecycleEngine, count_kind,
        ports::{AlwaysConfirm, Confirm},
    },
    error::ConductorResult,
};

use crate::output::OutputManager;

/// Wire a production engine. `yes` swaps the stdin prompt for auto-confirm.
pub(crate) fn build_engine(yes: bool) -> LifecycleEngine {
    let confirm: Box<dyn Confirm> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(StdinConfirm)
    };

    LifecycleEngine::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(HeuristicAnalyzer::new()),
        confirm,
    )
    .with_version(env!("CARGO_PKG_VERSION"))
}

/// Default the target directory to `.`.
pub(crate) fn resolve_dir(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| PathBuf::from("."))
}

/// Print one per-file action line.
pub(crate) fn render_action(action: &FileAction, output: &OutputManager) -> std::io::Result<()> {
    let rel = &action.rel_path;
    match &action.kind {
        ActionKind::Created => output.success(&format!("[+] Created {rel}")),
        ActionKind::Overwritten => output.warning(&format!("[!] Overwrote {rel}")),
        ActionKind::Skipped => output.print(&format!("[=] Skipped {rel} (already exists)")),
        ActionKind::Patched => output.success(&format!("[+] Updated {rel} with analysis")),
        ActionKind::Deleted => output.print(&format!("[-] Deleted {rel}")),
        ActionKind::BackedUp => output.success(&format!("[+] Backed up {rel}")),
        ActionKind::Restored => output.success(&format!("[+] Restored {rel}")),
        ActionKind::Failed(reason) => output.error(&format!("[!] {rel}: {reason}")),
    }
}

/// The "N created, M skipped" closing line every operation ends with.
pub(crate) fn summary_line(actions: &[FileAction]) -> String {
    let parts: [(&str, &ActionKind); 6] = [
        ("created", &ActionKind::Created),
        ("overwritten", &ActionKind::Overwritten),
        ("patched", &ActionKind::Patched),
        ("deleted", &ActionKind::Deleted),
        ("backed up", &ActionKind::BackedUp),
        ("restored", &ActionKind::Restored),
    ];

    let mut pieces: Vec<String> = parts
        .iter()
        .map(|(label, kind)| (label, count_kind(actions, kind)))
        .filter(|(_, n)| *n > 0)
        .map(|(label, n)| format!("{n} {label}"))
        .collect();

    let skipped = count_kind(actions, &ActionKind::Skipped);
    if skipped > 0 {
        pieces.push(format!("{skipped} skipped"));
    }
    let failed = actions
        .iter()
        .filter(|a| matches!(a.kind, ActionKind::Failed(_)))
        .count();
    if failed > 0 {
        pieces.push(format!("{failed} failed"));
    }

    if pieces.is_empty() {
        "nothing to do".to_string()
    } else {
        pieces.join(", ")
    }
}

/// Interactive confirmation over stdin. Default answer is no.
struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> ConductorResult<bool> {
        use std::io::{self, Write};

        use conductor_core::application::ApplicationError;

        print!("{prompt} [y/N] ");
        io::stdout()
            .flush()
            .map_err(|e| ApplicationError::PromptFailed { reason: e.to_string() })?;

        let mut input = String::new();
        io::stdin()
            .read_line(&mut input)
            .map_err(|e| ApplicationError::PromptFailed { reason: e.to_string() })?;

        let input = input.trim().to_ascii_lowercase();
        Ok(input == "y" || input == "yes")
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
