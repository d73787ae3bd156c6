//! Lifecycle engine integration tests over the in-memory filesystem.
//!
//! These exercise the file-state machine end to end: init blocking and
//! force-overwrite, the non-clobber patch gate, and the three-step
//! backup / clean-upgrade / restore flow.

use std::path::Path;

use conductor_adapters::{BuiltinTemplates, MemoryFilesystem};
use conductor_core::{
    application::{
        ActionKind, BackupOutcome, InitOptions, InitOutcome, LifecycleEngine, RestoreOutcome,
        UpgradeOptions, UpgradeOutcome, count_kind,
        ports::{AlwaysConfirm, Analyzer, Confirm, ScanDepth},
        report::{AnalysisReport, DeepReport, MainFile},
    },
    error::ConductorResult,
};

const TARGET: &str = "/project";

// ── Test doubles ──────────────────────────────────────────────────────────────

/// Analyzer returning a canned report; deep section stripped for shallow.
#[derive(Clone, Default)]
struct StubAnalyzer {
    report: AnalysisReport,
}

impl StubAnalyzer {
    fn with_findings() -> Self {
        Self {
            report: AnalysisReport {
                tech_stack: vec!["Rust".into()],
                main_files: vec![MainFile { path: "src/main.rs".into(), lines: 321 }],
                total_lines: 1234,
                top_dirs: vec!["src".into()],
                deep: Some(DeepReport {
                    dependencies: vec![("axum".into(), "0.7".into())],
                    frameworks: vec!["Axum 0.7".into()],
                    build_scripts: vec![("build".into(), "cargo build".into())],
                    ..DeepReport::default()
                }),
            },
        }
    }
}

impl Analyzer for StubAnalyzer {
    fn analyze(&self, _root: &Path, depth: ScanDepth) -> ConductorResult<AnalysisReport> {
        let mut report = self.report.clone();
        if depth == ScanDepth::Shallow {
            report.deep = None;
        }
        Ok(report)
    }
}

mockall::mock! {
    ConfirmPort {}
    impl Confirm for ConfirmPort {
        fn confirm(&self, prompt: &str) -> ConductorResult<bool>;
    }
}

// ── Wiring helpers ────────────────────────────────────────────────────────────

fn engine(fs: &MemoryFilesystem) -> LifecycleEngine {
    engine_with(fs, StubAnalyzer::default(), Box::new(AlwaysConfirm))
}

fn engine_with(
    fs: &MemoryFilesystem,
    analyzer: StubAnalyzer,
    confirm: Box<dyn Confirm>,
) -> LifecycleEngine {
    LifecycleEngine::new(
        Box::new(BuiltinTemplates::new()),
        Box::new(fs.clone()),
        Box::new(analyzer),
        confirm,
    )
}

fn target() -> &'static Path {
    Path::new(TARGET)
}

fn path(rel: &str) -> std::path::PathBuf {
    target().join(rel)
}

fn read(fs: &MemoryFilesystem, rel: &str) -> String {
    fs.read_file(&path(rel))
        .unwrap_or_else(|| panic!("missing {rel}"))
}

const CORE_PATHS: [&str; 5] =
    ["CONDUCTOR.md", "CLAUDE.md", "ARCHITECTURE.md", "BUILD.md", "JOURNAL.md"];

const FULL_PATHS: [&str; 14] = [
    "CONDUCTOR.md",
    "CLAUDE.md",
    "ARCHITECTURE.md",
    "BUILD.md",
    "JOURNAL.md",
    "DESIGN.md",
    "UIUX.md",
    "CONFIG.md",
    "DATA_MODEL.md",
    "API.md",
    "TEST.md",
    "CONTRIBUTING.md",
    "ERRORS.md",
    "PLAYBOOKS/DEPLOY.md",
];

// ── Init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_on_empty_directory_creates_core_set() {
    let fs = MemoryFilesystem::new();
    let outcome = engine(&fs).init(target(), &InitOptions::default()).unwrap();

    let InitOutcome::Completed { actions, protected_preserved, .. } = outcome else {
        panic!("expected Completed");
    };
    assert!(!protected_preserved);
    assert_eq!(count_kind(&actions, &ActionKind::Created), 5);
    for rel in CORE_PATHS {
        assert!(fs.exists_rel(rel), "missing {rel}");
    }
    // Full-only documents are not installed by default.
    assert!(!fs.exists_rel("API.md"));
}

#[test]
fn init_full_creates_all_fourteen_paths() {
    let fs = MemoryFilesystem::new();
    let opts = InitOptions { full: true, ..InitOptions::default() };
    engine(&fs).init(target(), &opts).unwrap();

    for rel in FULL_PATHS {
        assert!(fs.exists_rel(rel), "missing {rel}");
    }
}

#[test]
fn init_twice_is_idempotent() {
    let fs = MemoryFilesystem::new();
    let engine = engine(&fs);
    engine.init(target(), &InitOptions::default()).unwrap();

    let before: Vec<(String, String)> = CORE_PATHS
        .iter()
        .map(|rel| (rel.to_string(), read(&fs, rel)))
        .collect();

    let second = engine.init(target(), &InitOptions::default()).unwrap();
    let InitOutcome::Completed { actions, .. } = second else {
        panic!("second init must complete");
    };
    assert_eq!(count_kind(&actions, &ActionKind::Created), 0);
    assert_eq!(count_kind(&actions, &ActionKind::Skipped), 5);

    for (rel, content) in before {
        assert_eq!(read(&fs, &rel), content, "{rel} changed on second run");
    }
}

#[test]
fn existing_non_protected_file_blocks_the_whole_init() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(&path("ARCHITECTURE.md"), "# Mine");

    let outcome = engine(&fs).init(target(), &InitOptions::default()).unwrap();
    let InitOutcome::Blocked { existing } = outcome else {
        panic!("expected Blocked");
    };
    assert_eq!(existing, vec!["ARCHITECTURE.md".to_string()]);

    // Fail-fast, all-or-nothing: nothing else was created.
    assert!(!fs.exists_rel("CONDUCTOR.md"));
    assert!(!fs.exists_rel("CLAUDE.md"));
    assert_eq!(read(&fs, "ARCHITECTURE.md"), "# Mine");
}

#[test]
fn existing_journal_also_blocks_init() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(&path("JOURNAL.md"), "# My History");

    let outcome = engine(&fs).init(target(), &InitOptions::default()).unwrap();
    assert!(matches!(outcome, InitOutcome::Blocked { .. }));
    assert_eq!(read(&fs, "JOURNAL.md"), "# My History");
}

#[test]
fn existing_guidance_doc_alone_does_not_block() {
    let fs = MemoryFilesystem::new();
    let custom = "# My Custom CLAUDE.md\n\n- **Tech Stack**: [List core technologies]\n";
    fs.seed_file(&path("CLAUDE.md"), custom);

    let outcome = engine(&fs).init(target(), &InitOptions::default()).unwrap();
    let InitOutcome::Completed { protected_preserved, .. } = outcome else {
        panic!("protected file must not block init");
    };
    assert!(protected_preserved);

    // The rest of the core scaffold arrived; the guidance doc is untouched,
    // including its placeholder (analysis must not patch a pre-existing file).
    assert!(fs.exists_rel("CONDUCTOR.md"));
    assert_eq!(read(&fs, "CLAUDE.md"), custom);
}

#[test]
fn force_with_yes_overwrites_everything() {
    let fs = MemoryFilesystem::new();
    for rel in ["CLAUDE.md", "JOURNAL.md", "ARCHITECTURE.md", "BUILD.md"] {
        fs.seed_file(&path(rel), "# Custom");
    }

    let opts = InitOptions { force: true, yes: true, ..InitOptions::default() };
    let outcome = engine(&fs).init(target(), &opts).unwrap();
    let InitOutcome::Completed { actions, .. } = outcome else {
        panic!("forced init must complete");
    };
    assert!(count_kind(&actions, &ActionKind::Overwritten) >= 4);

    for rel in ["CLAUDE.md", "ARCHITECTURE.md", "BUILD.md"] {
        let content = read(&fs, rel);
        assert_ne!(content, "# Custom", "{rel} not overwritten");
        assert!(content.len() > 50, "{rel} has no real template content");
    }
}

#[test]
fn declined_confirmation_cancels_forced_init() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(&path("ARCHITECTURE.md"), "# Mine");

    let mut confirm = MockConfirmPort::new();
    confirm.expect_confirm().times(1).returning(|_| Ok(false));

    let opts = InitOptions { force: true, ..InitOptions::default() };
    let outcome = engine_with(&fs, StubAnalyzer::default(), Box::new(confirm))
        .init(target(), &opts)
        .unwrap();

    assert!(matches!(outcome, InitOutcome::Cancelled));
    assert_eq!(read(&fs, "ARCHITECTURE.md"), "# Mine");
    assert!(!fs.exists_rel("CONDUCTOR.md"));
}

#[test]
fn created_documents_carry_the_running_version() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();

    let marker = format!("<!-- Generated by Conductor v{} -->", conductor_core::VERSION);
    assert!(read(&fs, "CONDUCTOR.md").contains(&marker));
    assert!(read(&fs, "CLAUDE.md").contains(&marker));
}

#[test]
fn journal_gets_initial_five_field_entry() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();

    let journal = read(&fs, "JOURNAL.md");
    assert!(journal.starts_with("# Engineering Journal"));
    for field in ["**What**", "**Why**", "**How**", "**Issues**", "**Result**"] {
        assert!(journal.contains(field));
    }
}

// ── Analysis patching ─────────────────────────────────────────────────────────

#[test]
fn shallow_analysis_fills_guidance_placeholders_on_fresh_install() {
    let fs = MemoryFilesystem::new();
    let outcome = engine_with(&fs, StubAnalyzer::with_findings(), Box::new(AlwaysConfirm))
        .init(target(), &InitOptions::default())
        .unwrap();

    let InitOutcome::Completed { analysis, .. } = outcome else { panic!() };
    assert!(analysis.unwrap().deep.is_none());

    let guidance = read(&fs, "CLAUDE.md");
    assert!(guidance.contains("- **Tech Stack**: Rust"));
    assert!(guidance.contains("- **Main File**: src/main.rs (321 lines)"));
    assert!(guidance.contains("- **Core Mechanic**: 1234 lines of code across 1 directories"));
    assert!(!guidance.contains("[List core technologies]"));
}

#[test]
fn deepscan_patches_architecture_and_build_documents() {
    let fs = MemoryFilesystem::new();
    let opts = InitOptions { deepscan: true, ..InitOptions::default() };
    engine_with(&fs, StubAnalyzer::with_findings(), Box::new(AlwaysConfirm))
        .init(target(), &opts)
        .unwrap();

    let architecture = read(&fs, "ARCHITECTURE.md");
    assert!(architecture.contains("- **Axum 0.7**"));
    assert!(architecture.contains("### Key Dependencies"));
    assert!(architecture.contains("- axum: 0.7"));

    let build = read(&fs, "BUILD.md");
    assert!(build.contains("## Available Scripts"));
    assert!(build.contains("```bash\ncargo build\n```"));
}

#[test]
fn analysis_never_patches_a_preexisting_file_without_force() {
    let fs = MemoryFilesystem::new();
    let custom_arch = "# My Architecture\n\n## Tech Stack\n\nCustom info\n";
    fs.seed_file(&path("CLAUDE.md"), "- **Tech Stack**: [List core technologies]\n");

    // CLAUDE.md is skipped (protected) and must keep its placeholder.
    let opts = InitOptions { deepscan: true, ..InitOptions::default() };
    engine_with(&fs, StubAnalyzer::with_findings(), Box::new(AlwaysConfirm))
        .init(target(), &opts)
        .unwrap();
    assert!(read(&fs, "CLAUDE.md").contains("[List core technologies]"));

    // A fresh directory where ARCHITECTURE.md pre-exists: blocked entirely,
    // so the custom section trivially survives.
    let fs2 = MemoryFilesystem::new();
    fs2.seed_file(&path("ARCHITECTURE.md"), custom_arch);
    engine_with(&fs2, StubAnalyzer::with_findings(), Box::new(AlwaysConfirm))
        .init(target(), &opts)
        .unwrap();
    assert_eq!(read(&fs2, "ARCHITECTURE.md"), custom_arch);
}

#[test]
fn force_extends_patch_eligibility_to_existing_files() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(&path("CLAUDE.md"), "- **Tech Stack**: [List core technologies]\n");

    let opts = InitOptions { force: true, yes: true, ..InitOptions::default() };
    engine_with(&fs, StubAnalyzer::with_findings(), Box::new(AlwaysConfirm))
        .init(target(), &opts)
        .unwrap();

    // Overwritten from template, then patched.
    assert!(read(&fs, "CLAUDE.md").contains("- **Tech Stack**: Rust"));
}

#[test]
fn no_analyze_leaves_placeholders_in_place() {
    let fs = MemoryFilesystem::new();
    let opts = InitOptions { analyze: false, ..InitOptions::default() };
    let outcome = engine_with(&fs, StubAnalyzer::with_findings(), Box::new(AlwaysConfirm))
        .init(target(), &opts)
        .unwrap();

    let InitOutcome::Completed { analysis, .. } = outcome else { panic!() };
    assert!(analysis.is_none());
    assert!(read(&fs, "CLAUDE.md").contains("[List core technologies]"));
}

// ── Backup ────────────────────────────────────────────────────────────────────

#[test]
fn backup_with_no_scaffold_creates_nothing() {
    let fs = MemoryFilesystem::new();
    fs.create_dir_all_rel();

    let outcome = engine(&fs).backup(target()).unwrap();
    assert!(matches!(outcome, BackupOutcome::NothingToBackup));
    assert!(!fs.exists_rel("conductor-backup"));
}

#[test]
fn backup_copies_journal_and_guidance() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();
    fs.seed_file(&path("JOURNAL.md"), "# My History\n\n## Critical\nkeep\n");
    fs.seed_file(&path("CLAUDE.md"), "# My Setup\n");

    let outcome = engine(&fs).backup(target()).unwrap();
    let BackupOutcome::Completed { actions } = outcome else { panic!() };
    assert_eq!(count_kind(&actions, &ActionKind::BackedUp), 2);

    assert_eq!(read(&fs, "conductor-backup/JOURNAL.md"), "# My History\n\n## Critical\nkeep\n");
    assert_eq!(read(&fs, "conductor-backup/CLAUDE.md"), "# My Setup\n");
}

#[test]
fn backup_refuses_to_clobber_an_existing_backup() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();
    engine(&fs).backup(target()).unwrap();
    fs.seed_file(&path("conductor-backup/JOURNAL.md"), "first backup");

    let outcome = engine(&fs).backup(target()).unwrap();
    assert!(matches!(outcome, BackupOutcome::AlreadyBackedUp));
    assert_eq!(read(&fs, "conductor-backup/JOURNAL.md"), "first backup");
}

#[test]
fn backup_skips_absent_files_without_error() {
    let fs = MemoryFilesystem::new();
    fs.seed_file(&path("CONDUCTOR.md"), "# scaffold exists");

    let outcome = engine(&fs).backup(target()).unwrap();
    let BackupOutcome::Completed { actions } = outcome else { panic!() };
    // Zero backed up is a valid, non-error outcome.
    assert_eq!(count_kind(&actions, &ActionKind::BackedUp), 0);
    assert_eq!(count_kind(&actions, &ActionKind::Skipped), 2);
    assert!(fs.exists_rel("conductor-backup"));
}

// ── CleanUpgrade ──────────────────────────────────────────────────────────────

#[test]
fn upgrade_without_clean_flag_mutates_nothing() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();
    let before = read(&fs, "CONDUCTOR.md");

    let outcome = engine(&fs)
        .clean_upgrade(target(), &UpgradeOptions { yes: true, ..UpgradeOptions::default() })
        .unwrap();
    assert!(matches!(outcome, UpgradeOutcome::CleanRequired));
    assert_eq!(read(&fs, "CONDUCTOR.md"), before);
}

#[test]
fn upgrade_without_backup_requires_force() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();

    let opts = UpgradeOptions { clean: true, yes: true, ..UpgradeOptions::default() };
    let outcome = engine(&fs).clean_upgrade(target(), &opts).unwrap();
    assert!(matches!(outcome, UpgradeOutcome::BackupMissing));
    assert!(fs.exists_rel("CONDUCTOR.md"));

    let forced = UpgradeOptions { clean: true, force: true, yes: true, ..UpgradeOptions::default() };
    let outcome = engine(&fs).clean_upgrade(target(), &forced).unwrap();
    let UpgradeOutcome::Completed { had_backup, .. } = outcome else { panic!() };
    assert!(!had_backup);
}

#[test]
fn upgrade_deletes_scaffold_and_reinstalls_fresh_templates() {
    let fs = MemoryFilesystem::new();
    let engine = engine(&fs);
    engine.init(target(), &InitOptions::default()).unwrap();
    engine.backup(target()).unwrap();

    // Extra full-only files to prove deletion sweeps the whole known set.
    fs.seed_file(&path("DESIGN.md"), "custom design");
    fs.seed_file(&path("PLAYBOOKS/DEPLOY.md"), "custom playbook");
    fs.seed_file(&path("CLAUDE.md"), "customized guidance");

    let opts = UpgradeOptions { clean: true, yes: true, ..UpgradeOptions::default() };
    let outcome = engine.clean_upgrade(target(), &opts).unwrap();
    let UpgradeOutcome::Completed { had_backup, actions, init } = outcome else { panic!() };
    assert!(had_backup);
    assert!(count_kind(&actions, &ActionKind::Deleted) >= 6);
    assert!(matches!(*init, InitOutcome::Completed { .. }));

    // Fresh templates, not the customized ones.
    assert!(read(&fs, "CLAUDE.md").contains("[List core technologies]"));
    assert!(!fs.exists_rel("DESIGN.md"));
    assert!(!fs.exists_rel("PLAYBOOKS"));
    // The BackupSet survives the sweep.
    assert!(fs.exists_rel("conductor-backup/JOURNAL.md"));
}

#[test]
fn declined_upgrade_confirmation_deletes_nothing() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();
    engine(&fs).backup(target()).unwrap();

    let mut confirm = MockConfirmPort::new();
    confirm.expect_confirm().times(1).returning(|_| Ok(false));

    let opts = UpgradeOptions { clean: true, ..UpgradeOptions::default() };
    let outcome = engine_with(&fs, StubAnalyzer::default(), Box::new(confirm))
        .clean_upgrade(target(), &opts)
        .unwrap();
    assert!(matches!(outcome, UpgradeOutcome::Cancelled));
    assert!(fs.exists_rel("CONDUCTOR.md"));
}

// ── Restore ───────────────────────────────────────────────────────────────────

#[test]
fn restore_without_backup_reports_and_stops() {
    let fs = MemoryFilesystem::new();
    engine(&fs).init(target(), &InitOptions::default()).unwrap();
    let before = read(&fs, "JOURNAL.md");

    let outcome = engine(&fs).restore(target()).unwrap();
    assert!(matches!(outcome, RestoreOutcome::BackupMissing));
    assert_eq!(read(&fs, "JOURNAL.md"), before);
}

#[test]
fn backup_then_restore_roundtrips_user_content() {
    let fs = MemoryFilesystem::new();
    let engine = engine(&fs);
    engine.init(target(), &InitOptions::default()).unwrap();

    let journal = "# Development Log\n\n## 2024-01-01\nImportant milestone achieved\n";
    let guidance = "# Project Config\n\n- **Tech Stack**: Vue.js, Python\n";
    fs.seed_file(&path("JOURNAL.md"), journal);
    fs.seed_file(&path("CLAUDE.md"), guidance);

    engine.backup(target()).unwrap();
    let outcome = engine.restore(target()).unwrap();
    let RestoreOutcome::Completed { journal_annotated, backup_removed, .. } = outcome else {
        panic!()
    };
    assert!(journal_annotated);
    assert!(backup_removed);

    // Guidance document: byte-identical.
    assert_eq!(read(&fs, "CLAUDE.md"), guidance);

    // Journal: original content plus exactly one upgrade section.
    let restored = read(&fs, "JOURNAL.md");
    assert!(restored.contains("Important milestone achieved"));
    assert_eq!(restored.matches("Conductor Clean Upgrade").count(), 1);

    // BackupSet consumed.
    assert!(!fs.exists_rel("conductor-backup"));
}

#[test]
fn restore_inserts_upgrade_entry_below_top_heading() {
    let fs = MemoryFilesystem::new();
    let engine = engine(&fs);
    engine.init(target(), &InitOptions::default()).unwrap();

    let journal = "# Engineering Journal\n\n## 2024-01-01 09:00\n\nold milestone\n";
    fs.seed_file(&path("JOURNAL.md"), journal);
    engine.backup(target()).unwrap();
    engine.restore(target()).unwrap();

    let restored = read(&fs, "JOURNAL.md");
    let upgrade_at = restored.find("Conductor Clean Upgrade").unwrap();
    let old_at = restored.find("old milestone").unwrap();
    assert!(upgrade_at < old_at, "upgrade entry must precede older sections");
}

#[test]
fn restore_without_journal_in_backup_does_not_annotate() {
    let fs = MemoryFilesystem::new();
    let engine = engine(&fs);
    engine.init(target(), &InitOptions::default()).unwrap();

    // BackupSet holding only the guidance document.
    fs.seed_file(&path("conductor-backup/CLAUDE.md"), "# Mine");

    let outcome = engine.restore(target()).unwrap();
    let RestoreOutcome::Completed { journal_annotated, actions, .. } = outcome else { panic!() };
    assert!(!journal_annotated);
    assert_eq!(count_kind(&actions, &ActionKind::Restored), 1);
    assert_eq!(count_kind(&actions, &ActionKind::Skipped), 1);
    // The freshly-templated journal is left alone.
    assert!(!read(&fs, "JOURNAL.md").contains("Conductor Clean Upgrade"));
    assert_eq!(read(&fs, "CLAUDE.md"), "# Mine");
}

// ── Full cycle ────────────────────────────────────────────────────────────────

#[test]
fn full_backup_upgrade_restore_cycle_preserves_data() {
    let fs = MemoryFilesystem::new();
    let engine = engine(&fs);
    engine.init(target(), &InitOptions::default()).unwrap();

    let journal = "# Development Log\n\n## 2024-01-01\nImportant milestone achieved\n";
    let guidance = "# Project Config\n\n- **Tech Stack**: Vue.js, Python\n- Critical notes\n";
    fs.seed_file(&path("JOURNAL.md"), journal);
    fs.seed_file(&path("CLAUDE.md"), guidance);

    engine.backup(target()).unwrap();
    engine
        .clean_upgrade(target(), &UpgradeOptions { clean: true, yes: true, ..UpgradeOptions::default() })
        .unwrap();

    // Between steps 2 and 3 the scaffold is fresh templates.
    assert!(read(&fs, "CLAUDE.md").contains("[List core technologies]"));

    engine.restore(target()).unwrap();

    // Guidance document byte-identical to its pre-backup content.
    assert_eq!(read(&fs, "CLAUDE.md"), guidance);

    // Journal holds the original milestone and the new upgrade entry.
    let final_journal = read(&fs, "JOURNAL.md");
    assert!(final_journal.contains("Development Log"));
    assert!(final_journal.contains("Important milestone achieved"));
    assert!(final_journal.contains("Conductor Clean Upgrade"));

    // Fresh non-protected templates exist with placeholder content.
    assert!(read(&fs, "CONDUCTOR.md").contains("Documentation Framework Master"));
    assert!(read(&fs, "ARCHITECTURE.md").contains("## Tech Stack"));
    assert!(!fs.exists_rel("conductor-backup"));
}

// ── Helpers on the memory filesystem ─────────────────────────────────────────

trait MemoryFsExt {
    fn exists_rel(&self, rel: &str) -> bool;
    fn create_dir_all_rel(&self);
}

impl MemoryFsExt for MemoryFilesystem {
    fn exists_rel(&self, rel: &str) -> bool {
        use conductor_core::application::ports::Filesystem;
        self.exists(&path(rel))
    }

    fn create_dir_all_rel(&self) {
        use conductor_core::application::ports::Filesystem;
        self.create_dir_all(target()).unwrap();
    }
}
