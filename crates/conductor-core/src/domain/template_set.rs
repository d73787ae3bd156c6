//! The static template set: which documents the scaffold owns.
//!
//! Identity is the relative path inside the target directory. Membership is
//! fixed at compile time; nothing here mutates at runtime. The lifecycle
//! engine derives every file list it needs (existence check, deletion,
//! backup) from this one table so the lists cannot drift apart.

/// One named scaffold document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile {
    /// Path relative to the target directory, e.g. `PLAYBOOKS/DEPLOY.md`.
    pub rel_path: &'static str,
    /// Member of the default (core) install; `false` means full-only.
    pub core: bool,
    /// Never auto-overwritten and never blocks an init run.
    pub protected: bool,
    /// Eligible for placeholder patching after creation.
    pub patchable: bool,
}

/// The guidance document — the single protected file.
pub const PROTECTED_FILE: &str = "CLAUDE.md";

/// The development journal. Generated, never templated.
pub const JOURNAL_FILE: &str = "JOURNAL.md";

/// Architecture document, patched by deep analysis.
pub const ARCHITECTURE_FILE: &str = "ARCHITECTURE.md";

/// Build document, patched by deep analysis.
pub const BUILD_FILE: &str = "BUILD.md";

/// Directory holding the BackupSet during the 3-step upgrade flow.
pub const BACKUP_DIR: &str = "conductor-backup";

/// The two user-authored documents the BackupSet protects.
pub const BACKUP_FILES: [&str; 2] = [JOURNAL_FILE, PROTECTED_FILE];

/// Documents carrying a version marker comment, rewritten on creation.
pub const VERSIONED_FILES: [&str; 2] = ["CONDUCTOR.md", PROTECTED_FILE];

/// The thirteen templated documents. Together with the generated journal
/// they form the fourteen-path full scaffold.
pub const TEMPLATES: [TemplateFile; 13] = [
    TemplateFile { rel_path: "CONDUCTOR.md", core: true, protected: false, patchable: false },
    TemplateFile { rel_path: PROTECTED_FILE, core: true, protected: true, patchable: true },
    TemplateFile { rel_path: ARCHITECTURE_FILE, core: true, protected: false, patchable: true },
    TemplateFile { rel_path: BUILD_FILE, core: true, protected: false, patchable: true },
    TemplateFile { rel_path: "DESIGN.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "UIUX.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "CONFIG.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "DATA_MODEL.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "API.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "TEST.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "CONTRIBUTING.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "ERRORS.md", core: false, protected: false, patchable: false },
    TemplateFile { rel_path: "PLAYBOOKS/DEPLOY.md", core: false, protected: false, patchable: false },
];

/// Templates installed by this run: core-only unless `full`.
pub fn active(full: bool) -> impl Iterator<Item = &'static TemplateFile> {
    TEMPLATES.iter().filter(move |t| full || t.core)
}

/// Paths probed by the pre-init existence check.
///
/// The journal belongs here even though it is generated rather than copied:
/// an existing journal is user history and must block a non-forced init.
/// The protected file is *included* — callers split it out so its presence
/// can be reported separately without blocking the run.
pub fn check_set(full: bool) -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = if full {
        TEMPLATES.iter().map(|t| t.rel_path).collect()
    } else {
        // The default check deliberately skips the protected file; it gets
        // its own lenient handling.
        TEMPLATES
            .iter()
            .filter(|t| t.core && !t.protected)
            .map(|t| t.rel_path)
            .collect()
    };
    paths.push(JOURNAL_FILE);
    paths
}

/// Files whose presence marks a directory as holding a scaffold
/// (the backup precondition check).
pub fn recognized() -> [&'static str; 8] {
    [
        PROTECTED_FILE,
        "CONDUCTOR.md",
        JOURNAL_FILE,
        ARCHITECTURE_FILE,
        BUILD_FILE,
        "API.md",
        "CONFIG.md",
        "DATA_MODEL.md",
    ]
}

/// Everything CleanUpgrade removes when present.
///
/// `PLAYBOOKS` appears as the whole directory, not the single file inside
/// it, so stray user files under it are cleaned up too — CleanUpgrade is
/// documented as lossy for anything outside the BackupSet.
pub fn removal_set() -> Vec<&'static str> {
    let mut paths: Vec<&'static str> = TEMPLATES
        .iter()
        .map(|t| t.rel_path)
        .filter(|p| !p.starts_with("PLAYBOOKS/"))
        .collect();
    paths.push(JOURNAL_FILE);
    paths.push("PLAYBOOKS");
    paths
}

/// Look up a template entry by relative path.
pub fn find(rel_path: &str) -> Option<&'static TemplateFile> {
    TEMPLATES.iter().find(|t| t.rel_path == rel_path)
}

/// Whether this document carries the version marker comment.
pub fn is_versioned(rel_path: &str) -> bool {
    VERSIONED_FILES.contains(&rel_path)
}

// ── tests ─────────────────────────────────────────────────────────────────────
