//! Per-invocation run state.
//!
//! A [`RunSession`] is created at the top of each lifecycle operation and
//! passed by reference into every step — never stored in a global, so
//! concurrent test invocations cannot leak state into each other.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// Ephemeral state scoped to one lifecycle invocation.
#[derive(Debug, Clone)]
pub struct RunSession {
    id: Uuid,
    target: PathBuf,
    force: bool,
    created: BTreeSet<String>,
}

impl RunSession {
    /// Start a session against `target`.
    pub fn new(target: &Path, force: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            target: target.to_path_buf(),
            force,
            created: BTreeSet::new(),
        }
    }

    /// Session identity, recorded in tracing spans.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The directory this session operates on.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Record that this run itself created `rel_path`.
    pub fn record_created(&mut self, rel_path: &str) {
        self.created.insert(rel_path.to_string());
    }

    /// Whether this run created `rel_path`.
    pub fn was_created(&self, rel_path: &str) -> bool {
        self.created.contains(rel_path)
    }

    /// The non-clobber gate: analysis may patch a file only if this run
    /// created it, or force is set. Pre-existing user files are never
    /// silently patched.
    pub fn may_patch(&self, rel_path: &str) -> bool {
        self.force || self.created.contains(rel_path)
    }

    /// Relative paths created by this run, in stable order.
    pub fn created_files(&self) -> impl Iterator<Item = &str> {
        self.created.iter().map(String::as_str)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
