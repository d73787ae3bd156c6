//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the lifecycle engine needs from external
//! systems. The `conductor-adapters` crate provides implementations.

use std::path::Path;

use crate::application::report::AnalysisReport;
use crate::error::ConductorResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `conductor_adapters::filesystem::LocalFilesystem` (production)
/// - `conductor_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - Single-user CLI: synchronous, sequential, no locking.
/// - `exists`/`is_dir` are plain probes; the lifecycle derives all file
///   state from them each run rather than persisting anything.
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Read a file to a string.
    fn read_to_string(&self, path: &Path) -> ConductorResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> ConductorResult<()>;

    /// Copy a file, overwriting the destination if present.
    fn copy_file(&self, from: &Path, to: &Path) -> ConductorResult<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> ConductorResult<()>;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> ConductorResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ConductorResult<()>;
}

/// Port for template body storage.
///
/// Implemented by `conductor_adapters::BuiltinTemplates` (markdown bodies
/// embedded in the binary). Bodies are opaque blobs to the engine; only the
/// patcher knows about the tokens inside them.
pub trait TemplateStore: Send + Sync {
    /// The body for a scaffold document, keyed by relative path.
    fn body(&self, rel_path: &str) -> ConductorResult<String>;
}

/// How deep the codebase analysis should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDepth {
    /// Marker files, main-file candidates, line counts, top directories.
    Shallow,
    /// Shallow plus dependency manifests, frameworks, routes, components,
    /// build scripts, and schema artifacts.
    Deep,
}

/// Port for the heuristic codebase scanner.
///
/// The report is advisory text destined for documentation; the engine never
/// makes control decisions from it.
pub trait Analyzer: Send + Sync {
    /// Inspect `root` and produce a report at the requested depth.
    fn analyze(&self, root: &Path, depth: ScanDepth) -> ConductorResult<AnalysisReport>;
}

/// Port for interactive confirmation.
///
/// Implemented by the CLI with a blocking stdin read; replaced by
/// [`AlwaysConfirm`] for the `--yes` path and by mocks in tests.
pub trait Confirm: Send + Sync {
    /// Ask the user a yes/no question; `true` means proceed.
    fn confirm(&self, prompt: &str) -> ConductorResult<bool>;
}

/// A [`Confirm`] that always answers yes. Used for `--yes` and nested
/// operations that were already confirmed upstream.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> ConductorResult<bool> {
        Ok(true)
    }
}
