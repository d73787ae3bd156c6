//! Application layer errors.
//!
//! These errors represent genuine orchestration failures. Precondition
//! short-circuits (nothing to backup, backup already exists, `--clean` not
//! given) are modelled as outcome variants on the lifecycle operations, not
//! as errors.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during lifecycle orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// The template store has no body for a known scaffold file.
    #[error("Template body missing for '{rel_path}'")]
    TemplateMissing { rel_path: String },

    /// The confirmation prompt could not be read.
    #[error("Confirmation prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Codebase analysis failed outright (individual scan misses are not
    /// errors — the analyzer degrades to "To be determined" placeholders).
    #[error("Codebase analysis failed: {reason}")]
    AnalysisFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::TemplateMissing { rel_path } => vec![
                format!("No built-in template body for: {}", rel_path),
                "Reinstall conductor-cli; the embedded template set is incomplete".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Standard input could not be read".into(),
                "Re-run with --yes to skip interactive confirmation".into(),
            ],
            Self::AnalysisFailed { .. } => vec![
                "Re-run with --no-analyze to skip codebase analysis".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FilesystemError { .. } => ErrorCategory::Internal,
            Self::TemplateMissing { .. } => ErrorCategory::NotFound,
            Self::PromptFailed { .. } => ErrorCategory::Internal,
            Self::AnalysisFailed { .. } => ErrorCategory::Internal,
        }
    }
}
