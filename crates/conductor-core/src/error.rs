//! Unified error handling for Conductor Core.
//!
//! This module provides a unified error type that wraps application errors,
//! with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;

/// Root error type for Conductor Core operations.
///
/// This enum wraps all possible errors that can occur when using
/// conductor-core, providing a unified interface for error handling.
///
/// Note that precondition failures (missing backup, existing files without
/// `--force`, missing `--clean`) are **not** errors — they are ordinary
/// outcome variants returned by the lifecycle engine. Only genuine failures
/// (I/O, missing template bodies, broken prompts) surface here.
#[derive(Debug, Error, Clone)]
pub enum ConductorError {
    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl ConductorError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {}", message),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Conductor".into(),
                "Please report this issue at: https://github.com/conductor-dev/conductor/issues"
                    .into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type ConductorResult<T> = Result<T, ConductorError>;

/// Extension trait for adding context to errors.
pub trait Context<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> ConductorResult<T>;
}

impl<T, E> Context<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: impl Into<String>) -> ConductorResult<T> {
        self.map_err(|e| ConductorError::Internal {
            message: format!("{}: {}", msg.into(), e),
        })
    }
}
