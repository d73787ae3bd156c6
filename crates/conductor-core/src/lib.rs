//! Conductor Core - file lifecycle engine for the documentation scaffold.
//!
//! This crate provides the domain and application layers for the Conductor
//! documentation framework, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          conductor-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           Lifecycle Engine              │
//! │   (Init, Backup, CleanUpgrade,          │
//! │    Restore — per-file action log)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateStore, Analyzer,   │
//! │  Confirm)                               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   conductor-adapters (Infrastructure)   │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  HeuristicAnalyzer, BuiltinTemplates)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │  (TemplateSet, PlaceholderPatcher,      │
//! │   Journal — no external dependencies)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use conductor_core::application::{InitOptions, LifecycleEngine, ports::AlwaysConfirm};
//!
//! // Wire the engine with injected adapters, then run one operation.
//! let engine = LifecycleEngine::new(templates, filesystem, analyzer, Box::new(AlwaysConfirm));
//! let outcome = engine.init("./my-project".as_ref(), &InitOptions::default())?;
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ActionKind, AnalysisReport, BackupOutcome, DeepReport, FileAction, InitOptions,
        InitOutcome, LifecycleEngine, RestoreOutcome, RunSession, UpgradeOptions, UpgradeOutcome,
        ports::{AlwaysConfirm, Analyzer, Confirm, Filesystem, ScanDepth, TemplateStore},
    };
    pub use crate::domain::{journal, placeholder, template_set};
    pub use crate::error::{ConductorError, ConductorResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
