//! Infrastructure adapters for Conductor.
//!
//! This crate implements the ports defined in
//! `conductor_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod analyzer;
pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use analyzer::HeuristicAnalyzer;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::BuiltinTemplates;
