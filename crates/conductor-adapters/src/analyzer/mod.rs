//! Heuristic codebase scanner implementing the `Analyzer` port.
//!
//! Best-effort by contract: everything in here is naive text and path
//! pattern matching whose output lands in documentation as advisory text.
//! Individual scan misses degrade to empty lists (the report renders
//! "To be determined"), never to errors; all lists are truncated to small
//! fixed caps to bound scan cost, and truncation is silent.

mod deep;
mod shallow;

use std::path::Path;

use tracing::{debug, instrument};

use conductor_core::{
    application::ports::{Analyzer, ScanDepth},
    application::report::AnalysisReport,
    error::ConductorResult,
};

/// Directories never descended into by any scan.
pub(crate) const SKIP_DIRS: [&str; 6] = ["node_modules", "dist", "build", "target", "vendor", ".git"];

/// Production analyzer: shallow marker sniffing plus the optional deep pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAnalyzer;

impl HeuristicAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Analyzer for HeuristicAnalyzer {
    #[instrument(skip_all, fields(root = %root.display(), ?depth))]
    fn analyze(&self, root: &Path, depth: ScanDepth) -> ConductorResult<AnalysisReport> {
        let mut report = shallow::scan(root);
        if depth == ScanDepth::Deep {
            report.deep = Some(deep::scan(root));
        }
        debug!(
            tech_stack = report.tech_stack.len(),
            total_lines = report.total_lines,
            deep = report.deep.is_some(),
            "analysis finished"
        );
        Ok(report)
    }
}

/// Whether a directory entry should be pruned from a walk.
pub(crate) fn is_skipped_dir(name: &str) -> bool {
    name.starts_with('.') || SKIP_DIRS.contains(&name)
}
