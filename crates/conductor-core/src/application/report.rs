//! Analysis report value types and their document renderings.
//!
//! The analyzer fills these in; the lifecycle engine turns them into patch
//! text via the rendering helpers below and forgets them. Reports are never
//! persisted independently of the documents they patch.

use serde::{Deserialize, Serialize};

/// Fallback text for fields the scan could not determine.
pub const UNDETERMINED: &str = "To be determined";

/// A candidate "main" source file with its line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainFile {
    pub path: String,
    pub lines: usize,
}

impl MainFile {
    pub fn summary(&self) -> String {
        format!("{} ({} lines)", self.path, self.lines)
    }
}

/// A naively pattern-matched HTTP route registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteHit {
    pub method: String,
    pub path: String,
    pub file: String,
}

/// What a shallow scan finds, plus the optional deep extension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Detected tech-stack identifiers (by marker-file presence).
    pub tech_stack: Vec<String>,
    /// Up to a few candidate main files with line counts.
    pub main_files: Vec<MainFile>,
    /// Total line count across common source extensions.
    pub total_lines: usize,
    /// Bounded list of top-level directory names.
    pub top_dirs: Vec<String>,
    /// Present only for deep scans.
    pub deep: Option<DeepReport>,
}

/// The deep-scan extension of the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepReport {
    /// Runtime dependencies, name → version.
    pub dependencies: Vec<(String, String)>,
    /// Development dependencies, name → version.
    pub dev_dependencies: Vec<(String, String)>,
    /// Detected framework identifiers with version strings.
    pub frameworks: Vec<String>,
    /// Pattern-matched HTTP route registrations.
    pub endpoints: Vec<RouteHit>,
    /// Component files grouped by UI-framework extension.
    pub components: Vec<(String, Vec<String>)>,
    /// Build-script name → command mapping.
    pub build_scripts: Vec<(String, String)>,
    /// Database schema artifacts (schema files, SQL files, model files).
    pub schema_files: Vec<String>,
}

impl AnalysisReport {
    /// Guidance document: the filled tech-stack line.
    pub fn tech_stack_line(&self) -> String {
        let stack = if self.tech_stack.is_empty() {
            UNDETERMINED.to_string()
        } else {
            self.tech_stack.join(", ")
        };
        format!("- **Tech Stack**: {stack}")
    }

    /// Guidance document: the filled main-file line.
    pub fn main_file_line(&self) -> String {
        let main = self
            .main_files
            .first()
            .map(MainFile::summary)
            .unwrap_or_else(|| UNDETERMINED.to_string());
        format!("- **Main File**: {main}")
    }

    /// Guidance document: the filled one-line size summary.
    pub fn core_mechanic_line(&self) -> String {
        format!(
            "- **Core Mechanic**: {} lines of code across {} directories",
            self.total_lines,
            self.top_dirs.len()
        )
    }
}

impl DeepReport {
    /// Architecture document: the regenerated `## Tech Stack` section.
    pub fn tech_stack_section(&self) -> String {
        let mut section = String::from("## Tech Stack\n\n");

        for framework in &self.frameworks {
            section.push_str(&format!("- **{framework}**\n"));
        }

        if !self.dependencies.is_empty() {
            section.push_str("\n### Key Dependencies\n");
            for (name, version) in self.dependencies.iter().take(10) {
                section.push_str(&format!("- {name}: {version}\n"));
            }
        }

        if !self.endpoints.is_empty() {
            section.push_str("\n## API Endpoints\n\n");
            for route in self.endpoints.iter().take(10) {
                section.push_str(&format!(
                    "- {} {} ({})\n",
                    route.method, route.path, route.file
                ));
            }
        }

        section
    }

    /// Build document: the regenerated `## Available Scripts` section.
    pub fn scripts_section(&self) -> String {
        let mut section = String::from("## Available Scripts\n\n");
        for (name, command) in &self.build_scripts {
            section.push_str(&format!("### {name}\n```bash\n{command}\n```\n\n"));
        }
        section
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
