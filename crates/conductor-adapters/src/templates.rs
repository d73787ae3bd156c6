//! Built-in template bodies.
//!
//! The markdown documents ship inside the binary via `include_str!`, keyed
//! by the same relative paths the core template set uses. Bodies are opaque
//! here; placeholder tokens inside them belong to the core patcher.

use conductor_core::{
    application::{ApplicationError, ports::TemplateStore},
    error::ConductorResult,
};

/// Template store backed by the documents embedded at compile time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for BuiltinTemplates {
    fn body(&self, rel_path: &str) -> ConductorResult<String> {
        let body: &str = match rel_path {
            "CONDUCTOR.md" => include_str!("../templates/CONDUCTOR.md"),
            "CLAUDE.md" => include_str!("../templates/CLAUDE.md"),
            "ARCHITECTURE.md" => include_str!("../templates/ARCHITECTURE.md"),
            "BUILD.md" => include_str!("../templates/BUILD.md"),
            "DESIGN.md" => include_str!("../templates/DESIGN.md"),
            "UIUX.md" => include_str!("../templates/UIUX.md"),
            "CONFIG.md" => include_str!("../templates/CONFIG.md"),
            "DATA_MODEL.md" => include_str!("../templates/DATA_MODEL.md"),
            "API.md" => include_str!("../templates/API.md"),
            "TEST.md" => include_str!("../templates/TEST.md"),
            "CONTRIBUTING.md" => include_str!("../templates/CONTRIBUTING.md"),
            "ERRORS.md" => include_str!("../templates/ERRORS.md"),
            "PLAYBOOKS/DEPLOY.md" => include_str!("../templates/PLAYBOOKS/DEPLOY.md"),
            other => {
                return Err(ApplicationError::TemplateMissing {
                    rel_path: other.to_string(),
                }
                .into());
            }
        };
        Ok(body.to_string())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
