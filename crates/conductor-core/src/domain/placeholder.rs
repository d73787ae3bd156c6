//! Placeholder patching for generated documents.
//!
//! Every substitution the tool ever performs against a markdown body goes
//! through this module, so the contract "absent token ⇒ no-op" is enforced
//! in exactly one place. Three shapes of patch exist:
//!
//! - **line markers** — a fixed label line with a bracketed instruction,
//!   replaced in full at its first occurrence;
//! - **sections** — a `## Heading` block replaced (or appended) wholesale;
//! - **the version marker** — an HTML comment rewritten to the running
//!   tool version.
//!
//! Re-running a patch against already-substituted text is a no-op by
//! construction: the marker is gone.

/// Guidance document marker: tech stack summary.
pub const TECH_STACK_MARKER: &str = "- **Tech Stack**: [List core technologies]";

/// Guidance document marker: primary file and line count.
pub const MAIN_FILE_MARKER: &str = "- **Main File**: [Primary code file and line count]";

/// Guidance document marker: one-line codebase-size summary.
pub const CORE_MECHANIC_MARKER: &str = "- **Core Mechanic**: [One-line description]";

/// Architecture document section replaced by deep analysis.
pub const TECH_STACK_HEADING: &str = "## Tech Stack";

/// Build document section replaced (or appended) by deep analysis.
pub const SCRIPTS_HEADING: &str = "## Available Scripts";

const VERSION_MARKER_PREFIX: &str = "<!-- Generated by Conductor v";
const VERSION_MARKER_SUFFIX: &str = " -->";

/// Replace the first occurrence of `marker` with `replacement`.
///
/// Returns `None` when the marker is absent — the caller must treat that as
/// "leave the document alone", never as an error.
pub fn replace_first(content: &str, marker: &str, replacement: &str) -> Option<String> {
    content.find(marker).map(|idx| {
        let mut out = String::with_capacity(content.len() + replacement.len());
        out.push_str(&content[..idx]);
        out.push_str(replacement);
        out.push_str(&content[idx + marker.len()..]);
        out
    })
}

/// Replace an entire `## Heading` section (heading line through the next
/// `## ` heading, or end of document) with `section`.
///
/// `section` is expected to carry its own heading line. Returns `None` when
/// the heading is absent.
pub fn replace_section(content: &str, heading: &str, section: &str) -> Option<String> {
    let start = find_heading(content, heading)?;
    let after = &content[start + heading.len()..];
    let end = after
        .find("\n## ")
        .map(|rel| start + heading.len() + rel + 1)
        .unwrap_or(content.len());

    let mut out = String::with_capacity(content.len() + section.len());
    out.push_str(&content[..start]);
    out.push_str(section);
    if !section.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&content[end..]);
    Some(out)
}

/// Like [`replace_section`], but appends the section when the heading is
/// absent instead of no-opping.
pub fn replace_or_append_section(content: &str, heading: &str, section: &str) -> String {
    if let Some(patched) = replace_section(content, heading, section) {
        return patched;
    }
    let mut out = content.to_string();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    out.push('\n');
    out.push_str(section);
    if !section.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Rewrite the `<!-- Generated by Conductor vX.Y.Z -->` marker to `version`.
///
/// Returns `None` when the document carries no marker.
pub fn rewrite_version_marker(content: &str, version: &str) -> Option<String> {
    let start = content.find(VERSION_MARKER_PREFIX)?;
    let rest = &content[start + VERSION_MARKER_PREFIX.len()..];
    let end = rest.find(VERSION_MARKER_SUFFIX)?;

    let mut out = String::with_capacity(content.len());
    out.push_str(&content[..start]);
    out.push_str(VERSION_MARKER_PREFIX);
    out.push_str(version);
    out.push_str(&content[start + VERSION_MARKER_PREFIX.len() + end..]);
    Some(out)
}

/// Render the version marker for freshly generated documents.
pub fn version_marker(version: &str) -> String {
    format!("{VERSION_MARKER_PREFIX}{version}{VERSION_MARKER_SUFFIX}")
}

/// Find `heading` at the start of the document or of a line.
///
/// A plain substring search would also match `### Tech Stack` or an inline
/// mention; anchoring to line starts keeps the patch from eating the wrong
/// block.
fn find_heading(content: &str, heading: &str) -> Option<usize> {
    if content.starts_with(heading) {
        return Some(0);
    }
    let needle = format!("\n{heading}");
    content.find(&needle).map(|idx| idx + 1)
}

// ── tests ─────────────────────────────────────────────────────────────────────
