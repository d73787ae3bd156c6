//! Journal document generation.
//!
//! The journal is an append-style log of dated sections under a single
//! top-level heading. Each section follows the fixed five-field
//! What/Why/How/Issues/Result structure, and the newest section is inserted
//! immediately below the top-level heading, above everything that came
//! before.
//!
//! Timestamps are passed in as pre-formatted strings (`YYYY-MM-DD HH:MM`)
//! so these functions stay deterministic; the engine owns the clock.

/// Top-level heading of a generated journal.
pub const JOURNAL_HEADING: &str = "# Engineering Journal";

/// A fresh journal with one initial entry.
pub fn initial_journal(version: &str, timestamp: &str) -> String {
    format!(
        "{JOURNAL_HEADING}\n\
         \n\
         ## {timestamp}\n\
         \n\
         ### Documentation Framework Setup\n\
         - **What**: Installed the Conductor documentation scaffold v{version}\n\
         - **Why**: Improve AI navigation and code maintainability\n\
         - **How**: Ran `conductor init` against the project directory\n\
         - **Issues**: None - clean installation\n\
         - **Result**: Documentation framework ready for customization\n\
         \n\
         ---\n\
         \n"
    )
}

/// The entry recorded after a completed clean-upgrade restore.
pub fn upgrade_entry(version: &str, timestamp: &str) -> String {
    format!(
        "\n\
         ## {timestamp}\n\
         \n\
         ### Conductor Clean Upgrade\n\
         - **What**: Performed clean upgrade to v{version} using the backup/restore flow\n\
         - **Why**: Pick up the latest framework templates without losing history\n\
         - **How**: 3-step process: backup, clean install, restore\n\
         - **Issues**: None - user documents came back from the BackupSet\n\
         - **Result**: Framework upgraded with all user data preserved\n\
         \n\
         ---\n\
         \n"
    )
}

/// Insert `entry` immediately after the journal's top-level heading.
///
/// Concretely: at the first `\n## ` boundary, so the new section lands above
/// the previously-newest one. A journal with no section yet gets the entry
/// appended. All prior content is preserved byte-for-byte.
pub fn insert_entry(content: &str, entry: &str) -> String {
    match content.find("\n## ") {
        Some(idx) => {
            let mut out = String::with_capacity(content.len() + entry.len());
            out.push_str(&content[..idx]);
            out.push_str(entry);
            out.push_str(&content[idx..]);
            out
        }
        None => {
            let mut out = content.to_string();
            out.push_str(entry);
            out
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
