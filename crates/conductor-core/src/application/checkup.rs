//! Security and health checkup prompt generation.
//!
//! Pure text: the CLI prints the result in a framed box for the user to
//! paste into their assistant. No filesystem mutation, no scanning here.

use std::path::Path;

/// Build the checkup prompt for `scan_path`.
pub fn checkup_prompt(scan_path: &Path) -> String {
    format!(
        "Please perform a security and health checkup of the codebase at: {}\n\
         \n\
         Check for:\n\
         1. Exposed .env files or API keys in code\n\
         2. Unsafe innerHTML usage that could lead to XSS\n\
         3. Missing .gitignore entries for sensitive files\n\
         4. Hardcoded credentials or secrets\n\
         5. Common security anti-patterns\n\
         \n\
         IMPORTANT:\n\
         - Only report CRITICAL security issues\n\
         - Do not modify any code\n\
         - Be silent if no issues are found\n\
         - Present findings as warnings for review\n\
         \n\
         Start the checkup with: \"Conductor is running a security checkup...\"",
        scan_path.display()
    )
}
