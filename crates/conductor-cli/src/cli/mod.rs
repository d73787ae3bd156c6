//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "conductor",
    bin_name = "conductor",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3bc} Documentation scaffolding for AI-assisted development",
    long_about = "Conductor installs a markdown documentation framework into \
                  your project, fills it from a light codebase analysis, and \
                  upgrades it later without losing your edits.",
    after_help = "EXAMPLES:\n\
        \x20 conductor init                  # core templates in the current directory\n\
        \x20 conductor init --full           # all fourteen documentation paths\n\
        \x20 conductor init ./docs --deepscan # deep analysis into ./docs\n\
        \x20 conductor backup && conductor upgrade --clean && conductor restore",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialise the documentation framework in a project.
    #[command(
        visible_alias = "i",
        about = "Initialise the documentation framework",
        after_help = "EXAMPLES:\n\
            \x20 conductor init                # core templates only\n\
            \x20 conductor init --full         # all fourteen paths\n\
            \x20 conductor init --deepscan     # deep codebase analysis\n\
            \x20 conductor init ./docs         # initialise in ./docs\n\
            \x20 conductor init --force --yes  # overwrite without prompting\n\
            \x20 conductor init --no-analyze   # skip codebase analysis\n\
            \n\
            The framework creates a documentation suite including:\n\
            - CONDUCTOR.md (master index)\n\
            - CLAUDE.md (AI assistant guidance)\n\
            - JOURNAL.md (development changelog)\n\
            - ARCHITECTURE.md, BUILD.md and more"
    )]
    Init(InitArgs),

    /// Step 1/3 of the upgrade flow: back up your user documents.
    #[command(
        about = "Backup JOURNAL.md and CLAUDE.md before an upgrade",
        after_help = "This is Step 1 of the 3-step upgrade process:\n\
            \x20 1. conductor backup            (backup your data)\n\
            \x20 2. conductor upgrade --clean   (fresh install)\n\
            \x20 3. conductor restore           (restore your data)\n\
            \n\
            What gets backed up:\n\
            - JOURNAL.md (your development history)\n\
            - CLAUDE.md (your customizations)\n\
            \n\
            The backup is stored in ./conductor-backup/."
    )]
    Backup(BackupArgs),

    /// Step 2/3 of the upgrade flow: clean reinstall of the scaffold.
    #[command(
        about = "Clean reinstall of the scaffold (run backup first!)",
        after_help = "WARNING: this DELETES scaffold files. Run backup first!\n\
            \n\
            This is Step 2 of the 3-step upgrade process:\n\
            \x20 1. conductor backup            (backup your data)  done\n\
            \x20 2. conductor upgrade --clean   (YOU ARE HERE)\n\
            \x20 3. conductor restore           (restore your data)\n\
            \n\
            EXAMPLES:\n\
            \x20 conductor upgrade --clean          # clean reinstall (safe with backup)\n\
            \x20 conductor upgrade --clean --full   # reinstall all fourteen paths"
    )]
    Upgrade(UpgradeArgs),

    /// Step 3/3 of the upgrade flow: restore your backed up documents.
    #[command(
        about = "Restore backed up files after an upgrade",
        after_help = "This is Step 3 of the 3-step upgrade process:\n\
            \x20 1. conductor backup            done\n\
            \x20 2. conductor upgrade --clean   done\n\
            \x20 3. conductor restore           (YOU ARE HERE)\n\
            \n\
            Restores JOURNAL.md and CLAUDE.md from ./conductor-backup/ and\n\
            cleans up the backup folder."
    )]
    Restore(RestoreArgs),

    /// Generate a security and health checkup prompt.
    #[command(
        about = "Generate a security and health checkup prompt",
        after_help = "Generates a prompt for your AI assistant to audit the\n\
            codebase for common security issues. Informational only; no\n\
            files are modified.\n\
            \n\
            EXAMPLES:\n\
            \x20 conductor checkup          # check the current directory\n\
            \x20 conductor checkup -p ./src # check a specific directory"
    )]
    Checkup(CheckupArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 conductor completions bash > ~/.local/share/bash-completion/completions/conductor\n\
            \x20 conductor completions zsh  > ~/.zfunc/_conductor\n\
            \x20 conductor completions fish > ~/.config/fish/completions/conductor.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `conductor init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory (defaults to the current directory).
    #[arg(value_name = "DIR", help = "Target directory")]
    pub dir: Option<PathBuf>,

    /// Overwrite existing files (after confirmation).
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Create the full fourteen-path scaffold.
    #[arg(
        long = "full",
        help = "Create all documentation templates (default: core templates only)"
    )]
    pub full: bool,

    /// Comprehensive codebase analysis (slower but more detailed).
    #[arg(long = "deepscan", help = "Perform comprehensive codebase analysis")]
    pub deepscan: bool,

    /// Skip codebase analysis entirely.
    #[arg(long = "no-analyze", help = "Skip codebase analysis")]
    pub no_analyze: bool,

    /// Skip confirmation prompts.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts (use with caution)")]
    pub yes: bool,
}

// ── backup ────────────────────────────────────────────────────────────────────

/// Arguments for `conductor backup`.
#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Target directory (defaults to the current directory).
    #[arg(value_name = "DIR", help = "Target directory")]
    pub dir: Option<PathBuf>,
}

// ── upgrade ───────────────────────────────────────────────────────────────────

/// Arguments for `conductor upgrade`.
#[derive(Debug, Args)]
pub struct UpgradeArgs {
    /// Target directory (defaults to the current directory).
    #[arg(value_name = "DIR", help = "Target directory")]
    pub dir: Option<PathBuf>,

    /// Required safety flag: confirm the destructive clean reinstall.
    #[arg(long = "clean", help = "Perform clean reinstall (requires backup first)")]
    pub clean: bool,

    /// Proceed without checking for a backup.
    #[arg(short = 'f', long = "force", help = "Force upgrade without checking for backup")]
    pub force: bool,

    /// Reinstall the full fourteen-path scaffold.
    #[arg(long = "full", help = "Create all documentation templates")]
    pub full: bool,

    /// Skip confirmation prompts.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation prompts")]
    pub yes: bool,
}

// ── restore ───────────────────────────────────────────────────────────────────

/// Arguments for `conductor restore`.
#[derive(Debug, Args)]
pub struct RestoreArgs {
    /// Target directory (defaults to the current directory).
    #[arg(value_name = "DIR", help = "Target directory")]
    pub dir: Option<PathBuf>,
}

// ── checkup ───────────────────────────────────────────────────────────────────

/// Arguments for `conductor checkup`.
#[derive(Debug, Args)]
pub struct CheckupArgs {
    /// Path to scan.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "PATH",
        default_value = ".",
        help = "Path to scan (defaults to current directory)"
    )]
    pub path: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `conductor completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
