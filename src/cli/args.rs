//! CLI argument definitions.
//!
//! All Clap derive structs for `wikiforge` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Taxonomy scaffolder for a Docusaurus study wiki.
#[derive(Parser, Debug)]
#[command(name = "wikiforge", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "WIKIFORGE_COLOR")]
    pub color: ColorChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Materialize the topic taxonomy into the docs tree.
    Scaffold(ScaffoldArgs),

    /// Validate a topic table without writing anything.
    Validate(ValidateArgs),

    /// List resolved topics and their sidebar positions.
    List(ListArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Scaffold Command
// ============================================================================

/// Arguments for `scaffold`.
#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// Docs root directory to scaffold into.
    #[arg(short, long, default_value = "docs", env = "WIKIFORGE_DOCS_ROOT")]
    pub root: PathBuf,

    /// Path to an external YAML topic table (defaults to the builtin table).
    #[arg(short, long, env = "WIKIFORGE_TOPICS")]
    pub topics: Option<PathBuf>,

    /// Report what would be written without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

// ============================================================================
// Validate Command
// ============================================================================

/// Arguments for `validate`.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to an external YAML topic table (defaults to the builtin table).
    #[arg(short, long, env = "WIKIFORGE_TOPICS")]
    pub topics: Option<PathBuf>,

    /// Enable strict validation (warnings become errors).
    #[arg(long)]
    pub strict: bool,
}

// ============================================================================
// List Command
// ============================================================================

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Path to an external YAML topic table (defaults to the builtin table).
    #[arg(short, long, env = "WIKIFORGE_TOPICS")]
    pub topics: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_asserts() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scaffold_defaults() {
        let cli = Cli::try_parse_from(["wikiforge", "scaffold"]).unwrap();
        match cli.command {
            Commands::Scaffold(args) => {
                assert_eq!(args.root, PathBuf::from("docs"));
                assert!(args.topics.is_none());
                assert!(!args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn scaffold_accepts_root_and_dry_run() {
        let cli =
            Cli::try_parse_from(["wikiforge", "scaffold", "--root", "site/docs", "--dry-run"])
                .unwrap();
        match cli.command {
            Commands::Scaffold(args) => {
                assert_eq!(args.root, PathBuf::from("site/docs"));
                assert!(args.dry_run);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbosity_is_counted() {
        let cli = Cli::try_parse_from(["wikiforge", "-vv", "list"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["wikiforge", "frobnicate"]).is_err());
    }
}
