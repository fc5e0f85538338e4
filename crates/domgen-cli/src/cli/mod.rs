//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "domgen",
    bin_name = "domgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Domain scaffolding from template trees",
    long_about = "Domgen generates a complete domain directory \
                  (entities, handlers, repositories, ...) from the template \
                  trees declared in your project manifest.",
    after_help = "EXAMPLES:\n\
        \x20 domgen init                # write a starter domgen.toml + templates\n\
        \x20 domgen new user            # scaffold the 'user' domain\n\
        \x20 domgen new order --force   # regenerate, replacing an existing domain\n\
        \x20 domgen inspect user        # list the generated tree\n\
        \x20 domgen completions bash > /usr/share/bash-completion/completions/domgen",
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
    /// Scaffold a new domain from the manifest's template trees.
    #[command(
        visible_alias = "n",
        about = "Scaffold a new domain",
        after_help = "EXAMPLES:\n\
            \x20 domgen new user\n\
            \x20 domgen new order --force\n\
            \x20 domgen new billing --dry-run"
    )]
    New(NewArgs),

    /// List the directory tree of an existing domain.
    #[command(
        visible_alias = "i",
        about = "Inspect a generated domain tree",
        after_help = "EXAMPLES:\n\
            \x20 domgen inspect user\n\
            \x20 domgen inspect user --format json"
    )]
    Inspect(InspectArgs),

    /// Write a starter manifest and template tree.
    #[command(
        about = "Initialise a project manifest",
        after_help = "EXAMPLES:\n\
            \x20 domgen init\n\
            \x20 domgen init --force   # overwrite an existing manifest"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 domgen completions bash > ~/.local/share/bash-completion/completions/domgen\n\
            \x20 domgen completions zsh  > ~/.zfunc/_domgen\n\
            \x20 domgen completions fish > ~/.config/fish/completions/domgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `domgen new`.
#[derive(Debug, Args)]
pub struct NewArgs {
    /// Domain name; becomes the directory name and is substituted into
    /// template file names.
    #[arg(value_name = "DOMAIN", help = "Domain name (e.g. user, order)")]
    pub domain: String,

    /// Override the manifest's root directory for this run.
    #[arg(
        long = "root",
        value_name = "DIR",
        help = "Override the manifest's root directory"
    )]
    pub root: Option<std::path::PathBuf>,

    /// Replace an existing domain directory (destructive).
    #[arg(long = "force", help = "Remove and regenerate an existing domain")]
    pub force: bool,

    /// Preview the files that would be created without writing any.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── inspect ───────────────────────────────────────────────────────────────────

/// Arguments for `domgen inspect`.
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Domain name to inspect (resolved against the manifest's root).
    #[arg(value_name = "DOMAIN", help = "Domain name to inspect")]
    pub domain: String,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "tree",
        help = "Output format"
    )]
    pub format: InspectFormat,
}

/// Output format for the `inspect` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InspectFormat {
    /// Directories then files, one name per line.
    Tree,
    /// JSON object with `dirs` and `files` arrays.
    Json,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `domgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing manifest.
    #[arg(short = 'f', long = "force", help = "Overwrite existing manifest")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `domgen completions`.
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_new_command() {
        let cli = Cli::parse_from(["domgen", "new", "user"]);
        match cli.command {
            Commands::New(args) => {
                assert_eq!(args.domain, "user");
                assert!(!args.force);
                assert!(!args.dry_run);
            }
            other => panic!("expected New, got {other:?}"),
        }
    }

    #[test]
    fn new_accepts_force_and_dry_run() {
        let cli = Cli::parse_from(["domgen", "new", "order", "--force", "--dry-run"]);
        if let Commands::New(args) = cli.command {
            assert!(args.force);
            assert!(args.dry_run);
        } else {
            panic!("expected New command");
        }
    }

    #[test]
    fn inspect_alias_works() {
        let cli = Cli::parse_from(["domgen", "i", "user"]);
        assert!(matches!(cli.command, Commands::Inspect(_)));
    }

    #[test]
    fn manifest_flag_is_global() {
        let cli = Cli::parse_from(["domgen", "new", "user", "--manifest", "custom.toml"]);
        assert_eq!(
            cli.global.manifest,
            Some(std::path::PathBuf::from("custom.toml"))
        );
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["domgen", "--quiet", "--verbose", "new", "user"]);
        assert!(result.is_err());
    }
}
