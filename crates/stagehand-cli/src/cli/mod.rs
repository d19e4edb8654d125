//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stagehand",
    bin_name = "stagehand",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Stage/region-aware service scaffolding",
    long_about = "Stagehand creates deployable service projects addressed \
                  by name, stage and region.",
    after_help = "EXAMPLES:\n\
        \x20 stagehand create my-service --stage dev --region aws_useast1\n\
        \x20 stagehand create            # interactive: prompts for the identifiers\n\
        \x20 stagehand completions bash > /usr/share/bash-completion/completions/stagehand",
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
    /// Create a new service project.
    #[command(
        visible_alias = "c",
        about = "Create a new service project",
        after_help = "EXAMPLES:\n\
            \x20 stagehand create my-service --stage dev  --region aws_useast1\n\
            \x20 stagehand create billing    --stage prod --region aws_euwest1 --yes\n\
            \x20 stagehand create my-service --stage dev --region aws_useast1 --dry-run"
    )]
    Create(CreateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stagehand completions bash > ~/.local/share/bash-completion/completions/stagehand\n\
            \x20 stagehand completions zsh  > ~/.zfunc/_stagehand\n\
            \x20 stagehand completions fish > ~/.config/fish/completions/stagehand.fish"
    )]
    Completions(CompletionsArgs),
}

// ── create ────────────────────────────────────────────────────────────────────

/// Arguments for `stagehand create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Service name.  Omit it in an interactive session to be prompted.
    #[arg(value_name = "NAME", help = "Service name")]
    pub name: Option<String>,

    /// Deployment stage label.
    #[arg(
        short = 's',
        long = "stage",
        value_name = "STAGE",
        help = "Deployment stage (e.g. dev, prod)"
    )]
    pub stage: Option<String>,

    /// Deployment region label.
    #[arg(
        short = 'r',
        long = "region",
        value_name = "REGION",
        help = "Deployment region (e.g. aws_useast1)"
    )]
    pub region: Option<String>,

    /// Skip the confirmation prompt.
    #[arg(
        short = 'y',
        long = "yes",
        help = "Skip confirmation and create immediately"
    )]
    pub yes: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stagehand completions`.
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
    fn parse_create_command() {
        let cli = Cli::parse_from([
            "stagehand",
            "create",
            "my-service",
            "--stage",
            "dev",
            "--region",
            "aws_useast1",
        ]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert_eq!(args.name.as_deref(), Some("my-service"));
        assert_eq!(args.stage.as_deref(), Some("dev"));
        assert_eq!(args.region.as_deref(), Some("aws_useast1"));
    }

    #[test]
    fn create_name_is_optional() {
        let cli = Cli::parse_from(["stagehand", "create", "--stage", "dev"]);
        let Commands::Create(args) = cli.command else {
            panic!("expected Create command");
        };
        assert!(args.name.is_none());
        assert!(args.region.is_none());
    }

    #[test]
    fn create_alias_works() {
        let cli = Cli::parse_from(["stagehand", "c", "my-service"]);
        assert!(matches!(cli.command, Commands::Create(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["stagehand", "--quiet", "--verbose", "create", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn completions_parses_shell() {
        let cli = Cli::parse_from(["stagehand", "completions", "zsh"]);
        let Commands::Completions(args) = cli.command else {
            panic!("expected Completions command");
        };
        assert!(matches!(args.shell, Shell::Zsh));
    }
}
