//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// canister-env - Resolve canister IDs for the active network into build variables.
#[derive(Debug, Parser)]
#[command(name = "canister-env")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .canister-env.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print definitions and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve build variables (default if no command specified)
    Resolve(ResolveArgs),

    /// Show the active network
    Network(NetworkArgs),

    /// Show which registries are available
    Status(StatusArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `resolve` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ResolveArgs {
    /// Network to resolve (overrides DFX_NETWORK)
    #[arg(long, value_name = "NETWORK")]
    pub network: Option<String>,

    /// Build mode (overrides NODE_ENV)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

/// Arguments for the `network` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NetworkArgs {
    /// Network override (overrides DFX_NETWORK)
    #[arg(long, value_name = "NETWORK")]
    pub network: Option<String>,

    /// Build mode (overrides NODE_ENV)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `status` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_resolve_with_flags() {
        let cli = Cli::parse_from([
            "canister-env",
            "resolve",
            "--network",
            "ic",
            "--mode",
            "production",
            "--format",
            "json",
        ]);
        match cli.command {
            Some(Commands::Resolve(args)) => {
                assert_eq!(args.network.as_deref(), Some("ic"));
                assert_eq!(args.mode.as_deref(), Some("production"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn resolve_format_defaults_to_dotenv() {
        let cli = Cli::parse_from(["canister-env", "resolve"]);
        match cli.command {
            Some(Commands::Resolve(args)) => assert_eq!(args.format, OutputFormat::Dotenv),
            other => panic!("expected resolve, got {:?}", other),
        }
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::parse_from(["canister-env", "--quiet"]);
        assert!(cli.command.is_none());
        assert!(cli.quiet);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["canister-env", "status", "--project", "/tmp/app", "--json"]);
        assert_eq!(cli.project, Some(PathBuf::from("/tmp/app")));
        assert!(matches!(cli.command, Some(Commands::Status(StatusArgs { json: true }))));
    }

    #[test]
    fn rejects_unknown_format() {
        let result = Cli::try_parse_from(["canister-env", "resolve", "--format", "toml"]);
        assert!(result.is_err());
    }
}
