//! Command-line interface for canister-env.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, NetworkArgs, ResolveArgs, StatusArgs};
pub use commands::{Command, CommandContext, CommandDispatcher, CommandResult};
