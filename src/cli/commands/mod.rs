//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`]; running with no subcommand resolves.

pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod network;
pub mod resolve;
pub mod status;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
