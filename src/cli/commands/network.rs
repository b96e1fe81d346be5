//! Network command implementation.
//!
//! The `canister-env network` command prints the active network without
//! touching any registry.

use serde::Serialize;

use crate::cli::args::NetworkArgs;
use crate::error::{CanisterEnvError, Result};
use crate::network::NetworkSelector;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The network command implementation.
pub struct NetworkCommand {
    ctx: CommandContext,
    args: NetworkArgs,
}

#[derive(Serialize)]
struct NetworkReport<'a> {
    network: &'a str,
    source: String,
    production: bool,
}

impl NetworkCommand {
    /// Create a new network command.
    pub fn new(ctx: CommandContext, args: NetworkArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for NetworkCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config()?;
        let signals = self.ctx.signals(
            &config,
            self.args.network.as_deref(),
            self.args.mode.as_deref(),
        );

        let selector = NetworkSelector::from_config(&config);
        let resolved = selector.select(&signals);

        if self.args.json {
            let report = NetworkReport {
                network: &resolved.name,
                source: resolved.source.to_string(),
                production: selector.is_production(&resolved.name),
            };
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CanisterEnvError::Other(e.into()))?;
            ui.output(&format!("{}\n", json));
        } else {
            ui.output(&format!("{}\n", resolved.name));
            ui.field("Source", &resolved.source.to_string());
        }

        Ok(CommandResult::success())
    }
}
