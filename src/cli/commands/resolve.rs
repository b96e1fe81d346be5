//! Resolve command implementation.
//!
//! The `canister-env resolve` command runs the full resolution, registers
//! the result with an in-memory pipeline, and writes what the pipeline
//! collected to stdout in the requested format.

use crate::cli::args::ResolveArgs;
use crate::environment::StaticDefines;
use crate::error::{CanisterEnvError, Result};
use crate::output::write_report;
use crate::resolver::CanisterEnvResolver;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The resolve command implementation.
pub struct ResolveCommand {
    ctx: CommandContext,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(ctx: CommandContext, args: ResolveArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config()?;
        let signals = self.ctx.signals(
            &config,
            self.args.network.as_deref(),
            self.args.mode.as_deref(),
        );

        let resolver = CanisterEnvResolver::new(self.ctx.project_root(), &config);
        let mut defines = StaticDefines::new();
        let resolution = resolver.resolve_into(&signals, &mut defines)?;

        let mut buf = Vec::new();
        write_report(self.args.format, &resolution.report(&defines), &mut buf)?;
        let rendered = String::from_utf8(buf).map_err(|e| CanisterEnvError::Other(e.into()))?;
        ui.output(&rendered);

        let count = resolution.defines.canisters.len();
        if count == 0 {
            ui.warning(&format!(
                "No canisters have an identifier for network '{}' in {}",
                resolution.network.name,
                resolution.registry_path.display()
            ));
        } else {
            ui.success(&format!(
                "Resolved {} canister ID{} for network '{}' ({})",
                count,
                if count == 1 { "" } else { "s" },
                resolution.network.name,
                resolution.network.source
            ));
        }

        Ok(CommandResult::success())
    }
}
