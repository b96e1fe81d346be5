//! Status command implementation.
//!
//! The `canister-env status` command shows which registries were found and
//! whether the active network can be resolved.

use serde::Serialize;

use crate::cli::args::StatusArgs;
use crate::error::{CanisterEnvError, Result};
use crate::registry::{RegistryKind, RegistrySlot};
use crate::resolver::CanisterEnvResolver;
use crate::ui::UserInterface;

use super::context::CommandContext;
use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    ctx: CommandContext,
    args: StatusArgs,
}

#[derive(Debug, Serialize)]
struct RegistryStatus {
    kind: String,
    path: String,
    present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    canisters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct StatusReport {
    network: String,
    network_source: String,
    serving_registry: String,
    ready: bool,
    registries: Vec<RegistryStatus>,
}

impl RegistryStatus {
    fn from_slot(kind: RegistryKind, slot: &RegistrySlot) -> Self {
        let (canisters, error) = match slot.registry() {
            Some(registry) => match registry.canister_names() {
                Ok(names) => (Some(names.into_iter().map(str::to_string).collect()), None),
                Err(e) => (None, Some(e.to_string())),
            },
            None => (None, None),
        };

        Self {
            kind: kind.to_string(),
            path: slot.path().display().to_string(),
            present: slot.is_present(),
            canisters,
            error,
        }
    }
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(ctx: CommandContext, args: StatusArgs) -> Self {
        Self { ctx, args }
    }
}

impl Command for StatusCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = self.ctx.load_config()?;
        let signals = self.ctx.signals(&config, None, None);
        let resolver = CanisterEnvResolver::new(self.ctx.project_root(), &config);

        let registries = resolver.load_registries();
        let network = resolver.selector().select(&signals);
        let serving = resolver.builder().registry_kind(&network.name);
        let ready = resolver
            .builder()
            .canister_variables(&network.name, &registries)
            .is_ok();

        let report = StatusReport {
            network: network.name.clone(),
            network_source: network.source.to_string(),
            serving_registry: serving.to_string(),
            ready,
            registries: [RegistryKind::Local, RegistryKind::Production]
                .into_iter()
                .map(|kind| RegistryStatus::from_slot(kind, registries.slot(kind)))
                .collect(),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .map_err(|e| CanisterEnvError::Other(e.into()))?;
            ui.output(&format!("{}\n", json));
            return Ok(CommandResult::success());
        }

        ui.field(
            "Network",
            &format!("{} ({})", report.network, report.network_source),
        );
        for status in &report.registries {
            let detail = match (&status.canisters, &status.error) {
                (Some(names), _) => format!("{} ({} canisters)", status.path, names.len()),
                (None, Some(error)) => format!("{} (invalid: {})", status.path, error),
                (None, None) => format!("{} (not found)", status.path),
            };
            ui.field(&format!("{} registry", capitalize(&status.kind)), &detail);

            if ui.output_mode().shows_detail() {
                for name in status.canisters.iter().flatten() {
                    ui.message(&format!("  {}", name));
                }
            }
        }

        if report.ready {
            ui.success(&format!(
                "Network '{}' resolves from the {} registry",
                report.network, report.serving_registry
            ));
        } else {
            ui.warning(&format!(
                "Network '{}' needs the {} registry, which is missing or invalid",
                report.network, report.serving_registry
            ));
        }

        Ok(CommandResult::success())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
