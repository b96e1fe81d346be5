//! Output formatters for resolved definitions.
//!
//! This module renders what a [`StaticDefines`] pipeline collected from a
//! resolution in the formats build tooling consumes: dotenv files, shell
//! `export` lines, Cargo build-script directives and JSON.
//!
//! [`StaticDefines`]: crate::environment::StaticDefines

pub mod cargo;
pub mod dotenv;
pub mod json;
pub mod shell;

use crate::resolver::ResolutionReport;
use std::io::Write;

pub use cargo::CargoFormatter;
pub use dotenv::DotenvFormatter;
pub use json::JsonFormatter;
pub use shell::ShellFormatter;

/// Output format for resolved definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// `KEY=value` lines
    #[default]
    Dotenv,
    /// JSON object with network, variables and bindings
    Json,
    /// `export KEY='value'` lines
    Shell,
    /// `cargo:rustc-env=KEY=value` lines
    Cargo,
}

/// Trait for formatting resolved definitions.
pub trait DefineFormatter {
    /// Format a report to the given writer.
    fn format<W: Write>(
        &self,
        report: &ResolutionReport<'_>,
        writer: &mut W,
    ) -> std::io::Result<()>;
}

/// Write `report` in `format`.
pub fn write_report<W: Write>(
    format: OutputFormat,
    report: &ResolutionReport<'_>,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Dotenv => DotenvFormatter.format(report, writer),
        OutputFormat::Json => JsonFormatter.format(report, writer),
        OutputFormat::Shell => ShellFormatter.format(report, writer),
        OutputFormat::Cargo => CargoFormatter.format(report, writer),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::config::ResolverConfig;
    use crate::environment::{DefineSet, StaticDefines};
    use crate::network::{NetworkSource, ResolvedNetwork};
    use crate::registry::RegistryKind;
    use crate::resolver::Resolution;
    use std::path::PathBuf;

    /// A resolution with two canisters on the local network.
    pub fn resolution() -> Resolution {
        let defines = DefineSet {
            canisters: [
                ("SWAP_BACKEND_CANISTER_ID", "rrkah-fqaaa-aaaaa-aaaaq-cai"),
                ("LEDGER_CANISTER_ID", "ryjl3-tyaaa-aaaaa-aaaba-cai"),
            ]
            .into_iter()
            .collect(),
            statics: [("NODE_ENV", "development")].into_iter().collect(),
            bindings: ResolverConfig::default().bindings,
        };

        Resolution {
            network: ResolvedNetwork {
                name: "local".to_string(),
                source: NetworkSource::Default,
            },
            registry: RegistryKind::Local,
            registry_path: PathBuf::from(".dfx/local/canister_ids.json"),
            defines,
        }
    }

    /// Register `resolution` with a fresh pipeline.
    pub fn defines(resolution: &Resolution) -> StaticDefines {
        let mut defines = StaticDefines::new();
        resolution.defines.register_with(&mut defines).unwrap();
        defines
    }

    /// Render with a formatter into a string.
    pub fn render<F: super::DefineFormatter>(formatter: F, resolution: &Resolution) -> String {
        let defines = defines(resolution);
        let mut buf = Vec::new();
        formatter
            .format(&resolution.report(&defines), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}
