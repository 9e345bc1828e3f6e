//! Scaffold a provider: the one thing `provkit` does.
//!
//! Responsibility: validate the name, wire adapters into the core scaffold
//! service, and display the report. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use provkit_adapters::LocalFilesystem;
use provkit_core::prelude::*;

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// What the user asked for.
#[derive(Debug, Clone)]
pub struct SetupRequest {
    pub pname: String,
    pub dry_run: bool,
}

/// Execute a scaffold (or dry run) for `request.pname`.
///
/// Dispatch sequence:
/// 1. Validate the provider name (no filesystem access before this passes)
/// 2. Build the scaffold service over the local filesystem
/// 3. Scaffold, or plan if `--dry-run`
/// 4. Render the report
#[instrument(skip_all, fields(provider = %request.pname))]
pub fn execute(request: SetupRequest, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Validate name
    let name = ProviderName::parse(request.pname.as_str())
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        biqt_home = %config.biqt_home.display(),
        templates = %config.templates.dir().display(),
        "Configuration resolved"
    );

    // 2. Adapters
    let service = ScaffoldService::new(
        Box::new(config.templates.clone()),
        Box::new(LocalFilesystem::new()),
    );

    // Paths are relative to the working directory.
    let output_root = PathBuf::new();

    // 3. Scaffold
    let report = if request.dry_run {
        service.plan(&name, &output_root)
    } else {
        info!(provider = %name, "Scaffold started");
        service.scaffold(&name, &output_root)?
    };

    // 4. Report
    render(&report, request.dry_run, &output)
}

fn render(report: &ScaffoldReport, dry_run: bool, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        let json = serde_json::to_string_pretty(report)?;
        return output
            .data(&json)
            .with_cli_context(|| "failed to write JSON report");
    }

    let provider = &report.provider;
    if dry_run {
        output.header(&format!("Dry run for provider '{provider}'"))?;
    } else {
        output.header(&format!("Scaffolding provider '{provider}'"))?;
    }

    for entry in &report.entries {
        let label = entry_label(entry);
        match (entry.outcome, entry.kind) {
            (Outcome::Created, _) => output.success(&format!("created       {label}"))?,
            (Outcome::WouldCreate, _) => output.info(&format!("would create  {label}"))?,
            (Outcome::AlreadyExists, EntryKind::Directory) => {
                output.info(&format!("exists        {label}"))?
            }
            (Outcome::AlreadyExists, EntryKind::File) => {
                output.warning(&format!("skipped       {label} (already exists)"))?
            }
        }
    }

    output.print("")?;
    if dry_run {
        output.info("Dry run: nothing was written.")?;
    } else if report.is_noop() {
        output.info(&format!("Provider '{provider}' is already in place; nothing to do."))?;
    } else {
        output.success(&format!(
            "Provider '{provider}' created at {}",
            report.root.display()
        ))?;
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  Implement evaluate() in {provider}/{provider}.cpp"))?;
        output.print(&format!("  Describe the provider in {provider}/descriptor.json"))?;
    }

    Ok(())
}

/// Display form of a report path; directories get a trailing slash.
fn entry_label(entry: &ReportEntry) -> String {
    match entry.kind {
        EntryKind::Directory => format!("{}/", entry.path.display()),
        EntryKind::File => entry.path.display().to_string(),
    }
}
