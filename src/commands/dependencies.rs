use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::{emit, open_repository, CommandContext};
use crate::dependency::ImpactAnalyzer;
use crate::io::{DependenciesReport, OutputFormat, Report};

#[derive(Debug, Clone, Default)]
pub struct DependenciesConfig {
    pub data: Option<PathBuf>,
    /// Process to run an impact analysis for
    pub process: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn build_dependencies_report(
    config: &DependenciesConfig,
    context: &CommandContext,
) -> Result<DependenciesReport> {
    let processes = open_repository(config.data.as_deref())
        .processes()
        .context("Failed to load process proposals")?;

    if let Some(id) = &config.process {
        if !processes.iter().any(|p| &p.id == id) {
            warn!(process = %id, "process not found, skipping impact analysis");
        }
    }

    info!(processes = processes.len(), "building dependency map");

    let analyzer = ImpactAnalyzer::new(context.config.impact_weights());
    Ok(DependenciesReport::build(
        &processes,
        &analyzer,
        config.process.as_deref(),
    ))
}

pub fn run_dependencies(config: DependenciesConfig, context: &CommandContext) -> Result<()> {
    let report = build_dependencies_report(&config, context)?;
    let format = context.resolve_format(config.format);
    emit(
        &Report::Dependencies(report),
        format,
        config.output.as_ref(),
        context.formatting,
    )
}
