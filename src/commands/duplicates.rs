use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use super::{emit, open_repository, CommandContext};
use crate::duplicates::{DuplicateDetector, ResolvedPairs};
use crate::io::{DuplicatesReport, OutputFormat, Report};

#[derive(Debug, Clone, Default)]
pub struct DuplicatesConfig {
    pub data: Option<PathBuf>,
    pub threshold: Option<f64>,
    /// `"ID1-ID2"` keys of pairs already merged or dismissed
    pub resolved: Vec<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn build_duplicates_report(
    config: &DuplicatesConfig,
    context: &CommandContext,
) -> Result<DuplicatesReport> {
    let processes = open_repository(config.data.as_deref())
        .processes()
        .context("Failed to load process proposals")?;

    let threshold = config
        .threshold
        .unwrap_or_else(|| context.config.duplicate_threshold());
    let detector = DuplicateDetector::new(context.config.similarity_weights());
    let resolved: ResolvedPairs = config.resolved.iter().cloned().collect();

    info!(
        processes = processes.len(),
        threshold,
        resolved = resolved.len(),
        "running duplicate detection"
    );

    Ok(DuplicatesReport::build(
        &processes, &detector, threshold, &resolved,
    ))
}

pub fn run_duplicates(config: DuplicatesConfig, context: &CommandContext) -> Result<()> {
    let report = build_duplicates_report(&config, context)?;
    let format = context.resolve_format(config.format);
    emit(
        &Report::Duplicates(report),
        format,
        config.output.as_ref(),
        context.formatting,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threshold_reports_every_pair_of_sample() {
        let config = DuplicatesConfig {
            threshold: Some(0.0),
            ..DuplicatesConfig::default()
        };

        let report = build_duplicates_report(&config, &CommandContext::default()).unwrap();

        // 6 proposals give 15 unordered pairs
        assert_eq!(report.matches.len(), 15);
        assert_eq!(report.processes_scanned, 6);
    }

    #[test]
    fn test_resolved_pairs_are_hidden() {
        let config = DuplicatesConfig {
            threshold: Some(0.0),
            resolved: vec!["P002-P001".to_string()],
            ..DuplicatesConfig::default()
        };

        let report = build_duplicates_report(&config, &CommandContext::default()).unwrap();

        assert_eq!(report.matches.len(), 14);
        assert_eq!(report.resolved_skipped, 1);
    }
}
