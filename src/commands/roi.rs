use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use super::{emit, open_repository, CommandContext};
use crate::io::{OutputFormat, Report, RoiReport};
use crate::roi::{RoiCalculator, MAX_PAYBACK_HORIZON_MONTHS};

#[derive(Debug, Clone, Default)]
pub struct RoiConfig {
    pub data: Option<PathBuf>,
    pub department: Option<String>,
    pub horizon_months: Option<u32>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    /// Anchor for break-even dates; today when unset
    pub as_of: Option<NaiveDate>,
}

pub fn build_roi_report(config: &RoiConfig, context: &CommandContext) -> Result<RoiReport> {
    if let Some(months) = config.horizon_months {
        if months == 0 || months > MAX_PAYBACK_HORIZON_MONTHS {
            bail!("Horizon must be between 1 and {MAX_PAYBACK_HORIZON_MONTHS} months, got {months}");
        }
    }

    let repository = open_repository(config.data.as_deref());
    let calculations = repository
        .roi_calculations_for(config.department.as_deref())
        .context("Failed to load ROI calculations")?;

    if calculations.is_empty() {
        match &config.department {
            Some(department) => warn!(department = %department, "no ROI calculations for department"),
            None => warn!("dataset contains no ROI calculations"),
        }
    }

    let settings = context.config.roi_settings();
    let horizon = config
        .horizon_months
        .unwrap_or(settings.payback_horizon_months);
    let as_of = config.as_of.unwrap_or_else(|| Local::now().date_naive());

    info!(calculations = calculations.len(), horizon, "running ROI analysis");

    Ok(RoiReport::build(
        &calculations,
        &RoiCalculator::new(settings),
        horizon,
        as_of,
        config.department.clone(),
    ))
}

pub fn run_roi(config: RoiConfig, context: &CommandContext) -> Result<()> {
    let report = build_roi_report(&config, context)?;
    let format = context.resolve_format(config.format);
    emit(
        &Report::Roi(report),
        format,
        config.output.as_ref(),
        context.formatting,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_filter_and_horizon() {
        let config = RoiConfig {
            department: Some("hr".to_string()),
            horizon_months: Some(12),
            as_of: NaiveDate::from_ymd_opt(2024, 3, 1),
            ..RoiConfig::default()
        };

        let report = build_roi_report(&config, &CommandContext::default()).unwrap();

        assert_eq!(report.entries.len(), 1);
        assert_eq!(report.entries[0].id, "roi2");
        assert_eq!(report.payback[0].cumulative_savings.len(), 13);
        assert_eq!(report.department.as_deref(), Some("hr"));
    }

    #[test]
    fn test_missing_dataset_is_an_error() {
        let config = RoiConfig {
            data: Some(PathBuf::from("/nonexistent/portfolio.json")),
            ..RoiConfig::default()
        };

        assert!(build_roi_report(&config, &CommandContext::default()).is_err());
    }

    #[test]
    fn test_unbounded_horizon_is_rejected() {
        let config = RoiConfig {
            horizon_months: Some(u32::MAX),
            ..RoiConfig::default()
        };

        let err = build_roi_report(&config, &CommandContext::default()).unwrap_err();
        assert!(err.to_string().contains("between 1 and 600"));
    }
}
