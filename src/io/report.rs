//! Serializable report models assembled by the commands and rendered by the
//! output writers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{Process, RoiCalculation, RoiMetrics};
use crate::dependency::{
    build_dependency_graph_with, detect_circular_dependencies_with, DependencyGraph,
    DependencyResolver, ImpactAnalysis, ImpactAnalyzer,
};
use crate::duplicates::{potential_savings, DuplicateDetector, DuplicateMatch, ResolvedPairs};
use crate::roi::{
    analyze_payback, analyze_risk_with, department::calculate_department_roi_with, summarize_portfolio,
    DepartmentRoi, PaybackAnalysis, PortfolioSummary, RiskAnalysis, RoiCalculator,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiEntry {
    pub id: String,
    pub process_name: String,
    pub department: String,
    pub metrics: RoiMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    pub as_of: NaiveDate,
    pub horizon_months: u32,
    pub entries: Vec<RoiEntry>,
    pub payback: Vec<PaybackAnalysis>,
    pub risk: Vec<RiskAnalysis>,
    pub departments: Vec<DepartmentRoi>,
    pub summary: PortfolioSummary,
}

impl RoiReport {
    pub fn build(
        calculations: &[RoiCalculation],
        calculator: &RoiCalculator,
        horizon_months: u32,
        as_of: NaiveDate,
        department: Option<String>,
    ) -> Self {
        let metrics: Vec<RoiMetrics> = calculations.iter().map(|c| calculator.calculate(c)).collect();

        let entries = calculations
            .iter()
            .zip(&metrics)
            .map(|(calc, metrics)| RoiEntry {
                id: calc.id.clone(),
                process_name: calc.process_name.clone(),
                department: calc.department.clone(),
                metrics: *metrics,
            })
            .collect();
        let payback: Vec<PaybackAnalysis> = calculations
            .iter()
            .zip(&metrics)
            .map(|(calc, metrics)| analyze_payback(calc, metrics, horizon_months, as_of))
            .collect();
        let thresholds = &calculator.settings().risk;
        let risk = calculations
            .iter()
            .zip(&metrics)
            .map(|(calc, metrics)| analyze_risk_with(calc, metrics, thresholds))
            .collect();

        Self {
            department,
            as_of,
            horizon_months,
            entries,
            summary: summarize_portfolio(&payback),
            payback,
            risk,
            departments: calculate_department_roi_with(calculations, calculator),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicatesReport {
    pub threshold: f64,
    pub processes_scanned: usize,
    /// Matches suppressed because a reviewer already resolved the pair
    pub resolved_skipped: usize,
    pub matches: Vec<DuplicateMatch>,
    pub potential_savings: f64,
}

impl DuplicatesReport {
    pub fn build(
        processes: &[Process],
        detector: &DuplicateDetector,
        threshold: f64,
        resolved: &ResolvedPairs,
    ) -> Self {
        let found = detector.find_duplicates(processes, threshold);
        let total = found.len();
        let matches = resolved.filter(found);

        Self {
            threshold,
            processes_scanned: processes.len(),
            resolved_skipped: total - matches.len(),
            potential_savings: potential_savings(&matches),
            matches,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub process_id: String,
    pub title: String,
    #[serde(flatten)]
    pub analysis: ImpactAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependenciesReport {
    pub graph: DependencyGraph,
    pub cycles: Vec<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub impact: Option<ImpactReport>,
}

impl DependenciesReport {
    /// Graph and cycles for the whole portfolio, plus an impact analysis for
    /// `focus` when it names a known process.
    pub fn build<R: DependencyResolver>(
        processes: &[Process],
        analyzer: &ImpactAnalyzer<R>,
        focus: Option<&str>,
    ) -> Self {
        let impact = focus.and_then(|id| {
            let process = processes.iter().find(|p| p.id == id)?;
            Some(ImpactReport {
                process_id: process.id.clone(),
                title: process.title.clone(),
                analysis: analyzer.analyze(id, processes),
            })
        });

        Self {
            graph: build_dependency_graph_with(processes, analyzer.resolver()),
            cycles: detect_circular_dependencies_with(processes, analyzer.resolver()),
            impact,
        }
    }
}

/// Everything an [`crate::io::OutputWriter`] knows how to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Roi(RoiReport),
    Duplicates(DuplicatesReport),
    Dependencies(DependenciesReport),
}

impl Report {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Roi(_) => "ROI Analysis",
            Self::Duplicates(_) => "Duplicate Process Review",
            Self::Dependencies(_) => "Process Dependency Map",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ImpactWeights, SimilarityWeights};
    use crate::data::sample::{sample_processes, sample_roi_calculations};

    #[test]
    fn test_roi_report_covers_every_calculation() {
        let calculations = sample_roi_calculations();
        let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        let report = RoiReport::build(&calculations, &RoiCalculator::default(), 36, as_of, None);

        assert_eq!(report.entries.len(), 5);
        assert_eq!(report.payback.len(), 5);
        assert_eq!(report.risk.len(), 5);
        assert_eq!(report.departments.len(), 5);
        assert_eq!(report.payback[0].cumulative_savings.len(), 37);
    }

    #[test]
    fn test_duplicates_report_counts_resolved_pairs() {
        let processes = vec![
            Process::new("P1", "Invoice Processing")
                .with_department("Finance")
                .with_tags(["Finance"]),
            Process::new("P2", "Invoice Processing")
                .with_department("Finance")
                .with_tags(["Finance"])
                .with_expected_roi(10_000.0),
        ];
        let detector = DuplicateDetector::new(SimilarityWeights::default());

        let open = DuplicatesReport::build(&processes, &detector, 0.6, &ResolvedPairs::new());
        assert_eq!(open.matches.len(), 1);
        assert_eq!(open.resolved_skipped, 0);

        let resolved: ResolvedPairs = ["P2-P1"].into_iter().collect();
        let closed = DuplicatesReport::build(&processes, &detector, 0.6, &resolved);
        assert!(closed.matches.is_empty());
        assert_eq!(closed.resolved_skipped, 1);
        assert_eq!(closed.potential_savings, 0.0);
    }

    #[test]
    fn test_dependencies_report_ignores_unknown_focus() {
        let analyzer = ImpactAnalyzer::new(ImpactWeights::default());
        let report = DependenciesReport::build(&sample_processes(), &analyzer, Some("P999"));

        assert_eq!(report.graph.nodes.len(), 6);
        assert!(report.impact.is_none());
    }

    #[test]
    fn test_impact_fields_flatten_into_report() {
        let analyzer = ImpactAnalyzer::new(ImpactWeights::default());
        let report = DependenciesReport::build(&sample_processes(), &analyzer, Some("P001"));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["impact"]["processId"], "P001");
        assert!(json["impact"]["impactScore"].is_number());
    }
}
