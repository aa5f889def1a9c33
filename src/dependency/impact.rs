use petgraph::graph::NodeIndex;
use petgraph::visit::Bfs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use super::{DependencyResolver, ResolvedDependencies, TitleTagResolver};
use crate::config::ImpactWeights;
use crate::core::Process;

/// What a change to one process touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactAnalysis {
    pub direct_dependencies: Vec<Process>,
    /// Reachable through two or more hops and not already direct
    pub indirect_dependencies: Vec<Process>,
    pub dependents: Vec<Process>,
    pub impact_score: f64,
    /// Expected ROI of the target in units of 10 000
    pub roi_exposure: f64,
}

impl ImpactAnalysis {
    pub fn is_isolated(&self) -> bool {
        self.direct_dependencies.is_empty()
            && self.indirect_dependencies.is_empty()
            && self.dependents.is_empty()
    }
}

const ROI_EXPOSURE_UNIT: f64 = 10_000.0;

#[derive(Debug, Clone, Default)]
pub struct ImpactAnalyzer<R = TitleTagResolver> {
    weights: ImpactWeights,
    resolver: R,
}

impl ImpactAnalyzer<TitleTagResolver> {
    pub fn new(weights: ImpactWeights) -> Self {
        Self::with_resolver(weights, TitleTagResolver)
    }
}

impl<R: DependencyResolver> ImpactAnalyzer<R> {
    pub fn with_resolver(weights: ImpactWeights, resolver: R) -> Self {
        Self { weights, resolver }
    }

    pub fn weights(&self) -> &ImpactWeights {
        &self.weights
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Unknown ids yield an empty analysis with a zero score.
    pub fn analyze(&self, process_id: &str, processes: &[Process]) -> ImpactAnalysis {
        let _span = info_span!("analyze_dependency_impact", process_id).entered();

        let Some(target) = processes.iter().position(|p| p.id == process_id) else {
            debug!("process not found");
            return ImpactAnalysis::default();
        };

        let resolved = ResolvedDependencies::new(processes, &self.resolver);
        let direct = resolved.dependencies_of(target);
        let dependents = resolved.dependents_of(target);
        let indirect = indirect_dependencies(&resolved, target);

        let impact_score = dependents.len() as f64 * self.weights.dependent
            + direct.len() as f64 * self.weights.direct
            + indirect.len() as f64 * self.weights.indirect;

        debug!(
            direct = direct.len(),
            indirect = indirect.len(),
            dependents = dependents.len(),
            impact_score,
            "computed dependency impact"
        );

        let collect = |indices: &[usize]| -> Vec<Process> {
            indices.iter().map(|&i| processes[i].clone()).collect()
        };

        ImpactAnalysis {
            direct_dependencies: collect(direct),
            indirect_dependencies: collect(&indirect),
            dependents: collect(&dependents),
            impact_score,
            roi_exposure: processes[target].expected_roi / ROI_EXPOSURE_UNIT,
        }
    }
}

/// Breadth-first reachability from `target`, minus the target itself and its
/// direct dependencies.
fn indirect_dependencies(resolved: &ResolvedDependencies, target: usize) -> Vec<usize> {
    let graph = resolved.to_graph();
    let direct = resolved.dependencies_of(target);

    let mut reachable = Vec::new();
    let mut bfs = Bfs::new(&graph, NodeIndex::new(target));
    while let Some(node) = bfs.next(&graph) {
        let index = graph[node];
        if index != target && !direct.contains(&index) {
            reachable.push(index);
        }
    }
    reachable
}

/// [`ImpactAnalyzer::analyze`] with the default weights and resolver.
pub fn analyze_dependency_impact(process_id: &str, processes: &[Process]) -> ImpactAnalysis {
    ImpactAnalyzer::new(ImpactWeights::default()).analyze(process_id, processes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(processes: &[Process]) -> Vec<&str> {
        processes.iter().map(|p| p.id.as_str()).collect()
    }

    fn chain() -> Vec<Process> {
        vec![
            Process::new("A", "Alpha")
                .with_dependencies(["Beta"])
                .with_expected_roi(250_000.0),
            Process::new("B", "Beta").with_dependencies(["Gamma"]),
            Process::new("C", "Gamma").with_dependencies(["Delta"]),
            Process::new("D", "Delta"),
            Process::new("E", "Epsilon").with_dependencies(["Alpha"]),
        ]
    }

    #[test]
    fn test_isolated_process_scores_zero() {
        let processes = vec![
            Process::new("P1", "Invoice Bot").with_expected_roi(340_000.0),
            Process::new("P2", "HR Onboarding"),
        ];

        let impact = analyze_dependency_impact("P1", &processes);

        assert!(impact.is_isolated());
        assert_eq!(impact.impact_score, 0.0);
        assert_eq!(impact.roi_exposure, 34.0);
    }

    #[test]
    fn test_direct_indirect_and_dependents() {
        let processes = chain();

        let impact = analyze_dependency_impact("A", &processes);

        assert_eq!(ids(&impact.direct_dependencies), vec!["B"]);
        assert_eq!(ids(&impact.indirect_dependencies), vec!["C", "D"]);
        assert_eq!(ids(&impact.dependents), vec!["E"]);
        assert_eq!(impact.impact_score, 15.0 + 10.0 + 2.0 * 5.0);
        assert_eq!(impact.roi_exposure, 25.0);
    }

    #[test]
    fn test_cycle_back_to_target_is_not_indirect() {
        let processes = vec![
            Process::new("A", "Alpha").with_dependencies(["Beta"]),
            Process::new("B", "Beta").with_dependencies(["Gamma"]),
            Process::new("C", "Gamma").with_dependencies(["Alpha"]),
        ];

        let impact = analyze_dependency_impact("A", &processes);

        assert_eq!(ids(&impact.direct_dependencies), vec!["B"]);
        assert_eq!(ids(&impact.indirect_dependencies), vec!["C"]);
        assert_eq!(ids(&impact.dependents), vec!["C"]);
    }

    #[test]
    fn test_unknown_process() {
        let impact = analyze_dependency_impact("missing", &chain());
        assert_eq!(impact, ImpactAnalysis::default());
    }

    #[test]
    fn test_custom_weights() {
        let analyzer = ImpactAnalyzer::new(ImpactWeights {
            dependent: 3.0,
            direct: 2.0,
            indirect: 1.0,
        });

        let impact = analyzer.analyze("A", &chain());
        assert_eq!(impact.impact_score, 3.0 + 2.0 + 2.0);
    }
}
