use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::Process;

/// Maps a free-text dependency onto the processes it refers to.
///
/// Implementations return indices into `processes` and may return any number
/// of matches, including none.
pub trait DependencyResolver {
    fn resolve(&self, dependency: &str, processes: &[Process]) -> Vec<usize>;
}

/// Case-insensitive substring match against process titles and tags.
///
/// "ERP" resolves to "ERP Integration" as well as to any process tagged
/// "erp-sync". Blank text resolves to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleTagResolver;

impl DependencyResolver for TitleTagResolver {
    fn resolve(&self, dependency: &str, processes: &[Process]) -> Vec<usize> {
        let needle = dependency.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        processes
            .iter()
            .enumerate()
            .filter(|(_, process)| {
                process.title.to_lowercase().contains(&needle)
                    || process
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .map(|(index, _)| index)
            .collect()
    }
}

/// Resolved "depends on" relation over a process slice.
///
/// `dependencies[i]` lists the indices process `i` depends on, in the order
/// its dependency strings resolve, without self-references or repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependencies {
    dependencies: Vec<Vec<usize>>,
}

impl ResolvedDependencies {
    pub fn new(processes: &[Process], resolver: &dyn DependencyResolver) -> Self {
        let dependencies = processes
            .iter()
            .enumerate()
            .map(|(index, process)| {
                let mut targets: Vec<usize> = Vec::new();
                for dependency in &process.dependencies {
                    for target in resolver.resolve(dependency, processes) {
                        if target != index && !targets.contains(&target) {
                            targets.push(target);
                        }
                    }
                }
                targets
            })
            .collect();

        Self { dependencies }
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }

    pub fn dependencies_of(&self, index: usize) -> &[usize] {
        self.dependencies
            .get(index)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Indices of processes that depend on `index`, in input order.
    pub fn dependents_of(&self, index: usize) -> Vec<usize> {
        self.dependencies
            .iter()
            .enumerate()
            .filter(|(_, targets)| targets.contains(&index))
            .map(|(dependent, _)| dependent)
            .collect()
    }

    pub fn edge_count(&self) -> usize {
        self.dependencies.iter().map(Vec::len).sum()
    }

    /// Directed graph with one node per process, weighted by process index.
    ///
    /// Node indices line up with process indices.
    pub fn to_graph(&self) -> DiGraph<usize, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        for index in 0..self.len() {
            graph.add_node(index);
        }
        for (from, targets) in self.dependencies.iter().enumerate() {
            for &to in targets {
                graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processes() -> Vec<Process> {
        vec![
            Process::new("P1", "Invoice Bot").with_dependencies(["ERP", "erp", "Invoice"]),
            Process::new("P2", "ERP Integration"),
            Process::new("P3", "Ledger Sync").with_tags(["ERP-Sync"]),
        ]
    }

    #[test]
    fn test_resolves_titles_and_tags_case_insensitively() {
        let processes = processes();
        assert_eq!(TitleTagResolver.resolve("erp", &processes), vec![1, 2]);
        assert_eq!(TitleTagResolver.resolve("  Ledger ", &processes), vec![2]);
    }

    #[test]
    fn test_blank_and_unknown_dependencies_resolve_to_nothing() {
        let processes = processes();
        assert!(TitleTagResolver.resolve("   ", &processes).is_empty());
        assert!(TitleTagResolver.resolve("Mainframe", &processes).is_empty());
    }

    #[test]
    fn test_resolved_dependencies_skip_self_and_repeats() {
        let resolved = ResolvedDependencies::new(&processes(), &TitleTagResolver);

        assert_eq!(resolved.dependencies_of(0), &[1, 2]);
        assert!(resolved.dependencies_of(1).is_empty());
        assert_eq!(resolved.dependents_of(2), vec![0]);
        assert_eq!(resolved.edge_count(), 2);
        assert!(resolved.dependencies_of(99).is_empty());
    }

    #[test]
    fn test_graph_nodes_line_up_with_indices() {
        let graph = ResolvedDependencies::new(&processes(), &TitleTagResolver).to_graph();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph[NodeIndex::new(2)], 2);
        assert!(graph.contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
    }
}
