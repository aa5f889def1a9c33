use std::collections::HashSet;

use tracing::debug;

use super::{DependencyResolver, ResolvedDependencies, TitleTagResolver};
use crate::core::Process;

/// Circular dependency chains as lists of process ids.
///
/// Each cycle starts at the process where the search first entered it; the
/// edge from the last id back to the first is implied.
pub fn detect_circular_dependencies(processes: &[Process]) -> Vec<Vec<String>> {
    detect_circular_dependencies_with(processes, &TitleTagResolver)
}

pub fn detect_circular_dependencies_with(
    processes: &[Process],
    resolver: &dyn DependencyResolver,
) -> Vec<Vec<String>> {
    let resolved = ResolvedDependencies::new(processes, resolver);
    let cycles = CycleSearch::new(&resolved).run();

    debug!(cycles = cycles.len(), "circular dependency scan complete");

    cycles
        .into_iter()
        .map(|cycle| cycle.into_iter().map(|i| processes[i].id.clone()).collect())
        .collect()
}

/// Depth-first search with recursion-stack tracking.
struct CycleSearch<'a> {
    resolved: &'a ResolvedDependencies,
    visited: Vec<bool>,
    on_stack: Vec<bool>,
    path: Vec<usize>,
    seen: HashSet<Vec<usize>>,
    cycles: Vec<Vec<usize>>,
}

impl<'a> CycleSearch<'a> {
    fn new(resolved: &'a ResolvedDependencies) -> Self {
        Self {
            resolved,
            visited: vec![false; resolved.len()],
            on_stack: vec![false; resolved.len()],
            path: Vec::new(),
            seen: HashSet::new(),
            cycles: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<usize>> {
        for start in 0..self.resolved.len() {
            if !self.visited[start] {
                self.visit(start);
            }
        }
        self.cycles
    }

    fn visit(&mut self, node: usize) {
        self.visited[node] = true;
        self.on_stack[node] = true;
        self.path.push(node);

        let resolved = self.resolved;
        for &dep in resolved.dependencies_of(node) {
            if !self.visited[dep] {
                self.visit(dep);
            } else if self.on_stack[dep] {
                if let Some(start) = self.path.iter().position(|&n| n == dep) {
                    self.record(self.path[start..].to_vec());
                }
            }
        }

        self.path.pop();
        self.on_stack[node] = false;
    }

    fn record(&mut self, cycle: Vec<usize>) {
        if self.seen.insert(canonical_rotation(&cycle)) {
            self.cycles.push(cycle);
        }
    }
}

/// The rotation of `cycle` that starts at its smallest member.
fn canonical_rotation(cycle: &[usize]) -> Vec<usize> {
    let pivot = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, node)| *node)
        .map(|(position, _)| position)
        .unwrap_or(0);

    cycle[pivot..].iter().chain(&cycle[..pivot]).copied().collect()
}
