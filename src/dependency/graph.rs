use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DependencyResolver, ResolvedDependencies, TitleTagResolver};
use crate::core::{Process, ProcessStatus};

/// Vertical distance between layout levels
pub const LEVEL_SPACING: f64 = 150.0;
/// Horizontal distance between siblings on a level
pub const NODE_SPACING: f64 = 200.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyNode {
    pub id: String,
    pub title: String,
    pub status: ProcessStatus,
    /// Ids of the processes this one depends on
    pub dependencies: Vec<String>,
    /// Ids of the processes that depend on this one
    pub dependents: Vec<String>,
    pub level: u32,
    pub x: f64,
    pub y: f64,
}

/// `from` depends on `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: Vec<DependencyNode>,
    pub edges: Vec<DependencyEdge>,
}

impl DependencyGraph {
    pub fn node(&self, id: &str) -> Option<&DependencyNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn max_level(&self) -> u32 {
        self.nodes.iter().map(|node| node.level).max().unwrap_or(0)
    }
}

pub fn build_dependency_graph(processes: &[Process]) -> DependencyGraph {
    build_dependency_graph_with(processes, &TitleTagResolver)
}

pub fn build_dependency_graph_with(
    processes: &[Process],
    resolver: &dyn DependencyResolver,
) -> DependencyGraph {
    let resolved = ResolvedDependencies::new(processes, resolver);
    let levels = compute_levels(&resolved);

    let ids = |indices: &[usize]| -> Vec<String> {
        indices.iter().map(|&i| processes[i].id.clone()).collect()
    };

    let mut by_level: Vec<(u32, Vec<usize>)> = Vec::new();
    for (index, &level) in levels.iter().enumerate() {
        match by_level.iter_mut().find(|(l, _)| *l == level) {
            Some((_, members)) => members.push(index),
            None => by_level.push((level, vec![index])),
        }
    }
    by_level.sort_by_key(|(level, _)| *level);

    let nodes = by_level
        .iter()
        .flat_map(|(level, members)| {
            let centre = (members.len() as f64 - 1.0) / 2.0;
            members
                .iter()
                .enumerate()
                .map(move |(slot, &index)| (*level, slot as f64 - centre, index))
        })
        .map(|(level, offset, index)| {
            let process = &processes[index];
            DependencyNode {
                id: process.id.clone(),
                title: process.title.clone(),
                status: process.status,
                dependencies: ids(resolved.dependencies_of(index)),
                dependents: ids(&resolved.dependents_of(index)),
                level,
                x: offset * NODE_SPACING,
                y: f64::from(level) * LEVEL_SPACING,
            }
        })
        .collect();

    let edges: Vec<DependencyEdge> = (0..resolved.len())
        .flat_map(|from| {
            resolved
                .dependencies_of(from)
                .iter()
                .map(move |&to| (from, to))
        })
        .map(|(from, to)| DependencyEdge {
            from: processes[from].id.clone(),
            to: processes[to].id.clone(),
        })
        .collect();

    debug!(
        nodes = processes.len(),
        edges = edges.len(),
        "built dependency graph"
    );

    DependencyGraph { nodes, edges }
}

/// Layout level of every process: 1 for leaves, one more than the deepest
/// dependency otherwise. An edge back onto the current path counts as 0.
fn compute_levels(resolved: &ResolvedDependencies) -> Vec<u32> {
    fn visit(
        index: usize,
        resolved: &ResolvedDependencies,
        levels: &mut [Option<u32>],
        on_path: &mut [bool],
    ) -> u32 {
        if let Some(level) = levels[index] {
            return level;
        }
        if on_path[index] {
            return 0;
        }

        on_path[index] = true;
        let deepest = resolved
            .dependencies_of(index)
            .iter()
            .map(|&dep| visit(dep, resolved, levels, on_path))
            .max()
            .unwrap_or(0);
        on_path[index] = false;

        let level = deepest + 1;
        levels[index] = Some(level);
        level
    }

    let mut levels = vec![None; resolved.len()];
    let mut on_path = vec![false; resolved.len()];
    (0..resolved.len())
        .map(|index| visit(index, resolved, &mut levels, &mut on_path))
        .collect()
}
