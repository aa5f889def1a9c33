//! Dependency graph over process proposals.
//!
//! Proposals name their dependencies in free text. A [`DependencyResolver`]
//! maps that text onto other proposals; everything else here works on the
//! resolved relation:
//!
//! - [`build_dependency_graph`] lays the processes out by dependency depth
//! - [`detect_circular_dependencies`] reports dependency cycles
//! - [`analyze_dependency_impact`] measures what a change to one process touches

pub mod cycles;
pub mod graph;
pub mod impact;
mod resolver;

pub use cycles::{detect_circular_dependencies, detect_circular_dependencies_with};
pub use graph::{
    build_dependency_graph, build_dependency_graph_with, DependencyEdge, DependencyGraph,
    DependencyNode,
};
pub use impact::{analyze_dependency_impact, ImpactAnalysis, ImpactAnalyzer};
pub use resolver::{DependencyResolver, ResolvedDependencies, TitleTagResolver};
