//! Portfolio analytics for a process automation Center of Excellence.
//!
//! Three analyses run over the same in-memory proposals:
//!
//! - [`roi`]: savings, payback, NPV, IRR and risk for cost/benefit records
//! - [`duplicates`]: weighted textual similarity between proposals
//! - [`dependency`]: dependency graph, circular dependencies and change impact
//!
//! Everything is a pure function of its inputs. Data is loaded through
//! [`data::PortfolioRepository`] and rendered by [`io::OutputWriter`]s.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod data;
pub mod debounce;
pub mod dependency;
pub mod duplicates;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod roi;

pub use crate::core::{
    Complexity, CurrentState, ImplementationCosts, Level, Portfolio, Priority, Process,
    ProcessStatus, ProposedState, RoiCalculation, RoiMetrics,
};

pub use crate::config::{CoemapConfig, ImpactWeights, SimilarityWeights};

pub use crate::data::{InMemoryRepository, JsonFileRepository, PortfolioRepository};

pub use crate::debounce::{Debouncer, RoiRecalculator};

pub use crate::dependency::{
    analyze_dependency_impact, build_dependency_graph, detect_circular_dependencies,
    DependencyGraph, ImpactAnalysis, ImpactAnalyzer,
};

pub use crate::duplicates::{find_duplicates, DuplicateDetector, DuplicateMatch, ResolvedPairs};

pub use crate::errors::{Error, Result};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::roi::{calculate_irr, calculate_npv, calculate_roi_metrics, RoiCalculator};
