//! Domain records shared by the analysis modules.

pub mod process;
pub mod roi;

pub use process::{Complexity, Priority, Process, ProcessStatus};
pub use roi::{
    CurrentState, ImplementationCosts, Level, ProposedState, RiskFactor, RoiCalculation,
    RoiMetrics,
};

use serde::{Deserialize, Serialize};

/// Everything a portfolio review operates on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    #[serde(default)]
    pub processes: Vec<Process>,
    #[serde(default)]
    pub roi_calculations: Vec<RoiCalculation>,
}
