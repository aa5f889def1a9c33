use serde::{Deserialize, Serialize};

/// Cost/benefit input for a single automation candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiCalculation {
    pub id: String,
    pub process_name: String,
    pub department: String,
    pub current_state: CurrentState,
    pub proposed_state: ProposedState,
    pub implementation_costs: ImplementationCosts,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentState {
    pub annual_volume: f64,
    /// Minutes per transaction
    pub time_per_transaction: f64,
    /// Percentage
    pub error_rate: f64,
    /// Hourly rate
    pub resource_cost: f64,
    pub annual_operating_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposedState {
    /// Percentage of volume handled by the automation
    pub automation_level: f64,
    /// Minutes per automated transaction
    pub time_per_transaction: f64,
    pub error_rate: f64,
    pub maintenance_cost: f64,
    pub licensing_cost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationCosts {
    pub development: f64,
    pub training: f64,
    pub infrastructure: f64,
    pub testing: f64,
    pub deployment: f64,
}

impl ImplementationCosts {
    pub fn total(&self) -> f64 {
        self.development + self.training + self.infrastructure + self.testing + self.deployment
    }
}

/// Metrics derived from a [`RoiCalculation`].
///
/// Percentages are returned unclamped; display layers clamp them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiMetrics {
    /// Hours saved per year
    pub annual_time_savings: f64,
    pub annual_cost_savings: f64,
    pub implementation_cost: f64,
    #[serde(rename = "netROI")]
    pub net_roi: f64,
    pub roi_percentage: f64,
    /// Months until cumulative savings cover the investment. `None` when the
    /// automation does not save money.
    pub payback_period: Option<f64>,
    pub npv: f64,
    /// Internal rate of return as a percentage
    pub irr: f64,
    pub efficiency_gain: f64,
    pub error_reduction: f64,
    pub throughput_improvement: f64,
    /// 0-10 heuristic
    pub risk_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub category: String,
    pub factor: String,
    pub impact: Level,
    pub probability: Level,
    pub mitigation: String,
    pub score: f64,
}
