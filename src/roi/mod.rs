//! ROI / financial metrics engine.
//!
//! [`calculate_roi_metrics`] turns a cost/benefit record into savings,
//! payback, NPV, IRR, operational deltas and a 0-10 risk score. The
//! remaining modules build portfolio views (payback timelines, risk
//! analyses, department rollups) on top of those metrics.

pub mod department;
pub mod finance;
pub mod payback;
pub mod risk;


use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RoiCalculation, RoiMetrics};

pub use department::{calculate_department_roi, DepartmentRoi};
pub use finance::{calculate_irr, calculate_irr_with, calculate_npv, level_cashflows, IrrOptions};
pub use payback::{
    analyze_payback, summarize_portfolio, CumulativePoint, PaybackAnalysis, PaybackStatus,
    PortfolioSummary,
};
pub use risk::{
    analyze_risk, analyze_risk_with, assess_risk, assess_risk_with, RiskAnalysis, RiskLevel,
    RiskThresholds,
};

/// Financial model constants.
/// Longest NPV/IRR cash-flow series accepted from configuration
pub const MAX_HORIZON_YEARS: u32 = 50;
/// Longest payback timeline, one point per month
pub const MAX_PAYBACK_HORIZON_MONTHS: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoiSettings {
    /// Annual discount rate for NPV, as a fraction
    pub discount_rate: f64,
    /// Years of level savings in the NPV/IRR cash-flow series
    pub horizon_years: u32,
    pub irr_initial_guess: f64,
    pub irr_max_iterations: u32,
    pub irr_tolerance: f64,
    /// Length of payback timelines in months
    pub payback_horizon_months: u32,
    pub risk: RiskThresholds,
}

impl Default for RoiSettings {
    fn default() -> Self {
        Self {
            discount_rate: 0.10,
            horizon_years: 5,
            irr_initial_guess: 0.10,
            irr_max_iterations: 100,
            irr_tolerance: 1e-4,
            payback_horizon_months: 36,
            risk: RiskThresholds::default(),
        }
    }
}

impl RoiSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !self.discount_rate.is_finite() || self.discount_rate <= -1.0 {
            return Err(format!(
                "roi.discount_rate must be greater than -1.0, got {}",
                self.discount_rate
            ));
        }
        if self.horizon_years == 0 || self.horizon_years > MAX_HORIZON_YEARS {
            return Err(format!(
                "roi.horizon_years must be between 1 and {MAX_HORIZON_YEARS}, got {}",
                self.horizon_years
            ));
        }
        if self.payback_horizon_months == 0
            || self.payback_horizon_months > MAX_PAYBACK_HORIZON_MONTHS
        {
            return Err(format!(
                "roi.payback_horizon_months must be between 1 and {MAX_PAYBACK_HORIZON_MONTHS}, got {}",
                self.payback_horizon_months
            ));
        }
        if self.irr_max_iterations == 0 {
            return Err("roi.irr_max_iterations must be at least 1".to_string());
        }
        if self.irr_tolerance.is_nan() || self.irr_tolerance <= 0.0 {
            return Err("roi.irr_tolerance must be positive".to_string());
        }
        Ok(())
    }

    pub fn irr_options(&self) -> IrrOptions {
        IrrOptions {
            initial_guess: self.irr_initial_guess,
            max_iterations: self.irr_max_iterations,
            tolerance: self.irr_tolerance,
        }
    }
}

/// Computes [`RoiMetrics`] under a fixed set of [`RoiSettings`].
#[derive(Debug, Clone, Default)]
pub struct RoiCalculator {
    settings: RoiSettings,
}

impl RoiCalculator {
    pub fn new(settings: RoiSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &RoiSettings {
        &self.settings
    }

    pub fn calculate(&self, calculation: &RoiCalculation) -> RoiMetrics {
        let current = &calculation.current_state;
        let proposed = &calculation.proposed_state;
        let automation = proposed.automation_level / 100.0;

        let current_hours = current.annual_volume * current.time_per_transaction / 60.0;
        let current_cost = current_hours * current.resource_cost + current.annual_operating_cost;

        let automated_volume = current.annual_volume * automation;
        let manual_volume = current.annual_volume * (1.0 - automation);
        let proposed_hours = (automated_volume * proposed.time_per_transaction
            + manual_volume * current.time_per_transaction)
            / 60.0;
        let proposed_cost = proposed_hours * current.resource_cost
            + proposed.maintenance_cost
            + proposed.licensing_cost;

        let annual_time_savings = current_hours - proposed_hours;
        let annual_cost_savings = current_cost - proposed_cost;
        let implementation_cost = calculation.implementation_costs.total();

        let net_roi = annual_cost_savings - implementation_cost;
        let roi_percentage = if implementation_cost > 0.0 {
            net_roi / implementation_cost * 100.0
        } else {
            0.0
        };
        let payback_period =
            (annual_cost_savings > 0.0).then(|| implementation_cost / (annual_cost_savings / 12.0));

        let cashflows = level_cashflows(
            implementation_cost,
            annual_cost_savings,
            self.settings.horizon_years,
        );
        let npv = calculate_npv(&cashflows, self.settings.discount_rate);
        let irr = calculate_irr_with(&cashflows, &self.settings.irr_options());

        let efficiency_gain = (current_hours - proposed_hours) / current_hours * 100.0;
        let error_reduction = (current.error_rate - proposed.error_rate) / current.error_rate * 100.0;
        let throughput_improvement = automation
            * ((current.time_per_transaction - proposed.time_per_transaction)
                / current.time_per_transaction)
            * 100.0;

        let risk_score = self.settings.risk.score(
            implementation_cost,
            proposed.automation_level,
            payback_period,
        );

        debug!(
            id = %calculation.id,
            annual_cost_savings,
            implementation_cost,
            risk_score,
            "computed ROI metrics"
        );

        RoiMetrics {
            annual_time_savings,
            annual_cost_savings,
            implementation_cost,
            net_roi,
            roi_percentage,
            payback_period,
            npv,
            irr,
            efficiency_gain,
            error_reduction,
            throughput_improvement,
            risk_score,
        }
    }
}

/// Metrics under the default settings (10% discount rate, 5-year horizon).
pub fn calculate_roi_metrics(calculation: &RoiCalculation) -> RoiMetrics {
    RoiCalculator::default().calculate(calculation)
}
