use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::core::{RoiCalculation, RoiMetrics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaybackStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PaybackStatus {
    pub fn from_months(payback: Option<f64>) -> Self {
        match payback {
            Some(months) if months <= 12.0 => Self::Excellent,
            Some(months) if months <= 24.0 => Self::Good,
            Some(months) if months <= 36.0 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    pub month: u32,
    pub value: f64,
}

/// Break-even view of one candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaybackAnalysis {
    pub id: String,
    pub process_name: String,
    pub department: String,
    pub investment_cost: f64,
    pub annual_savings: f64,
    pub payback_period: Option<f64>,
    pub npv: f64,
    pub irr: f64,
    pub break_even_date: Option<NaiveDate>,
    /// Net position per month, starting at `-investment_cost` for month 0
    pub cumulative_savings: Vec<CumulativePoint>,
    pub status: PaybackStatus,
}

pub fn analyze_payback(
    calculation: &RoiCalculation,
    metrics: &RoiMetrics,
    horizon_months: u32,
    as_of: NaiveDate,
) -> PaybackAnalysis {
    let investment_cost = calculation.implementation_costs.total();
    let monthly_savings = metrics.annual_cost_savings / 12.0;

    let cumulative_savings = (0..=horizon_months)
        .map(|month| CumulativePoint {
            month,
            value: -investment_cost + monthly_savings * f64::from(month),
        })
        .collect();

    let break_even_date = metrics
        .payback_period
        .filter(|months| months.is_finite())
        .and_then(|months| u32::try_from(months.ceil() as u64).ok())
        .and_then(|months| as_of.checked_add_months(Months::new(months)));

    PaybackAnalysis {
        id: calculation.id.clone(),
        process_name: calculation.process_name.clone(),
        department: calculation.department.clone(),
        investment_cost,
        annual_savings: metrics.annual_cost_savings,
        payback_period: metrics.payback_period,
        npv: metrics.npv,
        irr: metrics.irr,
        break_even_date,
        cumulative_savings,
        status: PaybackStatus::from_months(metrics.payback_period),
    }
}

/// Aggregates across a set of payback analyses.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_investment: f64,
    pub total_annual_savings: f64,
    pub average_payback: Option<f64>,
    pub average_npv: f64,
    pub average_irr: f64,
}

fn finite_mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .filter(|v| v.is_finite())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    (count > 0).then(|| sum / count as f64)
}

pub fn summarize_portfolio(analyses: &[PaybackAnalysis]) -> PortfolioSummary {
    PortfolioSummary {
        total_investment: analyses.iter().map(|a| a.investment_cost).sum(),
        total_annual_savings: analyses.iter().map(|a| a.annual_savings).sum(),
        average_payback: finite_mean(analyses.iter().filter_map(|a| a.payback_period)),
        average_npv: finite_mean(analyses.iter().map(|a| a.npv)).unwrap_or(0.0),
        average_irr: finite_mean(analyses.iter().map(|a| a.irr)).unwrap_or(0.0),
    }
}
