use serde::{Deserialize, Serialize};

use super::RoiCalculator;
use crate::core::{Level, RoiCalculation};

/// Investment and savings rolled up per department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRoi {
    pub department: String,
    pub total_investment: f64,
    pub total_savings: f64,
    /// First-year return on the department's combined investment, as a percentage
    pub roi: f64,
    pub process_count: usize,
    /// Mean of the defined payback periods; `None` if no candidate pays back
    pub average_payback: Option<f64>,
    pub risk_level: Level,
}

/// Groups appear in order of first appearance in `calculations`.
pub fn calculate_department_roi(calculations: &[RoiCalculation]) -> Vec<DepartmentRoi> {
    calculate_department_roi_with(calculations, &RoiCalculator::default())
}

pub fn calculate_department_roi_with(
    calculations: &[RoiCalculation],
    calculator: &RoiCalculator,
) -> Vec<DepartmentRoi> {
    let mut groups: Vec<(&str, Vec<&RoiCalculation>)> = Vec::new();
    for calc in calculations {
        match groups.iter_mut().find(|(dept, _)| *dept == calc.department) {
            Some((_, members)) => members.push(calc),
            None => groups.push((calc.department.as_str(), vec![calc])),
        }
    }

    groups
        .into_iter()
        .map(|(department, members)| {
            let metrics: Vec<_> = members.iter().map(|c| calculator.calculate(c)).collect();

            let total_investment: f64 = members
                .iter()
                .map(|c| c.implementation_costs.total())
                .sum();
            let total_savings: f64 = metrics.iter().map(|m| m.annual_cost_savings).sum();
            let roi = if total_investment > 0.0 {
                (total_savings - total_investment) / total_investment * 100.0
            } else {
                0.0
            };

            let paybacks: Vec<f64> = metrics.iter().filter_map(|m| m.payback_period).collect();
            let average_payback =
                (!paybacks.is_empty()).then(|| paybacks.iter().sum::<f64>() / paybacks.len() as f64);

            let average_risk =
                metrics.iter().map(|m| m.risk_score).sum::<f64>() / metrics.len() as f64;
            let risk_level = if average_risk < 4.0 {
                Level::Low
            } else if average_risk < 7.0 {
                Level::Medium
            } else {
                Level::High
            };

            DepartmentRoi {
                department: department.to_string(),
                total_investment,
                total_savings,
                roi,
                process_count: members.len(),
                average_payback,
                risk_level,
            }
        })
        .collect()
}
