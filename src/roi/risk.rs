use serde::{Deserialize, Serialize};

use crate::core::{Level, RiskFactor, RoiCalculation, RoiMetrics};

/// Cut-offs feeding the 0-10 risk score and the risk factor table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    pub high_investment: f64,
    pub medium_investment: f64,
    /// Automation level (%) above which the rollout is considered aggressive
    pub high_automation: f64,
    pub medium_automation: f64,
    /// Payback (months) above which the investment is slow to recover
    pub long_payback_months: f64,
    pub medium_payback_months: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            high_investment: 500_000.0,
            medium_investment: 100_000.0,
            high_automation: 80.0,
            medium_automation: 50.0,
            long_payback_months: 24.0,
            medium_payback_months: 12.0,
        }
    }
}

const MAX_RISK_SCORE: f64 = 10.0;

impl RiskThresholds {
    pub fn investment_level(&self, investment: f64) -> Level {
        if investment > self.high_investment {
            Level::High
        } else if investment > self.medium_investment {
            Level::Medium
        } else {
            Level::Low
        }
    }

    pub fn automation_level(&self, automation: f64) -> Level {
        if automation > self.high_automation {
            Level::High
        } else if automation > self.medium_automation {
            Level::Medium
        } else {
            Level::Low
        }
    }

    /// Investment size and automation contribute 1-3 points each, a slow or
    /// undefined payback adds up to 2 more.
    pub fn score(&self, investment: f64, automation: f64, payback_months: Option<f64>) -> f64 {
        let points = |level: Level| -> f64 {
            match level {
                Level::High => 3.0,
                Level::Medium => 2.0,
                Level::Low => 1.0,
            }
        };
        let payback_risk: f64 = match payback_months {
            None => 2.0,
            Some(months) if months > self.long_payback_months => 2.0,
            Some(months) if months > self.medium_payback_months => 1.0,
            Some(_) => 0.0,
        };

        (points(self.investment_level(investment))
            + points(self.automation_level(automation))
            + payback_risk)
            .min(MAX_RISK_SCORE)
    }
}

/// Fixed four-factor risk register for an automation candidate.
pub fn assess_risk(calculation: &RoiCalculation) -> Vec<RiskFactor> {
    assess_risk_with(calculation, &RiskThresholds::default())
}

pub fn assess_risk_with(calculation: &RoiCalculation, thresholds: &RiskThresholds) -> Vec<RiskFactor> {
    let automation = calculation.proposed_state.automation_level;
    let total_cost = calculation.implementation_costs.total();
    let investment = thresholds.investment_level(total_cost);

    vec![
        RiskFactor {
            category: "Technical".to_string(),
            factor: "Implementation Complexity".to_string(),
            impact: investment,
            probability: thresholds.automation_level(automation),
            mitigation: "Phased implementation approach with pilot testing".to_string(),
            score: match investment {
                Level::High => 8.0,
                Level::Medium => 5.0,
                Level::Low => 3.0,
            },
        },
        RiskFactor {
            category: "Operational".to_string(),
            factor: "Change Management".to_string(),
            impact: if automation > 70.0 {
                Level::High
            } else {
                Level::Medium
            },
            probability: Level::Medium,
            mitigation: "Comprehensive training and communication plan".to_string(),
            score: if automation > 70.0 { 6.0 } else { 4.0 },
        },
        RiskFactor {
            category: "Financial".to_string(),
            factor: "Cost Overrun Risk".to_string(),
            impact: if total_cost > 300_000.0 {
                Level::High
            } else {
                Level::Medium
            },
            probability: Level::Medium,
            mitigation: "Detailed project planning with contingency budget".to_string(),
            score: if total_cost > 300_000.0 { 7.0 } else { 4.0 },
        },
        RiskFactor {
            category: "Strategic".to_string(),
            factor: "Technology Obsolescence".to_string(),
            impact: Level::Medium,
            probability: Level::Low,
            mitigation: "Regular technology roadmap reviews and updates".to_string(),
            score: 3.0,
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 8.0 {
            Self::Critical
        } else if score >= 6.0 {
            Self::High
        } else if score >= 4.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Per-candidate risk review combining the score, the factor register and
/// governance recommendations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAnalysis {
    pub id: String,
    pub process_name: String,
    pub department: String,
    pub overall_risk_score: f64,
    pub risk_level: RiskLevel,
    pub risk_factors: Vec<RiskFactor>,
    /// 30/60/90 complexity index derived from investment size
    pub complexity: u32,
    pub investment_size: f64,
    pub automation_level: f64,
    pub recommendations: Vec<String>,
}

pub fn analyze_risk(calculation: &RoiCalculation, metrics: &RoiMetrics) -> RiskAnalysis {
    analyze_risk_with(calculation, metrics, &RiskThresholds::default())
}

/// Risk review whose factor register and complexity index use the same
/// cut-offs that produced `metrics.risk_score`.
pub fn analyze_risk_with(
    calculation: &RoiCalculation,
    metrics: &RoiMetrics,
    thresholds: &RiskThresholds,
) -> RiskAnalysis {
    let investment_size = calculation.implementation_costs.total();
    let automation_level = calculation.proposed_state.automation_level;
    let risk_factors = assess_risk_with(calculation, thresholds);
    let overall_risk_score = metrics.risk_score;

    let complexity = match thresholds.investment_level(investment_size) {
        Level::High => 90,
        Level::Medium => 60,
        Level::Low => 30,
    };

    let recommendations = vec![
        if overall_risk_score > 7.0 {
            "Consider phased implementation approach"
        } else {
            "Standard implementation recommended"
        },
        if automation_level > 80.0 {
            "Implement comprehensive change management program"
        } else {
            "Standard training sufficient"
        },
        if investment_size > 300_000.0 {
            "Establish detailed project monitoring and contingency planning"
        } else {
            "Regular project reviews adequate"
        },
        if risk_factors.iter().any(|r| r.impact == Level::High) {
            "Engage senior stakeholder oversight"
        } else {
            "Standard governance applies"
        },
    ]
    .into_iter()
    .map(String::from)
    .collect();

    RiskAnalysis {
        id: calculation.id.clone(),
        process_name: calculation.process_name.clone(),
        department: calculation.department.clone(),
        overall_risk_score,
        risk_level: RiskLevel::from_score(overall_risk_score),
        risk_factors,
        complexity,
        investment_size,
        automation_level,
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_bands() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.score(50_000.0, 40.0, Some(6.0)), 2.0);
        assert_eq!(thresholds.score(150_000.0, 60.0, Some(18.0)), 5.0);
        assert_eq!(thresholds.score(600_000.0, 90.0, Some(30.0)), 8.0);
    }

    #[test]
    fn test_undefined_payback_counts_as_slow() {
        let thresholds = RiskThresholds::default();
        assert_eq!(
            thresholds.score(50_000.0, 40.0, None),
            thresholds.score(50_000.0, 40.0, Some(100.0))
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        let thresholds = RiskThresholds::default();
        assert_eq!(thresholds.investment_level(100_000.0), Level::Low);
        assert_eq!(thresholds.investment_level(100_000.01), Level::Medium);
        assert_eq!(thresholds.automation_level(80.0), Level::Medium);
        assert_eq!(thresholds.automation_level(80.5), Level::High);
    }

    #[test]
    fn test_risk_level_bands() {
        assert_eq!(RiskLevel::from_score(3.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(4.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(6.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(8.0), RiskLevel::Critical);
    }
}
