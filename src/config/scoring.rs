//! Weight configuration for duplicate similarity and dependency impact scoring.

use serde::{Deserialize, Serialize};

/// Weights combining the per-signal similarities into one duplicate score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimilarityWeights {
    /// Weight for title token overlap (0.0-1.0)
    #[serde(default = "default_title_weight")]
    pub title: f64,

    /// Weight for description token overlap (0.0-1.0)
    #[serde(default = "default_description_weight")]
    pub description: f64,

    /// Weight for tag-set overlap (0.0-1.0)
    #[serde(default = "default_tags_weight")]
    pub tags: f64,

    /// Weight awarded when both proposals come from the same department (0.0-1.0)
    #[serde(default = "default_department_weight")]
    pub department: f64,

    /// Weight for dependency-set overlap (0.0-1.0)
    #[serde(default = "default_dependencies_weight")]
    pub dependencies: f64,
}

impl Default for SimilarityWeights {
    fn default() -> Self {
        Self {
            title: default_title_weight(),
            description: default_description_weight(),
            tags: default_tags_weight(),
            department: default_department_weight(),
            dependencies: default_dependencies_weight(),
        }
    }
}

impl SimilarityWeights {
    // Pure function: Check if a weight is in valid range
    pub fn is_valid_weight(weight: f64) -> bool {
        (0.0..=1.0).contains(&weight)
    }

    // Pure function: Validate a single weight with name
    pub fn validate_weight(weight: f64, name: &str) -> Result<(), String> {
        if Self::is_valid_weight(weight) {
            Ok(())
        } else {
            Err(format!("{} weight must be between 0.0 and 1.0", name))
        }
    }

    pub fn sum(&self) -> f64 {
        self.title + self.description + self.tags + self.department + self.dependencies
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_weight(self.title, "Title"),
            Self::validate_weight(self.description, "Description"),
            Self::validate_weight(self.tags, "Tags"),
            Self::validate_weight(self.department, "Department"),
            Self::validate_weight(self.dependencies, "Dependencies"),
        ]
    }

    /// Every weight must lie in [0, 1] and at least one must be positive.
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }

        if self.sum() <= 0.0 {
            return Err("At least one similarity weight must be positive".to_string());
        }

        Ok(())
    }

    /// Normalize weights to ensure they sum to 1.0, keeping scores within [0, 1]
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 && (sum - 1.0).abs() > 0.001 {
            self.title /= sum;
            self.description /= sum;
            self.tags /= sum;
            self.department /= sum;
            self.dependencies /= sum;
        }
    }
}

pub fn default_title_weight() -> f64 {
    0.40
}
pub fn default_description_weight() -> f64 {
    0.25
}
pub fn default_tags_weight() -> f64 {
    0.20
}
pub fn default_department_weight() -> f64 {
    0.10
}
pub fn default_dependencies_weight() -> f64 {
    0.05
}

/// Points contributed by each related process to a dependency impact score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactWeights {
    /// Per process that depends on the target
    #[serde(default = "default_dependent_weight")]
    pub dependent: f64,

    /// Per process the target depends on directly
    #[serde(default = "default_direct_weight")]
    pub direct: f64,

    /// Per process reachable only through other dependencies
    #[serde(default = "default_indirect_weight")]
    pub indirect: f64,
}

impl Default for ImpactWeights {
    fn default() -> Self {
        Self {
            dependent: default_dependent_weight(),
            direct: default_direct_weight(),
            indirect: default_indirect_weight(),
        }
    }
}

impl ImpactWeights {
    /// Breaking something many processes rely on must always outweigh a
    /// process's own upstream fan-out.
    pub fn validate(&self) -> Result<(), String> {
        if self.dependent < 0.0 || self.direct < 0.0 || self.indirect < 0.0 {
            return Err("Impact weights must not be negative".to_string());
        }
        if self.dependent <= self.direct {
            return Err(format!(
                "Dependent weight ({}) must exceed direct dependency weight ({})",
                self.dependent, self.direct
            ));
        }
        if self.direct < self.indirect {
            return Err(format!(
                "Direct dependency weight ({}) must be at least the indirect weight ({})",
                self.direct, self.indirect
            ));
        }
        Ok(())
    }
}

pub fn default_dependent_weight() -> f64 {
    15.0
}
pub fn default_direct_weight() -> f64 {
    10.0
}
pub fn default_indirect_weight() -> f64 {
    5.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_similarity_weights_sum_to_one() {
        let weights = SimilarityWeights::default();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!(weights.validate().is_ok());
    }

    #[test]
    fn test_similarity_weight_out_of_range_rejected() {
        let weights = SimilarityWeights {
            title: 1.5,
            ..Default::default()
        };
        let err = weights.validate().unwrap_err();
        assert!(err.contains("Title"));
    }

    #[test]
    fn test_all_zero_weights_rejected() {
        let weights = SimilarityWeights {
            title: 0.0,
            description: 0.0,
            tags: 0.0,
            department: 0.0,
            dependencies: 0.0,
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_normalize_rescales_to_unit_sum() {
        let mut weights = SimilarityWeights {
            title: 0.8,
            description: 0.4,
            tags: 0.4,
            department: 0.2,
            dependencies: 0.2,
        };
        weights.normalize();
        assert!((weights.sum() - 1.0).abs() < 1e-9);
        assert!((weights.title - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_impact_weights_require_dependents_to_dominate() {
        assert!(ImpactWeights::default().validate().is_ok());

        let inverted = ImpactWeights {
            dependent: 5.0,
            direct: 10.0,
            indirect: 1.0,
        };
        assert!(inverted.validate().is_err());
    }
}
