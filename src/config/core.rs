use serde::{Deserialize, Serialize};

use super::scoring::{ImpactWeights, SimilarityWeights};
use crate::roi::RoiSettings;

/// Root configuration structure for coemap
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CoemapConfig {
    /// Financial model constants
    #[serde(default)]
    pub roi: Option<RoiSettings>,

    /// Duplicate detection configuration
    #[serde(default)]
    pub duplicates: Option<DuplicatesConfig>,

    /// Dependency impact weights
    #[serde(default)]
    pub dependencies: Option<ImpactWeights>,

    /// Recalculation debounce configuration
    #[serde(default)]
    pub debounce: Option<DebounceConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl CoemapConfig {
    pub fn roi_settings(&self) -> RoiSettings {
        self.roi.clone().unwrap_or_default()
    }

    pub fn duplicate_threshold(&self) -> f64 {
        self.duplicates
            .as_ref()
            .map(|d| d.threshold)
            .unwrap_or_else(default_duplicate_threshold)
    }

    pub fn similarity_weights(&self) -> SimilarityWeights {
        self.duplicates
            .as_ref()
            .map(|d| d.weights)
            .unwrap_or_default()
    }

    pub fn impact_weights(&self) -> ImpactWeights {
        self.dependencies.unwrap_or_default()
    }

    pub fn debounce_delay_ms(&self) -> u64 {
        self.debounce
            .as_ref()
            .map(|d| d.delay_ms)
            .unwrap_or_else(default_debounce_delay_ms)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuplicatesConfig {
    /// Minimum combined similarity for a pair to be reported
    #[serde(default = "default_duplicate_threshold")]
    pub threshold: f64,

    #[serde(default)]
    pub weights: SimilarityWeights,
}

impl Default for DuplicatesConfig {
    fn default() -> Self {
        Self {
            threshold: default_duplicate_threshold(),
            weights: SimilarityWeights::default(),
        }
    }
}

pub fn default_duplicate_threshold() -> f64 {
    crate::duplicates::DEFAULT_THRESHOLD
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebounceConfig {
    #[serde(default = "default_debounce_delay_ms")]
    pub delay_ms: u64,
}

pub fn default_debounce_delay_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}
