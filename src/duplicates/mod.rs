//! Duplicate process detection.
//!
//! Every unordered pair of proposals is scored on weighted title,
//! description, tag, department and dependency overlap. Pairs at or above a
//! threshold are reported with the reasons that drove the score.

mod review;
mod similarity;

pub use review::{group_by_department, potential_savings, ResolvedPairs, SimilarityBand};
pub use similarity::{set_similarity, text_similarity, title_similarity};

use serde::{Deserialize, Serialize};
use tracing::{debug, info_span};

use crate::config::SimilarityWeights;
use crate::core::Process;

/// Score at which two proposals are flagged as likely duplicates
pub const DEFAULT_THRESHOLD: f64 = 0.6;

const TITLE_REASON_THRESHOLD: f64 = 0.3;
const DESCRIPTION_REASON_THRESHOLD: f64 = 0.4;
const TAGS_REASON_THRESHOLD: f64 = 0.5;
const DEPENDENCIES_REASON_THRESHOLD: f64 = 0.5;

/// A pair of proposals that look like the same piece of work.
///
/// `process1` always precedes `process2` in the input slice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateMatch {
    pub process1: Process,
    pub process2: Process,
    pub similarity: f64,
    pub reasons: Vec<String>,
}

impl DuplicateMatch {
    /// `"{id1}-{id2}"` with the ids in input order
    pub fn pair_key(&self) -> String {
        format!("{}-{}", self.process1.id, self.process2.id)
    }
}

/// Per-signal similarities for one pair, before weighting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityBreakdown {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
    pub same_department: bool,
    pub dependencies: f64,
}

impl SimilarityBreakdown {
    pub fn between(left: &Process, right: &Process) -> Self {
        Self {
            title: title_similarity(&left.title, &right.title),
            description: text_similarity(&left.description, &right.description),
            tags: set_similarity(&left.tags, &right.tags),
            same_department: left.department == right.department,
            dependencies: set_similarity(&left.dependencies, &right.dependencies),
        }
    }

    pub fn score(&self, weights: &SimilarityWeights) -> f64 {
        let department = if self.same_department { 1.0 } else { 0.0 };
        weights.title * self.title
            + weights.description * self.description
            + weights.tags * self.tags
            + weights.department * department
            + weights.dependencies * self.dependencies
    }

    pub fn reasons(&self) -> Vec<String> {
        [
            (self.title > TITLE_REASON_THRESHOLD, "Similar titles"),
            (
                self.description > DESCRIPTION_REASON_THRESHOLD,
                "Similar descriptions",
            ),
            (self.tags > TAGS_REASON_THRESHOLD, "Overlapping tags"),
            (self.same_department, "Same department"),
            (
                self.dependencies > DEPENDENCIES_REASON_THRESHOLD,
                "Shared dependencies",
            ),
        ]
        .into_iter()
        .filter_map(|(applies, reason)| applies.then(|| reason.to_string()))
        .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct DuplicateDetector {
    weights: SimilarityWeights,
}

impl DuplicateDetector {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Weighted similarity of two proposals, in [0, 1] for normalized weights.
    pub fn similarity(&self, left: &Process, right: &Process) -> f64 {
        SimilarityBreakdown::between(left, right).score(&self.weights)
    }

    /// All pairs scoring at least `threshold`, most similar first.
    pub fn find_duplicates(&self, processes: &[Process], threshold: f64) -> Vec<DuplicateMatch> {
        let _span = info_span!("find_duplicates", processes = processes.len(), threshold).entered();

        let mut matches = Vec::new();
        for (i, left) in processes.iter().enumerate() {
            for right in &processes[i + 1..] {
                if left.id == right.id {
                    continue;
                }

                let breakdown = SimilarityBreakdown::between(left, right);
                let similarity = breakdown.score(&self.weights);
                if similarity >= threshold {
                    matches.push(DuplicateMatch {
                        process1: left.clone(),
                        process2: right.clone(),
                        similarity,
                        reasons: breakdown.reasons(),
                    });
                }
            }
        }

        // Stable sort keeps input pair order among equal scores
        matches.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));

        debug!(matches = matches.len(), "duplicate scan complete");
        matches
    }
}

/// [`DuplicateDetector::find_duplicates`] with the default weights.
pub fn find_duplicates(processes: &[Process], threshold: f64) -> Vec<DuplicateMatch> {
    DuplicateDetector::default().find_duplicates(processes, threshold)
}
