//! Helpers for working through a list of duplicate matches.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::DuplicateMatch;

/// Share of the smaller expected ROI assumed recoverable by merging a pair
const CONSOLIDATION_RECOVERY: f64 = 0.8;

/// Pairs a reviewer has already merged or dismissed.
///
/// Keys are stored as `"{id1}-{id2}"`; lookups accept either id order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPairs {
    keys: HashSet<String>,
}

impl ResolvedPairs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, id1: &str, id2: &str) {
        self.keys.insert(format!("{id1}-{id2}"));
    }

    /// Adds a raw `"{id1}-{id2}"` key as typed on the command line.
    pub fn insert_key(&mut self, key: impl Into<String>) {
        let key = key.into();
        let key = key.trim();
        if !key.is_empty() {
            self.keys.insert(key.to_string());
        }
    }

    pub fn is_resolved(&self, id1: &str, id2: &str) -> bool {
        self.keys.contains(&format!("{id1}-{id2}")) || self.keys.contains(&format!("{id2}-{id1}"))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Drops matches whose pair has been resolved, preserving order.
    pub fn filter(&self, matches: Vec<DuplicateMatch>) -> Vec<DuplicateMatch> {
        matches
            .into_iter()
            .filter(|m| !self.is_resolved(&m.process1.id, &m.process2.id))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for ResolvedPairs {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut pairs = Self::new();
        for key in iter {
            pairs.insert_key(key);
        }
        pairs
    }
}

/// Matches grouped by the department of their first process, in order of
/// first appearance.
pub fn group_by_department(matches: &[DuplicateMatch]) -> Vec<(String, Vec<DuplicateMatch>)> {
    let mut groups: Vec<(String, Vec<DuplicateMatch>)> = Vec::new();
    for m in matches {
        let department = &m.process1.department;
        match groups.iter_mut().find(|(dept, _)| dept == department) {
            Some((_, members)) => members.push(m.clone()),
            None => groups.push((department.clone(), vec![m.clone()])),
        }
    }
    groups
}

/// Expected ROI that consolidating every pair could free up.
pub fn potential_savings(matches: &[DuplicateMatch]) -> f64 {
    matches
        .iter()
        .map(|m| m.process1.expected_roi.min(m.process2.expected_roi) * CONSOLIDATION_RECOVERY)
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityBand {
    Low,
    Medium,
    High,
}

impl SimilarityBand {
    pub fn from_score(similarity: f64) -> Self {
        if similarity >= 0.8 {
            Self::High
        } else if similarity >= 0.6 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}
