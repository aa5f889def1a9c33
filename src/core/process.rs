use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessStatus {
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    #[serde(rename = "In Development")]
    InDevelopment,
    Deployed,
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Submitted => "Submitted",
            Self::UnderReview => "Under Review",
            Self::InDevelopment => "In Development",
            Self::Deployed => "Deployed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// A process automation proposal submitted to the Center of Excellence.
///
/// `dependencies` is free text naming other systems or processes. It is
/// resolved against titles and tags by a [`crate::dependency::DependencyResolver`]
/// and may match zero, one, or many processes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Process {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub department: String,
    pub priority: Priority,
    #[serde(rename = "expectedROI")]
    pub expected_roi: f64,
    pub status: ProcessStatus,
    pub submitted_by: String,
    pub submitted_date: NaiveDate,
    #[serde(default)]
    pub estimated_savings: f64,
    pub complexity: Complexity,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Process {
    /// Minimal proposal with neutral metadata, mostly useful for fixtures.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            department: String::new(),
            priority: Priority::Medium,
            expected_roi: 0.0,
            status: ProcessStatus::Submitted,
            submitted_by: String::new(),
            submitted_date: NaiveDate::default(),
            estimated_savings: 0.0,
            complexity: Complexity::Medium,
            dependencies: Vec::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_expected_roi(mut self, expected_roi: f64) -> Self {
        self.expected_roi = expected_roi;
        self
    }

    pub fn with_status(mut self, status: ProcessStatus) -> Self {
        self.status = status;
        self
    }
}
