//! Report module - the service request submitted by a resident

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Lifecycle status of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssueStatus {
    /// Submitted, not yet looked at
    #[default]
    Received,
    /// Being triaged
    UnderReview,
    /// Work has started
    InProgress,
    /// Closed
    Resolved,
}

impl IssueStatus {
    /// Human-readable status text
    pub fn label(&self) -> &'static str {
        match self {
            IssueStatus::Received => "Report Received",
            IssueStatus::UnderReview => "Under Review",
            IssueStatus::InProgress => "In Progress",
            IssueStatus::Resolved => "Resolved",
        }
    }
}

/// Priority level of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IssuePriority {
    /// Immediate danger
    Emergency,
    /// Essential services
    High,
    /// Everything else
    #[default]
    Standard,
    /// Amenities
    Low,
}

impl IssuePriority {
    /// Priority assigned to a freshly submitted report of `category`
    pub fn for_category(category: &str) -> Self {
        match category {
            "Water & Sanitation" | "Electricity" => IssuePriority::High,
            "Parks & Recreation" => IssuePriority::Low,
            _ => IssuePriority::Standard,
        }
    }

    /// Human-readable priority text
    pub fn label(&self) -> &'static str {
        match self {
            IssuePriority::Emergency => "Emergency",
            IssuePriority::High => "High Priority",
            IssuePriority::Standard => "Standard",
            IssuePriority::Low => "Low Priority",
        }
    }
}

/// A service request reported by a resident
///
/// Reports are owned by the issue-report store. The request graph only
/// reads them and never mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unique identifier (must be non-empty to enter the graph)
    pub id: String,

    /// Free-text location, e.g. "12 Main Road, Rondebosch"
    #[serde(default)]
    pub location: String,

    /// Issue category, compared case-insensitively
    #[serde(default)]
    pub category: String,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// When the report was submitted (seconds since Unix epoch)
    pub reported_at: u64,

    /// Current status
    #[serde(default)]
    pub status: IssueStatus,

    /// Current priority
    #[serde(default)]
    pub priority: IssuePriority,
}

impl Report {
    /// Create a new report with a generated UUIDv7 id, stamped now
    pub fn new(
        location: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let reported_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        Self::with_id(
            uuid::Uuid::now_v7().to_string(),
            location,
            category,
            description,
            reported_at,
        )
    }

    /// Create a report with an explicit id and timestamp
    pub fn with_id(
        id: impl Into<String>,
        location: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
        reported_at: u64,
    ) -> Self {
        let category = category.into();
        let priority = IssuePriority::for_category(&category);

        Self {
            id: id.into(),
            location: location.into(),
            category,
            description: description.into(),
            reported_at,
            status: IssueStatus::Received,
            priority,
        }
    }

    /// Absolute difference between two report timestamps, in seconds
    pub fn seconds_apart(&self, other: &Report) -> u64 {
        self.reported_at.abs_diff(other.reported_at)
    }
}
