//! Configuration for relationship inference
//!
//! Defines the fuzzy-matching thresholds and the duplicate time window.

use crate::GraphError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Thresholds used by the relationship classifier
///
/// # Examples
///
/// ```
/// use civic_graph::GraphConfig;
///
/// let config = GraphConfig::default();
/// assert_eq!(config.location_similarity_threshold, 0.85);
///
/// let config = GraphConfig::strict();
/// assert_eq!(config.duplicate_window_hours, 24);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Minimum similarity for two locations to count as the same place
    /// Default: 0.85 (inclusive)
    pub location_similarity_threshold: f64,

    /// Similarity two descriptions must exceed to count as similar
    /// Default: 0.7 (exclusive)
    pub description_similarity_threshold: f64,

    /// Reports closer together than this may be duplicates (in hours)
    /// Default: 48 hours
    pub duplicate_window_hours: u64,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            location_similarity_threshold: 0.85,
            description_similarity_threshold: 0.7,
            duplicate_window_hours: 48,
        }
    }
}

impl GraphConfig {
    /// Stricter matching: fewer, more confident links
    ///
    /// - Location: 0.92
    /// - Description: 0.8
    /// - Duplicate window: 24 hours
    pub fn strict() -> Self {
        Self {
            location_similarity_threshold: 0.92,
            description_similarity_threshold: 0.8,
            duplicate_window_hours: 24,
        }
    }

    /// Looser matching: more links, more false positives
    ///
    /// - Location: 0.75
    /// - Description: 0.6
    /// - Duplicate window: 96 hours
    pub fn lenient() -> Self {
        Self {
            location_similarity_threshold: 0.75,
            description_similarity_threshold: 0.6,
            duplicate_window_hours: 96,
        }
    }

    /// Parse and validate a configuration from TOML
    pub fn from_toml_str(s: &str) -> Result<Self, GraphError> {
        let config: GraphConfig =
            toml::from_str(s).map_err(|e| GraphError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that both thresholds lie in [0, 1]
    pub fn validate(&self) -> Result<(), GraphError> {
        for (name, value) in [
            ("location_similarity_threshold", self.location_similarity_threshold),
            ("description_similarity_threshold", self.description_similarity_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(GraphError::Config(format!(
                    "{} must be in [0, 1], got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Get the duplicate window as Duration
    pub fn duplicate_window(&self) -> Duration {
        Duration::from_secs(self.duplicate_window_hours.saturating_mul(3600))
    }
}
