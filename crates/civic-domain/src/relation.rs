//! Relation types between service requests

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why two service requests are linked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelationType {
    /// Both requests were reported at (approximately) the same location
    SameLocation,

    /// Both requests share a category
    SameCategory,

    /// The categories are adjacent (e.g. Water & Sanitation and Roads & Transport)
    RelatedCategory,

    /// One request depends on another. Only created by manual linking.
    DependsOn,

    /// The requests probably describe the same issue
    Duplicate,
}

impl RelationType {
    /// All relation types, in declaration order
    pub const ALL: [RelationType; 5] = [
        RelationType::SameLocation,
        RelationType::SameCategory,
        RelationType::RelatedCategory,
        RelationType::DependsOn,
        RelationType::Duplicate,
    ];

    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationType::SameLocation => "SameLocation",
            RelationType::SameCategory => "SameCategory",
            RelationType::RelatedCategory => "RelatedCategory",
            RelationType::DependsOn => "DependsOn",
            RelationType::Duplicate => "Duplicate",
        }
    }

    /// Weight attached to edges of this type
    ///
    /// Automatic classification always uses these weights. `DependsOn` is
    /// only created manually and defaults to full strength.
    pub fn default_weight(&self) -> f64 {
        match self {
            RelationType::SameLocation => 0.9,
            RelationType::SameCategory => 0.8,
            RelationType::RelatedCategory => 0.6,
            RelationType::DependsOn => 1.0,
            RelationType::Duplicate => 0.95,
        }
    }

    /// Parse a relation type, ignoring case, `_` and `-`
    ///
    /// Accepts `SameLocation`, `same_location`, `same-location`, ...
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        match key.as_str() {
            "samelocation" => Some(RelationType::SameLocation),
            "samecategory" => Some(RelationType::SameCategory),
            "relatedcategory" => Some(RelationType::RelatedCategory),
            "dependson" => Some(RelationType::DependsOn),
            "duplicate" => Some(RelationType::Duplicate),
            _ => None,
        }
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RelationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation type: {}", s))
    }
}
