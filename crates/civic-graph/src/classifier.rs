//! Pairwise relationship classification

use crate::categories;
use crate::similarity;
use crate::GraphConfig;
use civic_domain::{RelationType, Report};

/// A relation approved by the classifier, with its edge weight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Relation {
    /// Type of relation
    pub relation_type: RelationType,
    /// Edge weight [0.0, 1.0]
    pub weight: f64,
}

impl Relation {
    fn of(relation_type: RelationType) -> Self {
        Self {
            relation_type,
            weight: relation_type.default_weight(),
        }
    }
}

/// Decides which relation types connect two reports
///
/// Relations are returned in a fixed attempt order: SameLocation,
/// SameCategory, RelatedCategory, Duplicate. The graph keeps only the first
/// one per direction, so this order determines what gets stored.
#[derive(Debug, Clone, Default)]
pub struct RelationshipClassifier {
    config: GraphConfig,
}

impl RelationshipClassifier {
    /// Create a classifier with the given thresholds
    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Every relation that applies between `a` and `b`, in attempt order
    pub fn classify(&self, a: &Report, b: &Report) -> Vec<Relation> {
        let mut relations = Vec::new();

        let same_location = self.is_same_location(a, b);
        let same_category = categories::eq_ignore_case(&a.category, &b.category);

        if same_location {
            relations.push(Relation::of(RelationType::SameLocation));
        }
        if same_category {
            relations.push(Relation::of(RelationType::SameCategory));
        }
        if categories::are_related(&a.category, &b.category) {
            relations.push(Relation::of(RelationType::RelatedCategory));
        }
        if same_category && same_location && self.is_close_in_time_or_text(a, b) {
            relations.push(Relation::of(RelationType::Duplicate));
        }

        relations
    }

    /// Whether `a` and `b` are probably the same issue reported twice
    pub fn is_potential_duplicate(&self, a: &Report, b: &Report) -> bool {
        categories::eq_ignore_case(&a.category, &b.category)
            && self.is_same_location(a, b)
            && self.is_close_in_time_or_text(a, b)
    }

    fn is_same_location(&self, a: &Report, b: &Report) -> bool {
        similarity::is_same_location(
            &a.location,
            &b.location,
            self.config.location_similarity_threshold,
        )
    }

    fn is_close_in_time_or_text(&self, a: &Report, b: &Report) -> bool {
        let close_in_time = a.seconds_apart(b) < self.config.duplicate_window().as_secs();

        close_in_time
            || similarity::is_similar_description(
                &a.description,
                &b.description,
                self.config.description_similarity_threshold,
            )
    }
}
