//! Pairwise relationship building across the whole corpus

use crate::{GraphError, RelationshipClassifier, ServiceRequestGraph};
use std::sync::atomic::{AtomicBool, Ordering};

/// Outcome of a relationship build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Unordered report pairs classified
    pub pairs_compared: usize,

    /// Relations approved by the classifier (each is attempted in both directions)
    pub relations_proposed: usize,

    /// Directed edges actually inserted
    pub edges_added: usize,
}

impl ServiceRequestGraph {
    /// Classify every unordered pair of reports and link them
    ///
    /// Pairs are visited once each (i < j in insertion order). For every
    /// approved relation an edge is attempted i→j and then j→i with the
    /// relation's fixed weight. Since only the first edge per direction is
    /// kept, a pair that is both same-location and same-category ends up
    /// linked as SameLocation only.
    ///
    /// Cost is O(n²) similarity evaluations.
    pub fn build_relationships(&mut self) -> BuildSummary {
        let (summary, _) = self.classify_all_pairs(None);
        summary
    }

    /// Same as [`build_relationships`](Self::build_relationships), checking
    /// `cancel` before each row of the pair matrix
    ///
    /// On cancellation the edges added so far stay in the graph; callers
    /// should discard a cancelled graph.
    pub fn build_relationships_cancellable(
        &mut self,
        cancel: &AtomicBool,
    ) -> Result<BuildSummary, GraphError> {
        match self.classify_all_pairs(Some(cancel)) {
            (summary, false) => Ok(summary),
            (summary, true) => Err(GraphError::Cancelled {
                pairs_compared: summary.pairs_compared,
            }),
        }
    }

    /// Returns the summary and whether the build stopped early
    fn classify_all_pairs(&mut self, cancel: Option<&AtomicBool>) -> (BuildSummary, bool) {
        let classifier = RelationshipClassifier::new(self.config.clone());
        let mut summary = BuildSummary::default();
        let n = self.nodes.len();

        tracing::info!(reports = n, "Building request relationships");

        for i in 0..n {
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                tracing::warn!(
                    pairs_compared = summary.pairs_compared,
                    "Relationship build cancelled"
                );
                return (summary, true);
            }

            for j in (i + 1)..n {
                let relations =
                    classifier.classify(self.nodes[i].report(), self.nodes[j].report());
                summary.pairs_compared += 1;

                for relation in relations {
                    summary.relations_proposed += 1;
                    if self.insert_edge(i, j, relation.relation_type, relation.weight) {
                        summary.edges_added += 1;
                    }
                    if self.insert_edge(j, i, relation.relation_type, relation.weight) {
                        summary.edges_added += 1;
                    }
                }
            }

            tracing::trace!(row = i, edges = self.edge_count, "Classified row");
        }

        tracing::info!(
            pairs = summary.pairs_compared,
            edges_added = summary.edges_added,
            "Relationship build complete"
        );

        (summary, false)
    }
}
