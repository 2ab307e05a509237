//! Graph store: one node per report, directed weighted edges

use crate::GraphConfig;
use civic_domain::{RelationType, Report};
use std::collections::HashMap;

/// Directed link from one request to another
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    /// Id of the target report
    pub target_id: String,

    /// Why the two requests are linked
    pub relation_type: RelationType,

    /// Strength of the link [0.0, 1.0]
    pub weight: f64,

    /// Index of the target node in the graph's insertion order
    pub(crate) target: usize,
}

/// A report in the graph together with its outgoing edges
///
/// Nodes carry no traversal state; every query tracks its own visited set.
#[derive(Debug, Clone)]
pub struct Node {
    report: Report,
    pub(crate) edges: Vec<Edge>,
}

impl Node {
    fn new(report: Report) -> Self {
        Self {
            report,
            edges: Vec::new(),
        }
    }

    /// The wrapped report
    pub fn report(&self) -> &Report {
        &self.report
    }

    /// Report id
    pub fn id(&self) -> &str {
        &self.report.id
    }

    /// Outgoing edges, in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edge pointing at `target_id`, if any
    pub fn edge_to(&self, target_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.target_id == target_id)
    }
}

/// Relationship graph over service requests
///
/// Holds at most one node per report id and at most one edge per ordered
/// (source, target) pair. Nodes keep their insertion order, which the
/// builder and the statistics rely on.
///
/// Building needs `&mut self`; all queries take `&self` and keep their
/// state on the stack, so a finished graph can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct ServiceRequestGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, usize>,
    pub(crate) edge_count: usize,
    pub(crate) config: GraphConfig,
}

impl ServiceRequestGraph {
    /// Create an empty graph with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with the given thresholds
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Thresholds used when building relationships
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Add a report as a node
    ///
    /// Reports with an empty id and ids already present are ignored.
    /// Returns whether a node was inserted.
    pub fn add_request(&mut self, report: Report) -> bool {
        if report.id.is_empty() {
            tracing::debug!("Skipping report with empty id");
            return false;
        }
        if self.index.contains_key(&report.id) {
            return false;
        }

        self.index.insert(report.id.clone(), self.nodes.len());
        self.nodes.push(Node::new(report));
        true
    }

    /// Add a directed edge from `source_id` to `target_id`
    ///
    /// No-op when either id is unknown or an edge between the pair already
    /// exists in that direction, whatever its type. Weights outside [0, 1]
    /// are clamped. Returns whether an edge was inserted.
    pub fn add_relationship(
        &mut self,
        source_id: &str,
        target_id: &str,
        relation_type: RelationType,
        weight: f64,
    ) -> bool {
        let (Some(&source), Some(&target)) = (self.index.get(source_id), self.index.get(target_id))
        else {
            return false;
        };
        self.insert_edge(source, target, relation_type, weight)
    }

    pub(crate) fn insert_edge(
        &mut self,
        source: usize,
        target: usize,
        relation_type: RelationType,
        weight: f64,
    ) -> bool {
        if self.nodes[source].edges.iter().any(|e| e.target == target) {
            return false;
        }

        let weight = if (0.0..=1.0).contains(&weight) {
            weight
        } else {
            tracing::warn!(weight, "Clamping relationship weight into [0, 1]");
            if weight.is_nan() {
                0.0
            } else {
                weight.clamp(0.0, 1.0)
            }
        };

        let target_id = self.nodes[target].report.id.clone();
        self.nodes[source].edges.push(Edge {
            target_id,
            relation_type,
            weight,
            target,
        });
        self.edge_count += 1;
        true
    }

    /// Look up a node by report id
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Whether a node exists for `id`
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// All nodes, in insertion order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}
