//! Aggregate statistics over the request graph

use crate::ServiceRequestGraph;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of graph size and shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStatistics {
    /// Number of nodes
    pub total_nodes: usize,

    /// Number of directed edges
    pub total_edges: usize,

    /// Mean out-degree (0.0 for an empty graph)
    pub average_connections: f64,

    /// "<id> (<n> connections)" for the node with the most outgoing edges,
    /// or "None" when the graph is empty
    pub most_connected: String,

    /// Outgoing edge counts keyed by relation type name
    pub relation_distribution: BTreeMap<String, usize>,
}

impl GraphStatistics {
    /// Generate a summary report
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Request Graph Statistics".to_string(),
            "========================".to_string(),
            format!("Nodes: {}", self.total_nodes),
            format!("Edges: {}", self.total_edges),
            format!("Average connections: {:.2}", self.average_connections),
            format!("Most connected: {}", self.most_connected),
        ];

        if !self.relation_distribution.is_empty() {
            lines.push(String::new());
            lines.push("Edges by relation:".to_string());
            for (relation, count) in &self.relation_distribution {
                lines.push(format!("  {}: {}", relation, count));
            }
        }

        lines.join("\n")
    }
}

impl ServiceRequestGraph {
    /// Compute node/edge counts, fan-out and relation distribution
    pub fn statistics(&self) -> GraphStatistics {
        let total_nodes = self.nodes.len();

        let average_connections = if total_nodes == 0 {
            0.0
        } else {
            let fan_out: usize = self.nodes.iter().map(|n| n.edges().len()).sum();
            fan_out as f64 / total_nodes as f64
        };

        // Reversed so that the earliest node wins ties
        let most_connected = self
            .nodes
            .iter()
            .rev()
            .max_by_key(|n| n.edges().len())
            .map(|n| format!("{} ({} connections)", n.id(), n.edges().len()))
            .unwrap_or_else(|| "None".to_string());

        let mut relation_distribution = BTreeMap::new();
        for edge in self.nodes.iter().flat_map(|n| n.edges()) {
            *relation_distribution
                .entry(edge.relation_type.as_str().to_string())
                .or_insert(0) += 1;
        }

        GraphStatistics {
            total_nodes,
            total_edges: self.edge_count,
            average_connections,
            most_connected,
            relation_distribution,
        }
    }
}
