//! Traversal queries: bounded neighborhood, type-filtered reachability,
//! shortest path
//!
//! Every query owns its visited set, so queries on a shared graph never
//! interfere with each other.

use crate::graph::Edge;
use crate::ServiceRequestGraph;
use civic_domain::{RelationType, Report};
use std::cmp::Ordering;
use std::collections::VecDeque;

/// Default hop limit for [`ServiceRequestGraph::related_requests`]
pub const DEFAULT_MAX_DEPTH: usize = 2;

impl ServiceRequestGraph {
    /// Reports within `max_depth` hops of `id` (BFS)
    ///
    /// Each node's edges are expanded strongest first. Nodes at exactly
    /// `max_depth` are included but not expanded. The start report is never
    /// part of the result. Unknown ids yield an empty list.
    pub fn related_requests(&self, id: &str, max_depth: usize) -> Vec<&Report> {
        let Some(&start) = self.index.get(id) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited[start] = true;
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            if current != start {
                result.push(self.nodes[current].report());
            }
            if depth >= max_depth {
                continue;
            }

            for edge in self.edges_by_weight(current) {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    queue.push_back((edge.target, depth + 1));
                }
            }
        }

        result
    }

    /// Reports reachable from `id` through edges of `relation_type` only (DFS)
    ///
    /// Visits in preorder, following edges in insertion order. Uses an
    /// explicit stack so large components cannot overflow the call stack.
    pub fn related_requests_by_type(&self, id: &str, relation_type: RelationType) -> Vec<&Report> {
        let Some(&start) = self.index.get(id) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut result = Vec::new();
        // (node, position of the next edge to inspect)
        let mut stack = vec![(start, 0usize)];
        visited[start] = true;

        while let Some((node, cursor)) = stack.last_mut() {
            let edges = &self.nodes[*node].edges;
            let mut next = None;
            while *cursor < edges.len() {
                let edge = &edges[*cursor];
                *cursor += 1;
                if edge.relation_type == relation_type && !visited[edge.target] {
                    next = Some(edge.target);
                    break;
                }
            }

            match next {
                Some(target) => {
                    visited[target] = true;
                    result.push(self.nodes[target].report());
                    stack.push((target, 0));
                }
                None => {
                    stack.pop();
                }
            }
        }

        result
    }

    /// Fewest-hop path from `start_id` to `end_id`, both ends included
    ///
    /// Among paths of equal length, the one discovered first while expanding
    /// edges strongest first wins; this is not the maximum-weight path.
    /// Returns an empty list if either id is unknown or `end_id` is
    /// unreachable, and `[start]` when both ids are the same.
    pub fn shortest_path(&self, start_id: &str, end_id: &str) -> Vec<&Report> {
        let (Some(&start), Some(&end)) = (self.index.get(start_id), self.index.get(end_id)) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.nodes.len()];
        let mut queue: VecDeque<Vec<usize>> = VecDeque::new();

        visited[start] = true;
        queue.push_back(vec![start]);

        while let Some(path) = queue.pop_front() {
            let Some(&last) = path.last() else {
                continue;
            };
            if last == end {
                return path.iter().map(|&i| self.nodes[i].report()).collect();
            }

            for edge in self.edges_by_weight(last) {
                if !visited[edge.target] {
                    visited[edge.target] = true;
                    let mut next = path.clone();
                    next.push(edge.target);
                    queue.push_back(next);
                }
            }
        }

        Vec::new()
    }

    /// Outgoing edges of `node`, strongest first (stable for equal weights)
    fn edges_by_weight(&self, node: usize) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.nodes[node].edges.iter().collect();
        edges.sort_by(|a, b| b.weight.partial_cmp(&a.weight).unwrap_or(Ordering::Equal));
        edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(reports: &[&Report]) -> Vec<String> {
        reports.iter().map(|r| r.id.clone()).collect()
    }

    /// Star around "hub" with manual links of varying weight
    fn star() -> ServiceRequestGraph {
        let mut graph = ServiceRequestGraph::new();
        for id in ["hub", "weak", "strong", "mid", "leaf"] {
            graph.add_request(Report::with_id(id, "", "", "", 0));
        }
        graph.add_relationship("hub", "weak", RelationType::RelatedCategory, 0.6);
        graph.add_relationship("hub", "strong", RelationType::Duplicate, 0.95);
        graph.add_relationship("hub", "mid", RelationType::SameCategory, 0.8);
        graph.add_relationship("weak", "leaf", RelationType::SameCategory, 0.8);
        graph
    }

    #[test]
    fn test_bfs_orders_by_weight() {
        let graph = star();
        assert_eq!(
            ids(&graph.related_requests("hub", 1)),
            vec!["strong", "mid", "weak"]
        );
        assert_eq!(
            ids(&graph.related_requests("hub", 2)),
            vec!["strong", "mid", "weak", "leaf"]
        );
    }

    #[test]
    fn test_bfs_depth_zero_is_empty() {
        assert!(star().related_requests("hub", 0).is_empty());
    }

    #[test]
    fn test_unknown_ids_give_empty_results() {
        let graph = star();
        assert!(graph.related_requests("nope", 2).is_empty());
        assert!(graph.related_requests_by_type("nope", RelationType::Duplicate).is_empty());
        assert!(graph.shortest_path("nope", "hub").is_empty());
        assert!(graph.shortest_path("hub", "nope").is_empty());
    }

    #[test]
    fn test_dfs_follows_only_requested_type() {
        let graph = star();
        assert_eq!(
            ids(&graph.related_requests_by_type("hub", RelationType::SameCategory)),
            vec!["mid"]
        );
        assert_eq!(
            ids(&graph.related_requests_by_type("weak", RelationType::SameCategory)),
            vec!["leaf"]
        );
    }

    #[test]
    fn test_dfs_preorder_over_insertion_order() {
        let mut graph = ServiceRequestGraph::new();
        for id in ["a", "b", "c", "d"] {
            graph.add_request(Report::with_id(id, "", "", "", 0));
        }
        let t = RelationType::DependsOn;
        graph.add_relationship("a", "b", t, 0.1);
        graph.add_relationship("a", "d", t, 0.9);
        graph.add_relationship("b", "c", t, 0.5);
        graph.add_relationship("c", "a", t, 0.5);

        // Recursion would go a -> b -> c (back to a is visited) then d
        assert_eq!(ids(&graph.related_requests_by_type("a", t)), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_shortest_path_same_node() {
        let graph = star();
        assert_eq!(ids(&graph.shortest_path("hub", "hub")), vec!["hub"]);
    }

    #[test]
    fn test_shortest_path_respects_direction() {
        let graph = star();
        assert_eq!(ids(&graph.shortest_path("hub", "leaf")), vec!["hub", "weak", "leaf"]);
        assert!(graph.shortest_path("leaf", "hub").is_empty());
    }

    #[test]
    fn test_shortest_path_prefers_strong_edges_on_ties() {
        let mut graph = ServiceRequestGraph::new();
        for id in ["s", "x", "y", "t"] {
            graph.add_request(Report::with_id(id, "", "", "", 0));
        }
        graph.add_relationship("s", "x", RelationType::RelatedCategory, 0.6);
        graph.add_relationship("s", "y", RelationType::SameLocation, 0.9);
        graph.add_relationship("x", "t", RelationType::SameLocation, 0.9);
        graph.add_relationship("y", "t", RelationType::RelatedCategory, 0.6);

        assert_eq!(ids(&graph.shortest_path("s", "t")), vec!["s", "y", "t"]);
    }
}
