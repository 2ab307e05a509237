//! Integration tests for civic-graph
//!
//! These tests build graphs from small corpora and check the relationship
//! and traversal guarantees end to end.

use civic_domain::{RelationType, Report};
use civic_graph::{ServiceRequestGraph, DEFAULT_MAX_DEPTH};
use proptest::prelude::*;
use std::collections::{HashMap, VecDeque};

const HOUR: u64 = 3600;

fn build(reports: Vec<Report>) -> ServiceRequestGraph {
    let mut graph = ServiceRequestGraph::new();
    for report in reports {
        graph.add_request(report);
    }
    graph.build_relationships();
    graph
}

fn ids(reports: &[&Report]) -> Vec<String> {
    reports.iter().map(|r| r.id.clone()).collect()
}

/// Hop distances from `start` computed independently of the library
fn hop_distances(graph: &ServiceRequestGraph, start: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start.to_string(), 0);
    queue.push_back(start.to_string());

    while let Some(id) = queue.pop_front() {
        let d = dist[&id];
        for edge in graph.get_node(&id).unwrap().edges() {
            if !dist.contains_key(&edge.target_id) {
                dist.insert(edge.target_id.clone(), d + 1);
                queue.push_back(edge.target_id.clone());
            }
        }
    }
    dist
}

/// A -[SameCategory]- B -[SameLocation]- C, nothing between A and C
fn chain() -> ServiceRequestGraph {
    build(vec![
        Report::with_id("A", "Alpha Avenue", "Housing", "Roof leaking", 0),
        Report::with_id("B", "Zeta Road", "Housing", "Broken gutter", 0),
        Report::with_id("C", "Zeta Road", "Parks & Recreation", "Fallen tree", 0),
    ])
}

#[test]
fn test_chain_relations() {
    let graph = chain();
    let a = graph.get_node("A").unwrap();
    let b = graph.get_node("B").unwrap();

    assert_eq!(a.edges().len(), 1);
    assert_eq!(a.edge_to("B").unwrap().relation_type, RelationType::SameCategory);
    assert_eq!(b.edge_to("C").unwrap().relation_type, RelationType::SameLocation);
    assert!(a.edge_to("C").is_none());
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_chain_shortest_path() {
    let graph = chain();
    assert_eq!(ids(&graph.shortest_path("A", "C")), vec!["A", "B", "C"]);
    assert_eq!(ids(&graph.shortest_path("C", "A")), vec!["C", "B", "A"]);
}

#[test]
fn test_chain_neighborhood_depths() {
    let graph = chain();
    assert_eq!(ids(&graph.related_requests("A", 1)), vec!["B"]);
    assert_eq!(ids(&graph.related_requests("A", 2)), vec!["B", "C"]);
    assert_eq!(
        ids(&graph.related_requests("A", DEFAULT_MAX_DEPTH)),
        vec!["B", "C"]
    );
}

#[test]
fn test_chain_type_filtered_reachability() {
    let graph = chain();
    assert_eq!(
        ids(&graph.related_requests_by_type("A", RelationType::SameCategory)),
        vec!["B"]
    );
    assert!(graph
        .related_requests_by_type("A", RelationType::SameLocation)
        .is_empty());
    assert_eq!(
        ids(&graph.related_requests_by_type("C", RelationType::SameLocation)),
        vec!["B"]
    );
}

#[test]
fn test_main_road_vs_main_rd() {
    // "main road" vs "main rd" is 7/9 similar, below the 0.85 location bar,
    // so the pair is linked by category only and never as a duplicate
    let graph = build(vec![
        Report::with_id("R1", "Main Road", "Electricity", "Streetlight out", 0),
        Report::with_id("R2", "Main Rd", "Electricity", "Streetlight out", HOUR),
    ]);

    for (from, to) in [("R1", "R2"), ("R2", "R1")] {
        let edge = graph.get_node(from).unwrap().edge_to(to).unwrap();
        assert_eq!(edge.relation_type, RelationType::SameCategory);
        assert_eq!(edge.weight, 0.8);
    }
    assert!(graph
        .related_requests_by_type("R1", RelationType::Duplicate)
        .is_empty());
}

#[test]
fn test_same_location_outranks_duplicate() {
    let graph = build(vec![
        Report::with_id("R1", "Main Road", "Electricity", "Streetlight out", 0),
        Report::with_id("R2", "MAIN ROAD.", "Electricity", "Streetlight out", HOUR),
    ]);

    let edge = graph.get_node("R1").unwrap().edge_to("R2").unwrap();
    assert_eq!(edge.relation_type, RelationType::SameLocation);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.statistics().relation_distribution.get("Duplicate"), None);
}

#[test]
fn test_parks_and_water_stay_unlinked() {
    let graph = build(vec![
        Report::with_id("R3", "Kirstenbosch Gardens", "Parks & Recreation", "Broken bench", 0),
        Report::with_id("R4", "Voortrekker Road", "Water & Sanitation", "Burst pipe", 0),
    ]);

    assert_eq!(graph.edge_count(), 0);
    assert!(graph.related_requests("R3", 5).is_empty());
}

#[test]
fn test_manual_depends_on_link() {
    let mut graph = chain();
    assert!(graph.add_relationship("A", "C", RelationType::DependsOn, 1.0));

    assert_eq!(ids(&graph.shortest_path("A", "C")), vec!["A", "C"]);
    assert_eq!(ids(&graph.related_requests("A", 1)), vec!["C", "B"]);
    // Only one direction was linked manually
    assert!(graph.get_node("C").unwrap().edge_to("A").is_none());
}

#[test]
fn test_statistics_after_build() {
    let stats = chain().statistics();
    assert_eq!(stats.total_nodes, 3);
    assert_eq!(stats.total_edges, 4);
    assert!((stats.average_connections - 4.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats.most_connected, "B (2 connections)");
    assert_eq!(stats.relation_distribution.get("SameCategory"), Some(&2));
    assert_eq!(stats.relation_distribution.get("SameLocation"), Some(&2));
}

#[test]
fn test_concurrent_traversals_match_sequential() {
    let reports: Vec<Report> = (0..40)
        .map(|i| {
            Report::with_id(
                format!("r{}", i),
                format!("{} Main Road", i % 5),
                ["Electricity", "Housing", "Water & Sanitation"][i % 3],
                "Reported issue",
                (i as u64) * 10 * HOUR,
            )
        })
        .collect();
    let graph = build(reports);

    let expected: Vec<(Vec<String>, Vec<String>, Vec<String>)> = (0..40)
        .map(|i| {
            let id = format!("r{}", i);
            (
                ids(&graph.related_requests(&id, 2)),
                ids(&graph.related_requests_by_type(&id, RelationType::SameCategory)),
                ids(&graph.shortest_path(&id, "r0")),
            )
        })
        .collect();

    std::thread::scope(|scope| {
        for worker in 0..8 {
            let graph = &graph;
            let expected = &expected;
            scope.spawn(move || {
                for round in 0..40 {
                    let i = (round + worker * 5) % 40;
                    let id = format!("r{}", i);
                    assert_eq!(ids(&graph.related_requests(&id, 2)), expected[i].0);
                    assert_eq!(
                        ids(&graph.related_requests_by_type(&id, RelationType::SameCategory)),
                        expected[i].1
                    );
                    assert_eq!(ids(&graph.shortest_path(&id, "r0")), expected[i].2);
                }
            });
        }
    });
}

fn arb_report(index: usize) -> impl Strategy<Value = Report> {
    (
        prop::sample::select(vec!["Main Road", "main road.", "Main Rd", "Long Street", "Long Streat", ""]),
        prop::sample::select(vec![
            "Electricity",
            "electricity",
            "Housing",
            "Water & Sanitation",
            "Waste Management",
            "Parks & Recreation",
        ]),
        prop::sample::select(vec!["Burst pipe", "burst pipe", "Streetlight out", ""]),
        0u64..(120 * HOUR),
    )
        .prop_map(move |(location, category, description, at)| {
            Report::with_id(format!("r{}", index), location, category, description, at)
        })
}

fn arb_corpus() -> impl Strategy<Value = Vec<Report>> {
    (1usize..12).prop_flat_map(|n| (0..n).map(arb_report).collect::<Vec<_>>())
}

proptest! {
    /// Property: automatic edges come in symmetric pairs and never loop
    #[test]
    fn test_build_symmetric_without_self_loops(corpus in arb_corpus()) {
        let graph = build(corpus);

        let mut counted = 0;
        for node in graph.nodes() {
            for edge in node.edges() {
                counted += 1;
                prop_assert_ne!(&edge.target_id, &node.report().id);

                let back = graph.get_node(&edge.target_id).unwrap().edge_to(node.id());
                let back = back.expect("reverse edge present");
                prop_assert_eq!(back.relation_type, edge.relation_type);
                prop_assert_eq!(back.weight, edge.weight);
            }
        }
        prop_assert_eq!(counted, graph.edge_count());
    }

    /// Property: re-adding reports changes nothing
    #[test]
    fn test_add_request_idempotent(corpus in arb_corpus()) {
        let mut graph = build(corpus.clone());
        let (nodes, edges) = (graph.node_count(), graph.edge_count());

        for report in corpus {
            prop_assert!(!graph.add_request(report));
        }
        prop_assert_eq!(graph.node_count(), nodes);
        prop_assert_eq!(graph.edge_count(), edges);
    }

    /// Property: neighborhoods exclude the start and respect the hop bound
    #[test]
    fn test_neighborhood_bounds(corpus in arb_corpus(), depth in 0usize..4) {
        let graph = build(corpus);

        for node in graph.nodes() {
            let dist = hop_distances(&graph, node.id());
            let related = graph.related_requests(node.id(), depth);

            prop_assert!(related.iter().all(|r| r.id != node.id()));
            prop_assert!(related.iter().all(|r| dist[&r.id] <= depth));

            let expected = dist.values().filter(|&&d| d >= 1 && d <= depth).count();
            prop_assert_eq!(related.len(), expected);
        }
    }

    /// Property: shortest paths are hop-optimal, empty iff unreachable
    #[test]
    fn test_shortest_path_hop_optimal(corpus in arb_corpus()) {
        let graph = build(corpus);

        for from in graph.nodes() {
            let dist = hop_distances(&graph, from.id());
            for to in graph.nodes() {
                let path = graph.shortest_path(from.id(), to.id());
                match dist.get(to.id()) {
                    Some(&d) => {
                        prop_assert_eq!(path.len(), d + 1);
                        prop_assert_eq!(&path[0].id, &from.report().id);
                        prop_assert_eq!(&path[d].id, &to.report().id);
                    }
                    None => prop_assert!(path.is_empty()),
                }
            }
        }
    }
}
