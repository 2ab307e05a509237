//! Civic Request Graph
//!
//! In-memory relationship graph over service requests. Given a corpus of
//! reports it infers typed, weighted links between pairs of reports and
//! answers traversal queries over them.
//!
//! # Overview
//!
//! - **Similarity**: text normalization and edit-distance similarity
//! - **Categories**: static table of adjacent issue categories
//! - **Classifier**: decides which relations connect two reports
//! - **Graph store**: nodes per report id, directed weighted edges
//! - **Builder**: pairwise classification across the whole corpus
//! - **Traversal**: bounded BFS, type-filtered DFS, shortest path
//! - **Statistics**: counts, fan-out and relation distribution
//! - **Service**: lazily initialised facade over a [`ReportSource`]
//!
//! # Usage
//!
//! ```
//! use civic_domain::{RelationType, Report};
//! use civic_graph::ServiceRequestGraph;
//!
//! let mut graph = ServiceRequestGraph::new();
//! graph.add_request(Report::with_id("r1", "Main Road", "Electricity", "Streetlight out", 0));
//! graph.add_request(Report::with_id("r2", "main road.", "Electricity", "Light broken", 3600));
//! graph.build_relationships();
//!
//! let related = graph.related_requests("r1", 2);
//! assert_eq!(related.len(), 1);
//! assert_eq!(graph.get_node("r1").unwrap().edges()[0].relation_type, RelationType::SameLocation);
//! ```
//!
//! # Configuration
//!
//! Thresholds can be loaded from TOML:
//!
//! ```toml
//! location_similarity_threshold = 0.85
//! description_similarity_threshold = 0.7
//! duplicate_window_hours = 48
//! ```
//!
//! [`ReportSource`]: civic_domain::ReportSource

#![warn(missing_docs)]

pub mod categories;
pub mod similarity;

mod builder;
mod classifier;
mod config;
mod error;
mod graph;
mod service;
mod stats;
mod traversal;

pub use builder::BuildSummary;
pub use classifier::{Relation, RelationshipClassifier};
pub use config::GraphConfig;
pub use error::GraphError;
pub use graph::{Edge, Node, ServiceRequestGraph};
pub use service::RequestGraphService;
pub use stats::GraphStatistics;
pub use traversal::DEFAULT_MAX_DEPTH;
