//! Lazily initialised request graph over a report source

use crate::{GraphConfig, GraphError, GraphStatistics, ServiceRequestGraph};
use civic_domain::{RelationType, Report, ReportSource};
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, OnceLock};

/// Request graph service
///
/// Pulls the corpus from a [`ReportSource`] on first use, builds the graph
/// once, then serves read-only queries. Initialization is serialized by a
/// mutex and the finished graph is published through a `OnceLock`, so
/// queries never observe a half-built graph and concurrent queries need no
/// lock at all.
///
/// # Examples
///
/// ```
/// use civic_domain::Report;
/// use civic_graph::{GraphConfig, RequestGraphService};
///
/// # fn main() -> Result<(), civic_graph::GraphError> {
/// let reports = vec![
///     Report::with_id("r1", "Long Street", "Water & Sanitation", "Burst pipe", 0),
///     Report::with_id("r2", "Long Streat", "Water & Sanitation", "Burst pipe", 60),
/// ];
/// let service = RequestGraphService::new(reports, GraphConfig::default());
///
/// let nearby = service.requests_in_same_location("r1")?;
/// assert_eq!(nearby[0].id, "r2");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RequestGraphService<S> {
    source: S,
    config: GraphConfig,
    cancel: Option<Arc<AtomicBool>>,
    graph: OnceLock<ServiceRequestGraph>,
    init_lock: Mutex<()>,
}

impl<S> RequestGraphService<S>
where
    S: ReportSource,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    /// Create a service; nothing is loaded until the first query
    pub fn new(source: S, config: GraphConfig) -> Self {
        Self {
            source,
            config,
            cancel: None,
            graph: OnceLock::new(),
            init_lock: Mutex::new(()),
        }
    }

    /// Abort graph construction when `cancel` is set
    pub fn with_cancellation(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Whether the graph has been built
    pub fn is_initialized(&self) -> bool {
        self.graph.get().is_some()
    }

    /// Load the corpus and build the graph, if not done yet
    ///
    /// A failed or cancelled initialization leaves the service
    /// uninitialized; the next call retries.
    pub fn initialize(&self) -> Result<(), GraphError> {
        self.graph().map(|_| ())
    }

    /// The built graph, initializing on first use
    pub fn graph(&self) -> Result<&ServiceRequestGraph, GraphError> {
        if let Some(graph) = self.graph.get() {
            return Ok(graph);
        }

        let _guard = self
            .init_lock
            .lock()
            .map_err(|_| GraphError::InitializationPoisoned)?;

        // Another caller may have finished while we waited
        if let Some(graph) = self.graph.get() {
            return Ok(graph);
        }

        let graph = self.build().inspect_err(|e| {
            tracing::error!(error = %e, "Failed to initialize service request graph");
        })?;

        let stats = graph.statistics();
        tracing::info!(
            "Graph initialized: {} nodes, {} edges",
            stats.total_nodes,
            stats.total_edges
        );

        Ok(self.graph.get_or_init(|| graph))
    }

    fn build(&self) -> Result<ServiceRequestGraph, GraphError> {
        let reports = self
            .source
            .all_reports()
            .map_err(|e| GraphError::Source(Box::new(e)))?;

        let mut graph = ServiceRequestGraph::with_config(self.config.clone());
        for report in reports {
            graph.add_request(report);
        }

        match &self.cancel {
            Some(cancel) => graph.build_relationships_cancellable(cancel)?,
            None => graph.build_relationships(),
        };

        Ok(graph)
    }

    /// Reports within `max_depth` hops of `id`
    pub fn related_requests(&self, id: &str, max_depth: usize) -> Result<Vec<Report>, GraphError> {
        Ok(owned(self.graph()?.related_requests(id, max_depth)))
    }

    /// Reports reachable from `id` through edges of `relation_type`
    pub fn related_requests_by_type(
        &self,
        id: &str,
        relation_type: RelationType,
    ) -> Result<Vec<Report>, GraphError> {
        Ok(owned(self.graph()?.related_requests_by_type(id, relation_type)))
    }

    /// Reports linked to `id` as being at the same location
    pub fn requests_in_same_location(&self, id: &str) -> Result<Vec<Report>, GraphError> {
        self.related_requests_by_type(id, RelationType::SameLocation)
    }

    /// Reports linked to `id` as sharing its category
    pub fn requests_in_same_category(&self, id: &str) -> Result<Vec<Report>, GraphError> {
        self.related_requests_by_type(id, RelationType::SameCategory)
    }

    /// Reports linked to `id` as probable duplicates
    pub fn potential_duplicates(&self, id: &str) -> Result<Vec<Report>, GraphError> {
        self.related_requests_by_type(id, RelationType::Duplicate)
    }

    /// Fewest-hop chain of reports from `start_id` to `end_id`
    pub fn find_dependency_path(
        &self,
        start_id: &str,
        end_id: &str,
    ) -> Result<Vec<Report>, GraphError> {
        Ok(owned(self.graph()?.shortest_path(start_id, end_id)))
    }

    /// Graph statistics
    pub fn statistics(&self) -> Result<GraphStatistics, GraphError> {
        Ok(self.graph()?.statistics())
    }
}

fn owned(reports: Vec<&Report>) -> Vec<Report> {
    reports.into_iter().cloned().collect()
}
