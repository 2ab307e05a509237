//! Corpus loading and graph construction.

use crate::corpus::{CorpusError, JsonFileSource};
use crate::error::{CliError, Result};
use civic_graph::{GraphConfig, GraphError, RequestGraphService};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Graph service over a JSON corpus.
pub type GraphService = RequestGraphService<JsonFileSource>;

/// Load the corpus at `path` and build its graph on a blocking task.
///
/// Ctrl+C during construction cancels the build and returns
/// [`CliError::Interrupted`].
pub async fn load_graph(path: PathBuf, config: GraphConfig) -> Result<GraphService> {
    let cancel = Arc::new(AtomicBool::new(false));
    let service = GraphService::new(JsonFileSource::new(path), config).with_cancellation(cancel.clone());

    let mut handle = tokio::task::spawn_blocking(move || service.initialize().map(|_| service));

    tokio::select! {
        joined = &mut handle => {
            let service = joined
                .map_err(|e| CliError::Worker(e.to_string()))?
                .map_err(unwrap_source)?;
            Ok(service)
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupt received, cancelling graph construction");
            cancel.store(true, Ordering::SeqCst);
            // Wait for the builder to observe the flag
            let _ = handle.await;
            Err(CliError::Interrupted)
        }
    }
}

/// Surface corpus failures as [`CliError::Corpus`] instead of a boxed source
fn unwrap_source(err: GraphError) -> CliError {
    match err {
        GraphError::Source(source) => match source.downcast::<CorpusError>() {
            Ok(corpus) => CliError::Corpus(*corpus),
            Err(source) => CliError::Graph(GraphError::Source(source)),
        },
        other => CliError::Graph(other),
    }
}
