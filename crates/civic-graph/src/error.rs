//! Error types for request graph operations

use thiserror::Error;

/// Errors that can occur while building or serving the request graph
///
/// Lookups never fail: unknown ids produce empty results instead.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Relationship building was cancelled by the caller
    #[error("Relationship build cancelled after {pairs_compared} pair comparisons")]
    Cancelled {
        /// Pairs classified before the cancellation was observed
        pairs_compared: usize,
    },

    /// The report source failed to supply the corpus
    #[error("Report source error: {0}")]
    Source(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A previous initialization panicked while holding the init lock
    #[error("Graph initialization lock poisoned")]
    InitializationPoisoned,
}
