//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph error
    #[error("Graph error: {0}")]
    Graph(#[from] civic_graph::GraphError),

    /// Report corpus could not be read
    #[error("Corpus error: {0}")]
    Corpus(#[from] crate::corpus::CorpusError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Interrupted by the user while building the graph
    #[error("Interrupted while building the request graph")]
    Interrupted,

    /// Background build task failed
    #[error("Worker error: {0}")]
    Worker(String),
}
