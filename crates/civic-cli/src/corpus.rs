//! JSON file report source.

use civic_domain::{Report, ReportSource};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a report corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Corpus path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// File is not a JSON array of reports
    #[error("failed to parse {path}: {source}")]
    Json {
        /// Corpus path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },
}

/// Reads every report from a JSON array on disk.
///
/// The file is read each time [`ReportSource::all_reports`] is called; the
/// graph service calls it once.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The corpus path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for JsonFileSource {
    type Error = CorpusError;

    fn all_reports(&self) -> Result<Vec<Report>, Self::Error> {
        let contents = fs::read_to_string(&self.path).map_err(|source| CorpusError::Io {
            path: self.path.clone(),
            source,
        })?;

        let reports: Vec<Report> =
            serde_json::from_str(&contents).map_err(|source| CorpusError::Json {
                path: self.path.clone(),
                source,
            })?;

        tracing::info!(path = %self.path.display(), count = reports.len(), "Loaded report corpus");
        Ok(reports)
    }
}
