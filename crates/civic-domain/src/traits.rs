//! Trait definitions for external interactions
//!
//! The issue-report store lives outside this workspace; the graph only needs
//! a way to pull the corpus once.

use crate::Report;

/// Supplies the report corpus as a read-only ordered collection
///
/// Implemented by whatever owns the reports (a database-backed store, a JSON
/// file, an in-memory fixture).
pub trait ReportSource {
    /// Error type for source operations
    type Error;

    /// Return every report, in the store's stable order
    fn all_reports(&self) -> Result<Vec<Report>, Self::Error>;
}

impl ReportSource for Vec<Report> {
    type Error = std::convert::Infallible;

    fn all_reports(&self) -> Result<Vec<Report>, Self::Error> {
        Ok(self.clone())
    }
}
