//! Civic Domain Layer
//!
//! Core entities shared by the request graph and its callers. Reports are
//! owned by the issue-report store; everything here treats them as read-only
//! values.
//!
//! ## Key Concepts
//!
//! - **Report**: A citizen-submitted service request (location, category, description)
//! - **Relation type**: Why two reports are linked (same location, duplicate, ...)
//! - **Report source**: The external collaborator that supplies the corpus

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod relation;
pub mod report;
pub mod traits;

// Re-exports for convenience
pub use relation::RelationType;
pub use report::{IssuePriority, IssueStatus, Report};
pub use traits::ReportSource;
