//! Command implementations.

pub mod by_type;
pub mod load;
pub mod path;
pub mod related;
pub mod stats;

pub use self::by_type::{execute_by_type, execute_duplicates};
pub use self::load::{load_graph, GraphService};
pub use self::path::execute_path;
pub use self::related::execute_related;
pub use self::stats::execute_stats;

use crate::error::{CliError, Result};
use crate::output::Formatter;

/// Reject blank ids and warn when an id is not in the graph.
fn check_id(id: &str, service: &GraphService, formatter: &Formatter) -> Result<()> {
    if id.trim().is_empty() {
        return Err(CliError::InvalidInput("Report ID must not be empty".to_string()));
    }
    if !service.graph()?.contains(id) {
        eprintln!("{}", formatter.warning(&format!("Report '{}' is not in the corpus", id)));
    }
    Ok(())
}
