//! Stats command implementation.

use super::GraphService;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the stats command.
pub fn execute_stats(service: &GraphService, formatter: &Formatter) -> Result<()> {
    let stats = service.statistics()?;
    println!("{}", formatter.format_statistics(&stats)?);
    Ok(())
}
