//! Path command implementation.

use super::{check_id, GraphService};
use crate::cli::PathArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the path command.
pub fn execute_path(args: PathArgs, service: &GraphService, formatter: &Formatter) -> Result<()> {
    check_id(&args.from, service, formatter)?;
    check_id(&args.to, service, formatter)?;

    let path = service.find_dependency_path(&args.from, &args.to)?;
    println!("{}", formatter.format_path(&path)?);

    Ok(())
}
