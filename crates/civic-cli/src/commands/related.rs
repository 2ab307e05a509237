//! Related command implementation.

use super::{check_id, GraphService};
use crate::cli::RelatedArgs;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the related command.
pub fn execute_related(args: RelatedArgs, service: &GraphService, formatter: &Formatter) -> Result<()> {
    check_id(&args.id, service, formatter)?;

    let reports = service.related_requests(&args.id, args.depth)?;
    println!("{}", formatter.format_reports(&reports)?);

    Ok(())
}
