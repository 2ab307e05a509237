//! Typed traversal commands.

use super::{check_id, GraphService};
use crate::cli::{ByTypeArgs, DuplicatesArgs};
use crate::error::Result;
use crate::output::Formatter;
use civic_domain::RelationType;

/// Execute the by-type command.
pub fn execute_by_type(args: ByTypeArgs, service: &GraphService, formatter: &Formatter) -> Result<()> {
    check_id(&args.id, service, formatter)?;

    let relation: RelationType = args.relation.into();
    let reports = service.related_requests_by_type(&args.id, relation)?;
    println!("{}", formatter.format_reports(&reports)?);

    Ok(())
}

/// Execute the duplicates command.
pub fn execute_duplicates(
    args: DuplicatesArgs,
    service: &GraphService,
    formatter: &Formatter,
) -> Result<()> {
    check_id(&args.id, service, formatter)?;

    let reports = service.potential_duplicates(&args.id)?;
    println!("{}", formatter.format_reports(&reports)?);

    Ok(())
}
