//! CLI command definitions and argument parsing.

use civic_domain::RelationType;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Civic request graph - explore relationships between service requests.
#[derive(Debug, Parser)]
#[command(name = "civic-graph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// JSON file containing an array of reports
    #[arg(short, long, env = "CIVIC_REPORTS", global = true)]
    pub reports: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log graph construction progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reports within a number of hops of a report
    Related(RelatedArgs),

    /// Reports reachable through one relation type
    ByType(ByTypeArgs),

    /// Probable duplicates of a report
    Duplicates(DuplicatesArgs),

    /// Fewest-hop chain between two reports
    Path(PathArgs),

    /// Graph statistics
    Stats,
}

/// Arguments for the related command.
#[derive(Debug, Parser)]
pub struct RelatedArgs {
    /// Report ID to start from
    pub id: String,

    /// Maximum number of hops
    #[arg(short, long, default_value_t = civic_graph::DEFAULT_MAX_DEPTH)]
    pub depth: usize,
}

/// Arguments for the by-type command.
#[derive(Debug, Parser)]
pub struct ByTypeArgs {
    /// Report ID to start from
    pub id: String,

    /// Relation type to follow
    #[arg(short = 't', long, value_enum)]
    pub relation: RelationArg,
}

/// Arguments for the duplicates command.
#[derive(Debug, Parser)]
pub struct DuplicatesArgs {
    /// Report ID to check
    pub id: String,
}

/// Arguments for the path command.
#[derive(Debug, Parser)]
pub struct PathArgs {
    /// Report ID the path starts at
    pub from: String,

    /// Report ID the path ends at
    pub to: String,
}

/// Relation type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum RelationArg {
    /// Same location
    SameLocation,
    /// Same category
    SameCategory,
    /// Related category
    RelatedCategory,
    /// Manual dependency link
    DependsOn,
    /// Probable duplicate
    Duplicate,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<RelationArg> for RelationType {
    fn from(relation: RelationArg) -> Self {
        match relation {
            RelationArg::SameLocation => RelationType::SameLocation,
            RelationArg::SameCategory => RelationType::SameCategory,
            RelationArg::RelatedCategory => RelationType::RelatedCategory,
            RelationArg::DependsOn => RelationType::DependsOn,
            RelationArg::Duplicate => RelationType::Duplicate,
        }
    }
}
