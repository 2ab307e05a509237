//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use civic_domain::Report;
use civic_graph::GraphStatistics;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a list of reports.
    pub fn format_reports(&self, reports: &[Report]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(reports)?),
            OutputFormat::Table => Ok(self.format_reports_table(reports)),
            OutputFormat::Quiet => Ok(Self::ids(reports)),
        }
    }

    /// Format a path between two reports.
    pub fn format_path(&self, path: &[Report]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(path)?),
            OutputFormat::Quiet => Ok(Self::ids(path)),
            OutputFormat::Table => {
                if path.is_empty() {
                    return Ok(self.colorize("No path found.", "yellow"));
                }
                let hops = path.len() - 1;
                let chain: Vec<&str> = path.iter().map(|r| r.id.as_str()).collect();
                Ok(format!(
                    "{}\n{}",
                    self.info(&format!("{} hop(s): {}", hops, chain.join(" -> "))),
                    self.format_reports_table(path)
                ))
            }
        }
    }

    /// Format graph statistics.
    pub fn format_statistics(&self, stats: &GraphStatistics) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
            OutputFormat::Quiet => Ok(format!("{} {}", stats.total_nodes, stats.total_edges)),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Nodes".to_string(), stats.total_nodes.to_string()]);
                builder.push_record(["Edges".to_string(), stats.total_edges.to_string()]);
                builder.push_record([
                    "Average connections".to_string(),
                    format!("{:.2}", stats.average_connections),
                ]);
                builder.push_record(["Most connected".to_string(), stats.most_connected.clone()]);
                for (relation, count) in &stats.relation_distribution {
                    builder.push_record([format!("{} edges", relation), count.to_string()]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
        }
    }

    fn format_reports_table(&self, reports: &[Report]) -> String {
        if reports.is_empty() {
            return self.colorize("No related reports found.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Location", "Category", "Priority", "Status", "Reported"]);

        for report in reports {
            let reported_at = report.reported_at.to_string();
            builder.push_record([
                report.id.as_str(),
                report.location.as_str(),
                report.category.as_str(),
                report.priority.label(),
                report.status.label(),
                reported_at.as_str(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    fn ids(reports: &[Report]) -> String {
        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        ids.join("\n")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
