//! civic-graph - query relationships between municipal service requests.

use civic_cli::commands;
use civic_cli::{Cli, CliError, Command, Config, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> civic_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    let reports = cli.reports.ok_or_else(|| {
        CliError::InvalidInput("No report corpus given (use --reports or CIVIC_REPORTS)".to_string())
    })?;

    let service = commands::load_graph(reports, config.graph).await?;

    match cli.command {
        Command::Related(args) => commands::execute_related(args, &service, &formatter)?,
        Command::ByType(args) => commands::execute_by_type(args, &service, &formatter)?,
        Command::Duplicates(args) => commands::execute_duplicates(args, &service, &formatter)?,
        Command::Path(args) => commands::execute_path(args, &service, &formatter)?,
        Command::Stats => commands::execute_stats(&service, &formatter)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
