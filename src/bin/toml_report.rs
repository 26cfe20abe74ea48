use anyhow::Context;
use clap::Parser;
use ticket_stats::config::toml_config::TomlConfig;
use ticket_stats::utils::{logger, validation::Validate};
use ticket_stats::{CsvTicketSource, DefaultTicketService, TicketReport};

#[derive(Parser)]
#[command(name = "toml-report")]
#[command(about = "Ticket reports driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "ticket-stats.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;
    config.validate().context("invalid configuration")?;

    let period = config.period()?;
    let service = DefaultTicketService::new(CsvTicketSource::new(config.source_path()));

    let mut reports = Vec::with_capacity(config.destinations().len());
    for destination in config.destinations() {
        let report = TicketReport::build(&service, destination, period)
            .with_context(|| format!("report for {} failed", destination))?;
        reports.push(report);
    }

    if config.is_json_output() {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{}\n", report);
        }
    }

    tracing::info!("Generated {} reports", reports.len());
    Ok(())
}
