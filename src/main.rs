use clap::Parser;
use serde_json::json;
use ticket_stats::utils::{logger, validation::Validate};
use ticket_stats::{
    AggregationError, CliConfig, Command, CsvTicketSource, DefaultTicketService, Period,
    TicketReport, TicketService,
};

fn run(config: &CliConfig) -> Result<String, AggregationError> {
    let service = DefaultTicketService::new(CsvTicketSource::new(&config.file));

    let output = match &config.command {
        Command::Count { destination } => {
            let total = service.count_by_destination(destination)?;
            if config.json {
                json!({ "destination": destination, "total": total }).to_string()
            } else {
                format!("Total tickets to {}: {}", destination, total)
            }
        }
        Command::Period { period } => {
            let period: Period = period.parse()?;
            let total = service.count_by_period(period)?;
            if config.json {
                json!({ "period": period, "total": total }).to_string()
            } else {
                format!("Total tickets during the {} period: {}", period, total)
            }
        }
        Command::Percentage { destination } => {
            let ratio = service.percentage_by_destination(destination)?;
            if config.json {
                json!({ "destination": destination, "ratio": ratio }).to_string()
            } else {
                format!("Percentage of tickets to {}: {:.2}%", destination, ratio * 100.0)
            }
        }
        Command::Report {
            destination,
            period,
        } => {
            let report = TicketReport::build(&service, destination, period.parse()?)?;
            if config.json {
                report.to_json().unwrap_or_else(|_| report.to_string())
            } else {
                report.to_string()
            }
        }
    };

    Ok(output)
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting ticket-stats");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    match run(&config) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!("Query failed: {} (kind: {:?})", e, e.kind());
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
