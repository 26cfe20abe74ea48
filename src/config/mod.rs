pub mod toml_config;

#[cfg(feature = "cli")]
mod cli {
    use crate::utils::error::ConfigResult;
    use crate::utils::validation::{validate_path, Validate};
    use clap::{Parser, Subcommand};

    #[derive(Debug, Clone, Parser)]
    #[command(name = "ticket-stats")]
    #[command(about = "Ticket statistics over a CSV file")]
    pub struct CliConfig {
        /// Ticket file: id,name,email,destination,H:MM,price without a header row
        #[arg(long, global = true, default_value = "./tickets.csv")]
        pub file: String,

        #[arg(short, long, global = true, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, global = true, help = "Print results as JSON")]
        pub json: bool,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Clone, Subcommand)]
    pub enum Command {
        /// Count tickets to a destination
        Count {
            #[arg(long)]
            destination: String,
        },
        /// Count tickets in a period (early-morning, morning, afternoon, night)
        Period {
            #[arg(long)]
            period: String,
        },
        /// Share of tickets going to a destination
        Percentage {
            #[arg(long)]
            destination: String,
        },
        /// All three figures at once
        Report {
            #[arg(long, default_value = "Japan")]
            destination: String,
            #[arg(long, default_value = "early-morning")]
            period: String,
        },
    }

    impl Validate for CliConfig {
        fn validate(&self) -> ConfigResult<()> {
            validate_path("file", &self.file)
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
