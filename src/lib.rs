pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{CsvTicketSource, MockTicketSource};
pub use crate::core::{report::TicketReport, service::DefaultTicketService};
pub use domain::model::{Period, Ticket, TimeOfDay};
pub use domain::ports::{TicketService, TicketSource};
pub use utils::error::{AggregationError, ErrorKind, IngestionError, Result};
