// Adapters layer: concrete ticket sources.

pub mod csv_source;
pub mod mock;

pub use csv_source::{parse_tickets, CsvTicketSource};
pub use mock::MockTicketSource;
