pub mod report;
pub mod service;

pub use crate::domain::model::{Period, Ticket, TimeOfDay};
pub use crate::domain::ports::{TicketService, TicketSource};
pub use crate::utils::error::Result;
