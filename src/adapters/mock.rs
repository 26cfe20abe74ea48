use crate::domain::model::Ticket;
use crate::domain::ports::TicketSource;
use crate::utils::error::{IngestionError, IngestionResult};

type LoadFn = dyn Fn() -> IngestionResult<Vec<Ticket>> + Send + Sync;

/// Ticket source whose result comes from a closure. Used to drive the service in
/// tests without touching the filesystem.
pub struct MockTicketSource {
    load: Box<LoadFn>,
}

impl MockTicketSource {
    pub fn new<F>(load: F) -> Self
    where
        F: Fn() -> IngestionResult<Vec<Ticket>> + Send + Sync + 'static,
    {
        Self {
            load: Box::new(load),
        }
    }

    pub fn with_tickets(tickets: Vec<Ticket>) -> Self {
        Self::new(move || Ok(tickets.clone()))
    }

    pub fn empty() -> Self {
        Self::new(|| Ok(Vec::new()))
    }

    pub fn failing<F>(make_error: F) -> Self
    where
        F: Fn() -> IngestionError + Send + Sync + 'static,
    {
        Self::new(move || Err(make_error()))
    }
}

impl TicketSource for MockTicketSource {
    fn load_all(&self) -> IngestionResult<Vec<Ticket>> {
        (self.load)()
    }
}

impl std::fmt::Debug for MockTicketSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockTicketSource").finish_non_exhaustive()
    }
}
