use crate::core::{Period, Result, Ticket, TicketService, TicketSource};
use crate::utils::error::AggregationError;

/// Answers ticket queries by reloading the injected source on every call.
pub struct DefaultTicketService<S: TicketSource> {
    source: S,
}

impl<S: TicketSource> DefaultTicketService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    fn load(&self) -> Result<Vec<Ticket>> {
        self.source.load_all().map_err(|e| {
            tracing::debug!("Ticket source failed: {}", e);
            AggregationError::Internal(e)
        })
    }
}

fn count_destination(tickets: &[Ticket], destination: &str) -> usize {
    tickets
        .iter()
        .filter(|t| t.destination == destination)
        .count()
}

impl<S: TicketSource> TicketService for DefaultTicketService<S> {
    fn count_by_destination(&self, destination: &str) -> Result<usize> {
        let tickets = self.load()?;
        let total = count_destination(&tickets, destination);

        tracing::debug!("{} of {} tickets go to {}", total, tickets.len(), destination);
        Ok(total)
    }

    fn count_by_period(&self, period: Period) -> Result<usize> {
        let tickets = self.load()?;
        let total = tickets.iter().filter(|t| period.contains(t.time)).count();

        tracing::debug!("{} of {} tickets fall in {}", total, tickets.len(), period);
        Ok(total)
    }

    fn percentage_by_destination(&self, destination: &str) -> Result<f64> {
        let tickets = self.load()?;
        if tickets.is_empty() {
            return Err(AggregationError::NoRecords);
        }

        let matching = count_destination(&tickets, destination);
        let ratio = matching as f64 / tickets.len() as f64;

        tracing::debug!(
            "{} of {} tickets go to {} ({:.4})",
            matching,
            tickets.len(),
            destination,
            ratio
        );
        Ok(ratio)
    }
}
