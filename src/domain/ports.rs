use crate::domain::model::{Period, Ticket, TimeOfDay};
use crate::utils::error::{IngestionResult, Result};

/// Anything that can produce the full ticket set in one call.
pub trait TicketSource: Send + Sync {
    fn load_all(&self) -> IngestionResult<Vec<Ticket>>;
}

impl<T: TicketSource + ?Sized> TicketSource for &T {
    fn load_all(&self) -> IngestionResult<Vec<Ticket>> {
        (**self).load_all()
    }
}

impl<T: TicketSource + ?Sized> TicketSource for Box<T> {
    fn load_all(&self) -> IngestionResult<Vec<Ticket>> {
        (**self).load_all()
    }
}

/// Aggregate queries over a ticket set.
pub trait TicketService: Send + Sync {
    /// Number of tickets whose destination matches exactly.
    fn count_by_destination(&self, destination: &str) -> Result<usize>;

    /// Number of tickets inside the given period bucket.
    fn count_by_period(&self, period: Period) -> Result<usize>;

    /// Like `count_by_period`, addressed by the period's boundary marker.
    fn count_by_period_marker(&self, marker: TimeOfDay) -> Result<usize> {
        let period = Period::from_boundary(marker)?;
        self.count_by_period(period)
    }

    /// Share of tickets going to `destination`, in `[0, 1]`.
    fn percentage_by_destination(&self, destination: &str) -> Result<f64>;
}
