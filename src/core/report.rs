use crate::core::{Period, Result, TicketService};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three headline figures for one destination and one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketReport {
    pub destination: String,
    pub destination_total: usize,
    pub period: Period,
    pub period_total: usize,
    pub destination_ratio: f64,
    pub generated_at: DateTime<Utc>,
}

impl TicketReport {
    /// Runs each query independently; the first failing query aborts the report.
    pub fn build<T: TicketService + ?Sized>(
        service: &T,
        destination: &str,
        period: Period,
    ) -> Result<Self> {
        let destination_total = service.count_by_destination(destination)?;
        let period_total = service.count_by_period(period)?;
        let destination_ratio = service.percentage_by_destination(destination)?;

        tracing::debug!(
            "Report for {} / {}: {} tickets, {} in period, ratio {:.4}",
            destination,
            period,
            destination_total,
            period_total,
            destination_ratio
        );

        Ok(Self {
            destination: destination.to_string(),
            destination_total,
            period,
            period_total,
            destination_ratio,
            generated_at: Utc::now(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for TicketReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Total tickets to {}: {}",
            self.destination, self.destination_total
        )?;
        writeln!(
            f,
            "Total tickets during the {} period: {}",
            self.period, self.period_total
        )?;
        write!(
            f,
            "Percentage of tickets to {}: {:.2}%",
            self.destination,
            self.destination_ratio * 100.0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockTicketSource;
    use crate::core::service::DefaultTicketService;
    use crate::core::{Ticket, TimeOfDay};
    use crate::utils::error::ErrorKind;

    fn tickets() -> Vec<Ticket> {
        [("Japan", 5), ("Japan", 13), ("Peru", 4), ("Chile", 22)]
            .iter()
            .enumerate()
            .map(|(i, (destination, hour))| Ticket {
                id: i as i64 + 1,
                name: "Someone".to_string(),
                email: "someone@example.com".to_string(),
                destination: destination.to_string(),
                time: TimeOfDay::hm(*hour, 30),
                price: 250.0,
            })
            .collect()
    }

    #[test]
    fn test_build_report() {
        let service = DefaultTicketService::new(MockTicketSource::with_tickets(tickets()));
        let report = TicketReport::build(&service, "Japan", Period::EarlyMorning).unwrap();

        assert_eq!(report.destination_total, 2);
        assert_eq!(report.period_total, 2);
        assert_eq!(report.destination_ratio, 0.5);

        let text = report.to_string();
        assert!(text.contains("Total tickets to Japan: 2"));
        assert!(text.contains("early-morning period: 2"));
        assert!(text.contains("Percentage of tickets to Japan: 50.00%"));
    }

    #[test]
    fn test_report_json() {
        let service = DefaultTicketService::new(MockTicketSource::with_tickets(tickets()));
        let report = TicketReport::build(&service, "Peru", Period::Night).unwrap();

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["destination"], "Peru");
        assert_eq!(json["period"], "night");
        assert_eq!(json["period_total"], 1);
        assert_eq!(json["destination_ratio"], 0.25);
    }

    #[test]
    fn test_report_fails_on_empty_source() {
        let service = DefaultTicketService::new(MockTicketSource::empty());
        let err = TicketReport::build(&service, "Japan", Period::Night).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoRecords);
    }
}
