use crate::domain::model::{Ticket, TimeOfDay};
use crate::domain::ports::TicketSource;
use crate::utils::error::{IngestionError, IngestionResult};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const FIELD_COUNT: usize = 6;

/// Ticket source backed by a headerless CSV file.
///
/// The file is opened and fully read on every `load_all` call.
#[derive(Debug, Clone)]
pub struct CsvTicketSource {
    path: PathBuf,
}

impl CsvTicketSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TicketSource for CsvTicketSource {
    fn load_all(&self) -> IngestionResult<Vec<Ticket>> {
        tracing::debug!("Reading tickets from: {}", self.path.display());

        let file = File::open(&self.path).map_err(|source| IngestionError::Open {
            path: self.path.display().to_string(),
            source,
        })?;

        let tickets = parse_tickets(file)?;
        tracing::debug!(
            "Loaded {} tickets from {}",
            tickets.len(),
            self.path.display()
        );

        Ok(tickets)
    }
}

/// Parses every row of `reader` as `id,name,email,destination,H:MM,price`.
///
/// The first bad row aborts the whole parse.
pub fn parse_tickets<R: Read>(reader: R) -> IngestionResult<Vec<Ticket>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut tickets = Vec::new();
    for result in reader.records() {
        let record = result?;
        tickets.push(parse_record(&record)?);
    }

    Ok(tickets)
}

fn parse_record(record: &StringRecord) -> IngestionResult<Ticket> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() < FIELD_COUNT {
        return Err(IngestionError::MalformedRow {
            line,
            fields: record.len(),
        });
    }

    let raw_id = &record[0];
    let id = raw_id
        .parse::<i64>()
        .map_err(|source| IngestionError::MalformedIdentifier {
            line,
            value: raw_id.to_string(),
            source,
        })?;

    let time = parse_time_of_day(&record[4], line)?;

    let raw_price = &record[5];
    let price = raw_price
        .parse::<f64>()
        .map_err(|source| IngestionError::MalformedPrice {
            line,
            value: raw_price.to_string(),
            source,
        })?;

    Ok(Ticket {
        id,
        name: record[1].to_string(),
        email: record[2].to_string(),
        destination: record[3].to_string(),
        time,
        price,
    })
}

// No range check: "25:99" is kept as hour 25, minute 99.
fn parse_time_of_day(value: &str, line: u64) -> IngestionResult<TimeOfDay> {
    let malformed = |reason: String| IngestionError::MalformedTime {
        line,
        value: value.to_string(),
        reason,
    };

    let mut parts = value.split(':');
    let hour = parts
        .next()
        .unwrap_or_default()
        .parse::<i32>()
        .map_err(|e| malformed(format!("hour: {}", e)))?;
    let minute = parts
        .next()
        .ok_or_else(|| malformed("missing minute".to_string()))?
        .parse::<i32>()
        .map_err(|e| malformed(format!("minute: {}", e)))?;

    Ok(TimeOfDay::hm(hour, minute))
}
