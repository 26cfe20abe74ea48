use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use ticket_stats::{
    CsvTicketSource, DefaultTicketService, ErrorKind, IngestionError, Period, TicketReport,
    TicketService, TimeOfDay,
};

fn ticket_file(lines: &[&str]) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    for line in lines {
        writeln!(temp_file, "{}", line).unwrap();
    }
    temp_file
}

fn service_for(file: &NamedTempFile) -> DefaultTicketService<CsvTicketSource> {
    DefaultTicketService::new(CsvTicketSource::new(file.path()))
}

#[test]
fn test_brazil_argentina_scenario_from_file() {
    let file = ticket_file(&[
        "1,John Doe,johndoe@gmail.com,Brazil,0:00,100",
        "2,Jane Doe,janedoe@gmail.com,Argentina,0:00,100",
    ]);
    let service = service_for(&file);

    assert_eq!(service.count_by_destination("Brazil").unwrap(), 1);
    assert_eq!(service.percentage_by_destination("Brazil").unwrap(), 0.5);
    assert_eq!(service.count_by_period(Period::EarlyMorning).unwrap(), 2);
}

#[test]
fn test_unknown_destination_counts_zero() {
    let file = ticket_file(&[
        "1,A,a@x.com,Japan,08:15,410.5",
        "2,B,b@x.com,Peru,14:45,380",
    ]);
    let service = service_for(&file);

    for destination in ["Chile", "japan", "", "Japan "] {
        assert_eq!(service.count_by_destination(destination).unwrap(), 0);
    }
}

#[test]
fn test_empty_file_asymmetry() {
    let file = ticket_file(&[]);
    let service = service_for(&file);

    assert_eq!(service.count_by_destination("Japan").unwrap(), 0);
    assert_eq!(service.count_by_period(Period::Night).unwrap(), 0);

    let err = service.percentage_by_destination("Japan").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoRecords);
}

#[test]
fn test_period_buckets_from_file() {
    let file = ticket_file(&[
        "1,A,a@x.com,Japan,5:59,1",
        "2,B,b@x.com,Japan,6:00,1",
        "3,C,c@x.com,Japan,6:01,1",
        "4,D,d@x.com,Japan,12:00,1",
        "5,E,e@x.com,Japan,12:30,1",
        "6,F,f@x.com,Japan,19:00,1",
        "7,G,g@x.com,Japan,19:01,1",
        "8,H,h@x.com,Japan,23:59,1",
    ]);
    let service = service_for(&file);

    assert_eq!(service.count_by_period(Period::EarlyMorning).unwrap(), 1);
    assert_eq!(service.count_by_period(Period::Morning).unwrap(), 1);
    assert_eq!(service.count_by_period(Period::Afternoon).unwrap(), 1);
    assert_eq!(service.count_by_period(Period::Night).unwrap(), 2);

    let bucketed: usize = Period::ALL
        .iter()
        .map(|p| service.count_by_period(*p).unwrap())
        .sum();
    assert!(bucketed <= 8);
    assert_eq!(bucketed, 5);
}

#[test]
fn test_invalid_period_marker() {
    let file = ticket_file(&["1,A,a@x.com,Japan,5:59,1"]);
    let service = service_for(&file);

    let err = service
        .count_by_period_marker(TimeOfDay::hm(13, 0))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPeriod);

    let err = "brunch".parse::<Period>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPeriod);
}

#[test]
fn test_missing_file_fails_every_query_as_internal() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("tickets.csv");
    let service = DefaultTicketService::new(CsvTicketSource::new(&missing));

    let errors = [
        service.count_by_destination("Japan").unwrap_err(),
        service.count_by_period(Period::Morning).unwrap_err(),
        service.percentage_by_destination("Japan").unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::Internal);
        let cause = std::error::Error::source(&err).unwrap();
        let ingestion = cause.downcast_ref::<IngestionError>().unwrap();
        assert!(matches!(ingestion, IngestionError::Open { .. }));
    }
}

#[test]
fn test_non_numeric_hour_fails_every_query_as_internal() {
    let file = ticket_file(&[
        "1,A,a@x.com,Japan,08:15,410.5",
        "2,B,b@x.com,Peru,xx:45,380",
    ]);
    let service = service_for(&file);

    let errors = [
        service.count_by_destination("Japan").unwrap_err(),
        service.count_by_period(Period::Morning).unwrap_err(),
        service.percentage_by_destination("Japan").unwrap_err(),
    ];

    for err in errors {
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.to_string().contains("malformed time of day at line 2"));
    }
}

#[test]
fn test_short_row_is_reported_not_panicked() {
    let file = ticket_file(&["1,A,a@x.com,Japan"]);
    let service = service_for(&file);

    let err = service.count_by_destination("Japan").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Internal);
    assert!(err.to_string().contains("expected 6 fields, found 4"));
}

#[test]
fn test_file_changes_are_seen_by_next_query() {
    let mut file = ticket_file(&["1,A,a@x.com,Japan,08:15,410.5"]);
    let service = service_for(&file);

    assert_eq!(service.count_by_destination("Japan").unwrap(), 1);

    writeln!(file, "2,B,b@x.com,Japan,09:15,99").unwrap();
    file.flush().unwrap();

    assert_eq!(service.count_by_destination("Japan").unwrap(), 2);
}

#[test]
fn test_report_from_file() {
    let file = ticket_file(&[
        "1,A,a@x.com,Japan,03:10,410.5",
        "2,B,b@x.com,Japan,16:20,380",
        "3,C,c@x.com,Peru,04:30,120",
        "4,D,d@x.com,Chile,21:05,640",
    ]);
    let service = service_for(&file);

    let report = TicketReport::build(&service, "Japan", Period::EarlyMorning).unwrap();

    assert_eq!(report.destination_total, 2);
    assert_eq!(report.period_total, 2);
    assert_eq!(report.destination_ratio, 0.5);
    assert!(report
        .to_string()
        .contains("Percentage of tickets to Japan: 50.00%"));
}
