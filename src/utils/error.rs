use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("failed to open ticket source {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read ticket source: {0}")]
    Read(#[from] csv::Error),

    #[error("malformed row at line {line}: expected 6 fields, found {fields}")]
    MalformedRow { line: u64, fields: usize },

    #[error("malformed identifier at line {line}: {value:?}")]
    MalformedIdentifier {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("malformed time of day at line {line}: {value:?} ({reason})")]
    MalformedTime {
        line: u64,
        value: String,
        reason: String,
    },

    #[error("malformed price at line {line}: {value:?}")]
    MalformedPrice {
        line: u64,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Internal,
    InvalidPeriod,
    NoRecords,
}

#[derive(Error, Debug)]
pub enum AggregationError {
    #[error("internal service error: {0}")]
    Internal(#[from] IngestionError),

    #[error("invalid period: {value}")]
    InvalidPeriod { value: String },

    #[error("no tickets")]
    NoRecords,
}

impl AggregationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AggregationError::Internal(_) => ErrorKind::Internal,
            AggregationError::InvalidPeriod { .. } => ErrorKind::InvalidPeriod,
            AggregationError::NoRecords => ErrorKind::NoRecords,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AggregationError::Internal(IngestionError::Open { .. }) => {
                "Check that the ticket file exists and is readable"
            }
            AggregationError::Internal(_) => {
                "Each line must look like: id,name,email,destination,H:MM,price"
            }
            AggregationError::InvalidPeriod { .. } => {
                "Use one of: early-morning, morning, afternoon, night"
            }
            AggregationError::NoRecords => "The ticket file is empty; add at least one ticket",
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::InvalidPeriod => 1,
            ErrorKind::NoRecords => 2,
            ErrorKind::Internal => 3,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid substitution pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid value for {field}: {value:?} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

pub type IngestionResult<T> = std::result::Result<T, IngestionError>;
pub type Result<T> = std::result::Result<T, AggregationError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
