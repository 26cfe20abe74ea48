use crate::utils::error::AggregationError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// One parsed ticket entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub destination: String,
    pub time: TimeOfDay,
    pub price: f64,
}

/// Time of travel without a date.
///
/// Components are stored exactly as parsed, so `25:00` or `5:75` are representable.
/// Ordering and equality use the offset from midnight in seconds, which places such
/// values where a normalising clock would put them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeOfDay {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl TimeOfDay {
    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    pub const fn hm(hour: i32, minute: i32) -> Self {
        Self::new(hour, minute, 0)
    }

    pub const fn seconds_from_midnight(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Returns `None` when any component is outside the clock range.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let hour = u32::try_from(self.hour).ok()?;
        let minute = u32::try_from(self.minute).ok()?;
        let second = u32::try_from(self.second).ok()?;
        NaiveTime::from_hms_opt(hour, minute, second)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(time.hour() as i32, time.minute() as i32, time.second() as i32)
    }
}

impl PartialEq for TimeOfDay {
    fn eq(&self, other: &Self) -> bool {
        self.seconds_from_midnight() == other.seconds_from_midnight()
    }
}

impl Eq for TimeOfDay {}

impl PartialOrd for TimeOfDay {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeOfDay {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds_from_midnight()
            .cmp(&other.seconds_from_midnight())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Time-of-day buckets, each identified by its upper boundary marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Period {
    EarlyMorning,
    Morning,
    Afternoon,
    Night,
}

impl Period {
    pub const ALL: [Period; 4] = [
        Period::EarlyMorning,
        Period::Morning,
        Period::Afternoon,
        Period::Night,
    ];

    pub const fn boundary(self) -> TimeOfDay {
        match self {
            Period::EarlyMorning => TimeOfDay::new(6, 0, 0),
            Period::Morning => TimeOfDay::new(12, 0, 0),
            Period::Afternoon => TimeOfDay::new(19, 0, 0),
            Period::Night => TimeOfDay::new(23, 59, 59),
        }
    }

    /// Resolves a boundary marker back to its period.
    pub fn from_boundary(marker: TimeOfDay) -> Result<Self, AggregationError> {
        Period::ALL
            .into_iter()
            .find(|period| period.boundary() == marker)
            .ok_or_else(|| AggregationError::InvalidPeriod {
                value: marker.to_string(),
            })
    }

    /// Bucket membership. Comparisons are strict on both sides, so a ticket exactly
    /// at 06:00:00, 12:00:00 or 19:00:00 belongs to no period.
    pub fn contains(self, time: TimeOfDay) -> bool {
        let early_morning = Period::EarlyMorning.boundary();
        let morning = Period::Morning.boundary();
        let afternoon = Period::Afternoon.boundary();

        match self {
            Period::EarlyMorning => time < early_morning,
            Period::Morning => time > early_morning && time < morning,
            Period::Afternoon => time > morning && time < afternoon,
            Period::Night => time > afternoon,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Period::EarlyMorning => "early-morning",
            Period::Morning => "morning",
            Period::Afternoon => "afternoon",
            Period::Night => "night",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Period {
    type Err = AggregationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && *c != ' ')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "earlymorning" => Ok(Period::EarlyMorning),
            "morning" => Ok(Period::Morning),
            "afternoon" => Ok(Period::Afternoon),
            "night" => Ok(Period::Night),
            _ => Err(AggregationError::InvalidPeriod {
                value: s.to_string(),
            }),
        }
    }
}
