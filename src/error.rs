use chrono::NaiveTime;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StaffingError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("interval of {0} minutes is not supported (choose 15, 30 or 60)")]
    UnsupportedInterval(u32),

    #[error("shift start and end are both {start}; duration would be 0")]
    DegenerateShift { start: NaiveTime },

    #[error("name must not be empty")]
    EmptyName,

    #[error("unknown weekday {0:?}")]
    UnknownDay(String),

    #[error("unknown day interpretation {0:?}: expected \"working_days\" or \"days_off\"")]
    UnknownMode(String),

    #[error("invalid time {0:?}: expected HH:MM or HH:MM:SS")]
    InvalidTime(String),

    #[error("person {0} not found")]
    PersonNotFound(Uuid),

    #[error("roster record {record}: {source}")]
    Record {
        record: usize,
        #[source]
        source: Box<StaffingError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StaffingResult<T> = Result<T, StaffingError>;
