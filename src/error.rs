use chrono::NaiveDate;

/// Failures surfaced by the tracker core. None of these are fatal; the caller
/// decides how to present them.
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("period start {date} is already recorded")]
    DuplicateDate { date: NaiveDate },

    #[error("period start {date} is after the reference date {today}")]
    FutureDate { date: NaiveDate, today: NaiveDate },

    #[error("need at least {required} recorded periods, have {available}")]
    NeedMoreData { required: usize, available: usize },

    #[error("forecast count must be at least 1, got {count}")]
    InvalidCount { count: usize },

    #[error("{year}-{month} is not a valid calendar month")]
    InvalidMonth { year: i32, month: u32 },

    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,

    #[error("reminder must be between 1 and 7 days before the period, got {days}")]
    InvalidReminderWindow { days: u32 },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error("CSV export failed")]
    Export(#[source] csv::Error),
}

/// Import failures. Any of these aborts the whole import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("CSV has no '{column}' column")]
    MissingColumn { column: String },

    #[error("row {row}: cannot parse '{value}' as a date")]
    InvalidDate { row: usize, value: String },

    #[error("CSV read failed")]
    Csv(#[from] csv::Error),
}

pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;

    use super::*;

    #[test]
    fn export_message_leaves_cause_to_the_source_chain() {
        let cause = csv::Error::from(io::Error::new(io::ErrorKind::Other, "disk full"));
        let err = TrackerError::Export(cause);

        assert_eq!(err.to_string(), "CSV export failed");
        let source = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(source.contains("disk full"));
    }

    #[test]
    fn import_errors_pass_through_unchanged() {
        let err = TrackerError::from(ImportError::MissingColumn {
            column: "Period Start Date".into(),
        });
        assert_eq!(err.to_string(), "CSV has no 'Period Start Date' column");
    }
}
