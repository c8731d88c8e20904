use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ImportError;

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATE_TIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Outcome of merging a batch of dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub received: usize,
    pub added: usize,
    /// Already recorded, or repeated within the batch.
    pub skipped: usize,
}

/// Parses one imported period start. Plain dates and ISO date-times are
/// accepted; for date-times only the calendar date is kept.
///
/// `row` is 1-based and only used for the error.
pub fn parse_period_date(raw: &str, row: usize) -> Result<NaiveDate, ImportError> {
    let value = raw.trim();

    let parsed = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
                .map(|date_time| date_time.date())
        })
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|date_time| date_time.date_naive())
        });

    parsed.ok_or_else(|| ImportError::InvalidDate {
        row,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_date_time_forms() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
        for raw in [
            "2024-01-29",
            " 2024-01-29 ",
            "2024/01/29",
            "2024-01-29 00:00:00",
            "2024-01-29T08:30:00",
            "2024-01-29T08:30:00+02:00",
        ] {
            assert_eq!(parse_period_date(raw, 1).unwrap(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn rejects_garbage_and_blank() {
        assert!(matches!(
            parse_period_date("", 3),
            Err(ImportError::InvalidDate { row: 3, .. })
        ));
        assert!(parse_period_date("2024-02-30", 1).is_err());
        assert!(parse_period_date("yesterday", 1).is_err());
    }
}
