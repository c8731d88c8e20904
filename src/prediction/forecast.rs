use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{TrackerError, TrackerResult};

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Steps forward from `anchor` by `cycle_days`, `count` times.
///
/// Each step is added to the previous result's date-time, not to the anchor,
/// so fractional days carry over between steps. Dates are read off after
/// each addition, which floors any partial day.
pub fn project(
    anchor: NaiveDate,
    cycle_days: f64,
    count: usize,
) -> TrackerResult<Vec<NaiveDate>> {
    let step = Duration::microseconds((cycle_days * MICROS_PER_DAY).round() as i64);
    let mut cursor: NaiveDateTime = anchor.and_time(NaiveTime::default());
    let mut dates = Vec::new();

    for _ in 0..count {
        cursor = cursor
            .checked_add_signed(step)
            .ok_or(TrackerError::DateOutOfRange)?;
        dates.push(cursor.date());
    }

    Ok(dates)
}

pub fn shift_days(date: NaiveDate, days: i64) -> TrackerResult<NaiveDate> {
    date.checked_add_signed(Duration::days(days))
        .ok_or(TrackerError::DateOutOfRange)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn whole_day_steps_are_exact() {
        let dates = project(d(2024, 1, 1), 28.0, 2).unwrap();
        assert_eq!(dates, vec![d(2024, 1, 29), d(2024, 2, 26)]);
    }

    #[test]
    fn half_days_accumulate_across_steps() {
        // +27.5 lands at noon on Mar 23, the next step reaches midnight Apr 20.
        let dates = project(d(2024, 2, 25), 27.5, 3).unwrap();
        assert_eq!(dates, vec![d(2024, 3, 23), d(2024, 4, 20), d(2024, 5, 17)]);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(project(d(2024, 1, 1), 28.0, 0).unwrap().is_empty());
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            project(NaiveDate::MAX, 28.0, 1),
            Err(TrackerError::DateOutOfRange)
        ));
    }

    #[test]
    fn huge_count_runs_out_of_calendar() {
        assert!(matches!(
            project(d(2024, 1, 1), 28.0, usize::MAX),
            Err(TrackerError::DateOutOfRange)
        ));
    }
}
