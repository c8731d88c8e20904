//! Forward projections from the recorded history.
//!
//! All projections start from the latest recorded period and step forward by
//! the mean cycle length (see [`crate::stats::average_cycle_length`]).
//! Ovulation is back-computed from the next predicted start using a fixed
//! luteal phase; there is no per-user tuning of these offsets.

mod forecast;

use chrono::NaiveDate;

use crate::dataset::CycleDataset;
use crate::error::{TrackerError, TrackerResult};
use crate::log_debug;
use crate::models::{Prediction, UpcomingCycle};
use crate::stats::average_cycle_length;

pub use forecast::project;

const ENABLE_LOGS: bool = true;

pub const LUTEAL_PHASE_DAYS: i64 = 14;
pub const FERTILE_DAYS_BEFORE_OVULATION: i64 = 3;
pub const FERTILE_DAYS_AFTER_OVULATION: i64 = 1;

/// Allowed reminder lead times, in days.
pub const REMINDER_DAYS_RANGE: std::ops::RangeInclusive<u32> = 1..=7;

/// Next period start and fertile window. Needs at least two records.
///
/// `today` does not shift the projection; it is the reference date the
/// result is reported against (see [`days_until`]).
pub fn predict_next(dataset: &CycleDataset, today: NaiveDate) -> TrackerResult<Prediction> {
    let (anchor, average) = anchor_and_average(dataset)?;
    let future_dates = project(anchor, average, 1)?;
    let next_period_date = future_dates[0];

    let ovulation_date = forecast::shift_days(next_period_date, -LUTEAL_PHASE_DAYS)?;
    let fertile_window_start =
        forecast::shift_days(ovulation_date, -FERTILE_DAYS_BEFORE_OVULATION)?;
    let fertile_window_end = forecast::shift_days(ovulation_date, FERTILE_DAYS_AFTER_OVULATION)?;

    log_debug!(
        "Next period {} ({:.1} day mean, {} days from {})",
        next_period_date,
        average,
        (next_period_date - today).num_days(),
        today
    );

    Ok(Prediction {
        average_cycle_length: average,
        next_period_date,
        ovulation_date,
        fertile_window_start,
        fertile_window_end,
        future_dates,
    })
}

/// `count` upcoming period starts, each one mean cycle after the previous.
pub fn predict_future(dataset: &CycleDataset, count: usize) -> TrackerResult<Vec<NaiveDate>> {
    if count == 0 {
        return Err(TrackerError::InvalidCount { count });
    }
    let (anchor, average) = anchor_and_average(dataset)?;
    project(anchor, average, count)
}

/// Numbered forecast rows with weekday names.
pub fn upcoming_cycles(
    dataset: &CycleDataset,
    count: usize,
) -> TrackerResult<Vec<UpcomingCycle>> {
    let dates = predict_future(dataset, count)?;

    Ok(dates
        .into_iter()
        .enumerate()
        .map(|(index, date)| UpcomingCycle {
            cycle: index + 1,
            date,
            weekday: date.format("%A").to_string(),
        })
        .collect())
}

/// Days from `today` to the predicted start. Negative once it has passed.
pub fn days_until(prediction: &Prediction, today: NaiveDate) -> i64 {
    (prediction.next_period_date - today).num_days()
}

/// When to remind the user ahead of the predicted start.
pub fn reminder_date(prediction: &Prediction, days_before: u32) -> TrackerResult<NaiveDate> {
    if !REMINDER_DAYS_RANGE.contains(&days_before) {
        return Err(TrackerError::InvalidReminderWindow { days: days_before });
    }
    forecast::shift_days(prediction.next_period_date, -i64::from(days_before))
}

fn anchor_and_average(dataset: &CycleDataset) -> TrackerResult<(NaiveDate, f64)> {
    let average = average_cycle_length(dataset)?;
    let anchor = dataset
        .last()
        .map(|record| record.date)
        .ok_or(TrackerError::NeedMoreData {
            required: 2,
            available: 0,
        })?;
    Ok((anchor, average))
}
