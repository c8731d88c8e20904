//! Month grid annotated with a prediction.
//!
//! Weeks run Monday to Sunday. Cells before day 1 and after the last day of
//! the month are empty:
//!
//! ```text
//!      March 2024
//! Mo Tu We Th Fr Sa Su
//!              1  2  3   <- four leading empty cells
//!  4  5  6  7  8  9 10
//! 11 12 13 14 15 16 17
//! 18 19 20 21 22 23 24
//! 25 26 27 28 29 30 31
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Prediction;
use crate::stats::month_label;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CellState {
    Predicted,
    Fertile,
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum CalendarCell {
    Empty,
    Day {
        day: u32,
        date: NaiveDate,
        state: CellState,
    },
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day { date, .. } => Some(*date),
        }
    }

    pub fn state(&self) -> Option<CellState> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day { state, .. } => Some(*state),
        }
    }
}

pub type Week = [CalendarCell; 7];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

impl CalendarGrid {
    /// "March 2024"
    pub fn title(&self) -> String {
        month_label(self.year, self.month)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .find(|cell| cell.date() == Some(date))
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks
            .iter()
            .flat_map(|week| week.iter())
            .filter(|cell| matches!(cell, CalendarCell::Day { .. }))
    }
}

/// Lays out `year`/`month` and marks cells from `prediction`, if any.
pub fn build(
    year: i32,
    month: u32,
    prediction: Option<&Prediction>,
) -> TrackerResult<CalendarGrid> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(TrackerError::InvalidMonth { year, month })?;
    let days_in_month = days_in_month(first).ok_or(TrackerError::InvalidMonth { year, month })?;

    let lead = first.weekday().num_days_from_monday();
    let week_count = (lead + days_in_month).div_ceil(7);

    let weeks = (0..week_count)
        .map(|week| {
            std::array::from_fn(|column| {
                let position = week * 7 + column as u32;
                if position < lead || position >= lead + days_in_month {
                    return CalendarCell::Empty;
                }

                let day = position - lead + 1;
                let date = first.with_day(day).unwrap_or(first);
                CalendarCell::Day {
                    day,
                    date,
                    state: classify(date, prediction),
                }
            })
        })
        .collect();

    Ok(CalendarGrid { year, month, weeks })
}

/// Grid for the month holding the predicted next period.
pub fn for_prediction(prediction: &Prediction) -> TrackerResult<CalendarGrid> {
    let next = prediction.next_period_date;
    build(next.year(), next.month(), Some(prediction))
}

fn classify(date: NaiveDate, prediction: Option<&Prediction>) -> CellState {
    match prediction {
        Some(p) if p.is_predicted_start(date) => CellState::Predicted,
        Some(p) if p.is_fertile(date) => CellState::Fertile,
        _ => CellState::Plain,
    }
}

fn days_in_month(first: NaiveDate) -> Option<u32> {
    let next_first = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
    };
    u32::try_from((next_first - first).num_days()).ok()
}
