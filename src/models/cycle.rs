use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Gap between two consecutive period starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleInterval {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub length_days: i64,
}

impl CycleInterval {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from,
            to,
            length_days: (to - from).num_days(),
        }
    }
}

/// Interval figures. Only exists when at least one interval does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LengthStats {
    /// Unrounded arithmetic mean, in days.
    pub average: f64,
    pub shortest: i64,
    pub longest: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleSummary {
    pub record_count: usize,
    pub interval_count: usize,
    /// `None` while fewer than two periods are recorded.
    pub lengths: Option<LengthStats>,
}

impl CycleSummary {
    pub fn require_lengths(&self) -> TrackerResult<&LengthStats> {
        self.lengths.as_ref().ok_or(TrackerError::NeedMoreData {
            required: 2,
            available: self.record_count,
        })
    }
}

/// Row of the recent-periods and history tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub date: NaiveDate,
    /// Days since the previous row's date; `None` on the first row.
    pub cycle_length: Option<i64>,
    pub symptoms: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyCount {
    pub year: i32,
    pub month: u32,
    /// e.g. "March 2024"
    pub label: String,
    pub count: usize,
}
