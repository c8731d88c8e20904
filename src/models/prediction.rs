use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Projection derived from the recorded cycle history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Mean cycle length the projection was built from.
    pub average_cycle_length: f64,
    pub next_period_date: NaiveDate,
    pub ovulation_date: NaiveDate,
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    pub future_dates: Vec<NaiveDate>,
}

impl Prediction {
    pub fn is_predicted_start(&self, date: NaiveDate) -> bool {
        date == self.next_period_date
    }

    /// Window bounds are inclusive.
    pub fn is_fertile(&self, date: NaiveDate) -> bool {
        self.fertile_window_start <= date && date <= self.fertile_window_end
    }
}

/// Row of the forecast table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingCycle {
    /// 1-based.
    pub cycle: usize,
    pub date: NaiveDate,
    pub weekday: String,
}
