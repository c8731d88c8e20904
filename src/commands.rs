//! Entry points for the host UI.
//!
//! Each command works on a [`TrackerState`] owned by the caller and reports
//! failures as display strings, leaving the wording shown to users up to the
//! host.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{self, CalendarGrid};
use crate::dataset::ImportSummary;
use crate::error::TrackerError;
use crate::models::{
    CycleSummary, HistoryRow, MonthlyCount, Prediction, Symptom, UpcomingCycle,
};
use crate::settings::TrackerPreferences;
use crate::{prediction, stats, transfer, TrackerState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub record_count: usize,
    /// Mean cycle length; `None` below two records.
    pub average_cycle: Option<f64>,
    pub days_since_last: Option<i64>,
}

pub fn add_period(
    state: &mut TrackerState,
    date: NaiveDate,
    symptoms: Vec<Symptom>,
    notes: Option<String>,
    today: NaiveDate,
) -> Result<(), String> {
    state
        .dataset
        .add(date, symptoms, notes, today)
        .map_err(|e| e.to_string())
}

pub fn import_dates(
    state: &mut TrackerState,
    raw_dates: Vec<String>,
) -> Result<ImportSummary, String> {
    state
        .dataset
        .import_raw(&raw_dates)
        .map_err(|e| e.to_string())
}

pub fn import_csv(state: &mut TrackerState, csv_text: &str) -> Result<ImportSummary, String> {
    transfer::import_csv(&mut state.dataset, csv_text)
        .map_err(|e| e.to_string())
}

pub fn export_csv(state: &TrackerState) -> Result<String, String> {
    transfer::export_complete(&state.dataset)
        .map_err(|e| e.to_string())
}

pub fn export_dates_csv(state: &TrackerState) -> Result<String, String> {
    transfer::export_dates(&state.dataset)
        .map_err(|e| e.to_string())
}

pub fn clear_data(state: &mut TrackerState) {
    state.dataset.clear();
}

pub fn compute_statistics(state: &TrackerState) -> Result<CycleSummary, String> {
    stats::compute_statistics(&state.dataset)
        .map_err(|e| e.to_string())
}

pub fn quick_stats(state: &TrackerState, today: NaiveDate) -> QuickStats {
    let summary = stats::summary(&state.dataset);

    QuickStats {
        record_count: summary.record_count,
        average_cycle: summary.lengths.map(|lengths| lengths.average),
        days_since_last: stats::days_since_last(&state.dataset, today),
    }
}

pub fn get_recent_periods(state: &TrackerState) -> Vec<HistoryRow> {
    stats::recent_periods(&state.dataset, stats::RECENT_PERIODS_LIMIT)
}

pub fn get_history(state: &TrackerState) -> Vec<HistoryRow> {
    stats::history(&state.dataset)
}

pub fn get_monthly_counts(state: &TrackerState) -> Vec<MonthlyCount> {
    stats::monthly_counts(&state.dataset)
}

pub fn predict_next(state: &TrackerState, today: NaiveDate) -> Result<Prediction, String> {
    prediction::predict_next(&state.dataset, today)
        .map_err(|e| e.to_string())
}

pub fn predict_future(state: &TrackerState, count: usize) -> Result<Vec<NaiveDate>, String> {
    prediction::predict_future(&state.dataset, count)
        .map_err(|e| e.to_string())
}

pub fn get_upcoming_cycles(
    state: &TrackerState,
    count: usize,
) -> Result<Vec<UpcomingCycle>, String> {
    prediction::upcoming_cycles(&state.dataset, count)
        .map_err(|e| e.to_string())
}

pub fn build_calendar(
    year: i32,
    month: u32,
    prediction: Option<&Prediction>,
) -> Result<CalendarGrid, String> {
    calendar::build(year, month, prediction)
        .map_err(|e| e.to_string())
}

pub fn get_preferences(state: &TrackerState) -> TrackerPreferences {
    state.settings.preferences().clone()
}

pub fn set_preferences(
    state: &mut TrackerState,
    preferences: TrackerPreferences,
) -> Result<(), String> {
    state
        .settings
        .update_preferences(preferences)
        .map_err(|e| e.to_string())
}

/// Reminder date for the next predicted period, if reminders are on and
/// there is enough history to predict.
pub fn next_reminder(state: &TrackerState, today: NaiveDate) -> Result<Option<NaiveDate>, String> {
    let reminder = state.settings.preferences().reminder;
    if !reminder.enabled {
        return Ok(None);
    }

    let prediction = match prediction::predict_next(&state.dataset, today) {
        Ok(prediction) => prediction,
        Err(TrackerError::NeedMoreData { .. }) => return Ok(None),
        Err(e) => return Err(e.to_string()),
    };

    prediction::reminder_date(&prediction, reminder.days_before)
        .map(Some)
        .map_err(|e| e.to_string())
}
