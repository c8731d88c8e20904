//! Cycle statistics derived from a dataset snapshot.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use crate::dataset::CycleDataset;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    CycleInterval, CycleSummary, HistoryRow, LengthStats, MonthlyCount, PeriodRecord,
};

/// Number of rows the recent-periods table shows.
pub const RECENT_PERIODS_LIMIT: usize = 5;

/// One interval per consecutive pair of records, in dataset order.
pub fn intervals(dataset: &CycleDataset) -> Vec<CycleInterval> {
    dataset
        .to_sorted_sequence()
        .windows(2)
        .map(|pair| CycleInterval::between(pair[0].date, pair[1].date))
        .collect()
}

/// Counts plus interval figures. The figures are `None` below two records.
pub fn summary(dataset: &CycleDataset) -> CycleSummary {
    let intervals = intervals(dataset);
    let lengths = length_stats(&intervals);

    CycleSummary {
        record_count: dataset.len(),
        interval_count: intervals.len(),
        lengths,
    }
}

/// Like [`summary`], but insists on defined interval figures.
pub fn compute_statistics(dataset: &CycleDataset) -> TrackerResult<CycleSummary> {
    let summary = summary(dataset);
    summary.require_lengths()?;
    Ok(summary)
}

/// Mean interval length, unrounded.
pub fn average_cycle_length(dataset: &CycleDataset) -> TrackerResult<f64> {
    let intervals = intervals(dataset);
    length_stats(&intervals)
        .map(|stats| stats.average)
        .ok_or(TrackerError::NeedMoreData {
            required: 2,
            available: dataset.len(),
        })
}

fn length_stats(intervals: &[CycleInterval]) -> Option<LengthStats> {
    let lengths: Vec<i64> = intervals.iter().map(|interval| interval.length_days).collect();
    let shortest = *lengths.iter().min()?;
    let longest = *lengths.iter().max()?;
    let average = lengths.iter().sum::<i64>() as f64 / lengths.len() as f64;

    Some(LengthStats {
        average,
        shortest,
        longest,
    })
}

/// Days between the latest recorded start and `today`.
pub fn days_since_last(dataset: &CycleDataset, today: NaiveDate) -> Option<i64> {
    dataset.last().map(|record| (today - record.date).num_days())
}

/// The latest `limit` records. Cycle lengths are measured within the window,
/// so the oldest row shown has none.
pub fn recent_periods(dataset: &CycleDataset, limit: usize) -> Vec<HistoryRow> {
    let records = dataset.to_sorted_sequence();
    let start = records.len().saturating_sub(limit);
    history_rows(&records[start..])
}

/// Every record with its cycle length and annotations.
pub fn history(dataset: &CycleDataset) -> Vec<HistoryRow> {
    history_rows(dataset.to_sorted_sequence())
}

fn history_rows(records: &[PeriodRecord]) -> Vec<HistoryRow> {
    let mut previous: Option<NaiveDate> = None;

    records
        .iter()
        .map(|record| {
            let cycle_length = previous.map(|prev| (record.date - prev).num_days());
            previous = Some(record.date);

            HistoryRow {
                date: record.date,
                cycle_length,
                symptoms: record.symptoms_label(),
                notes: record.notes_label().to_string(),
            }
        })
        .collect()
}

/// Period starts per calendar month, oldest month first.
pub fn monthly_counts(dataset: &CycleDataset) -> Vec<MonthlyCount> {
    let mut counts: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for date in dataset.dates() {
        *counts.entry((date.year(), date.month())).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((year, month), count)| MonthlyCount {
            year,
            month,
            label: month_label(year, month),
            count,
        })
        .collect()
}

/// "March 2024". Months outside 1..=12 fall back to the numeric form.
pub(crate) fn month_label(year: i32, month: u32) -> String {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first| first.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{year}-{month:02}"))
}
