//! CSV export and import of recorded periods.
//!
//! Export writes `Period Start Date,Symptoms,Notes`. Import only reads the
//! `Period Start Date` column; symptoms and notes are not restored.

use std::io;

use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::Serialize;

use crate::dataset::{parse_period_date, CycleDataset, ImportSummary};
use crate::error::{ImportError, TrackerError, TrackerResult};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

pub const DATE_COLUMN: &str = "Period Start Date";

#[derive(Serialize)]
struct CompleteRow<'a> {
    #[serde(rename = "Period Start Date")]
    date: NaiveDate,
    #[serde(rename = "Symptoms")]
    symptoms: String,
    #[serde(rename = "Notes")]
    notes: &'a str,
}

#[derive(Serialize)]
struct DateRow {
    #[serde(rename = "Period Start Date")]
    date: NaiveDate,
}

/// Every record with its annotations.
pub fn export_complete(dataset: &CycleDataset) -> TrackerResult<String> {
    let rows = dataset.to_sorted_sequence().iter().map(|record| CompleteRow {
        date: record.date,
        symptoms: record.symptoms_label(),
        notes: record.notes_label(),
    });
    write_rows(rows, &[DATE_COLUMN, "Symptoms", "Notes"])
}

/// Dates only.
pub fn export_dates(dataset: &CycleDataset) -> TrackerResult<String> {
    let rows = dataset.dates().map(|date| DateRow { date });
    write_rows(rows, &[DATE_COLUMN])
}

fn write_rows<T: Serialize>(
    rows: impl Iterator<Item = T>,
    header: &[&str],
) -> TrackerResult<String> {
    // Headers are written explicitly so an empty dataset still exports them.
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(header).map_err(TrackerError::Export)?;

    let mut written = 0usize;
    for row in rows {
        writer.serialize(row).map_err(TrackerError::Export)?;
        written += 1;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| TrackerError::Export(csv::Error::from(err.into_error())))?;

    let text = String::from_utf8(bytes).map_err(|err| {
        TrackerError::Export(csv::Error::from(io::Error::new(
            io::ErrorKind::InvalidData,
            err,
        )))
    })?;

    log_info!("Exported {} rows", written);
    Ok(text)
}

/// Reads the date column from CSV input. Fails on the first bad row.
pub fn read_period_dates<R: io::Read>(reader: R) -> Result<Vec<NaiveDate>, ImportError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let column = reader
        .headers()?
        .iter()
        .position(|name| name.trim_start_matches('\u{feff}') == DATE_COLUMN)
        .ok_or_else(|| ImportError::MissingColumn {
            column: DATE_COLUMN.to_string(),
        })?;

    let mut dates = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let value = record.get(column).unwrap_or("");
        dates.push(parse_period_date(value, index + 1)?);
    }

    Ok(dates)
}

/// Merges the dates from `csv_text` into `dataset`, all or nothing.
pub fn import_csv(dataset: &mut CycleDataset, csv_text: &str) -> TrackerResult<ImportSummary> {
    let dates = read_period_dates(csv_text.as_bytes()).map_err(|err| {
        log_warn!("CSV import aborted: {}", err);
        err
    })?;
    Ok(dataset.bulk_import(dates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Symptom;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn complete_export_has_expected_columns() {
        let today = d(2024, 3, 1);
        let mut dataset = CycleDataset::new();
        dataset
            .add(
                d(2024, 1, 1),
                [Symptom::Cramping, Symptom::MoodSwings],
                Some("tired, stayed home".into()),
                today,
            )
            .unwrap();
        dataset.add(d(2024, 1, 29), Vec::new(), None, today).unwrap();

        let csv = export_complete(&dataset).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Period Start Date,Symptoms,Notes");
        assert_eq!(
            lines[1],
            "2024-01-01,\"Cramping, Mood Swings\",\"tired, stayed home\""
        );
        assert_eq!(lines[2], "2024-01-29,,");
    }

    #[test]
    fn empty_export_keeps_header() {
        let csv = export_complete(&CycleDataset::new()).unwrap();
        assert_eq!(csv.trim_end(), "Period Start Date,Symptoms,Notes");
    }

    #[test]
    fn import_ignores_other_columns() {
        let text = "Notes,Period Start Date,Extra\nhello,2024-01-29,x\n,2024-01-01,\n";
        let dates = read_period_dates(text.as_bytes()).unwrap();
        assert_eq!(dates, vec![d(2024, 1, 29), d(2024, 1, 1)]);
    }

    #[test]
    fn import_without_date_column_fails() {
        let err = read_period_dates("Period Dates\n2024-01-01\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn { .. }));
    }

    #[test]
    fn bad_row_aborts_import() {
        let mut dataset = CycleDataset::from_dates([d(2023, 12, 4)]);
        let text = "Period Start Date\n2024-01-01\nsoon\n2024-02-25\n";

        let err = import_csv(&mut dataset, text).unwrap_err();

        assert!(matches!(
            err,
            TrackerError::Import(ImportError::InvalidDate { row: 2, .. })
        ));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn round_trip_preserves_dates() {
        let original =
            CycleDataset::from_dates([d(2024, 1, 1), d(2024, 1, 29), d(2024, 2, 25)]);
        let csv = export_complete(&original).unwrap();

        let mut restored = CycleDataset::new();
        let summary = import_csv(&mut restored, &csv).unwrap();

        assert_eq!(summary.added, 3);
        assert_eq!(
            restored.dates().collect::<Vec<_>>(),
            original.dates().collect::<Vec<_>>()
        );
    }

    #[test]
    fn dates_export_round_trips_too() {
        let original = CycleDataset::from_dates([d(2024, 1, 1), d(2024, 1, 29)]);
        let csv = export_dates(&original).unwrap();
        assert!(csv.starts_with("Period Start Date\n"));

        let dates = read_period_dates(csv.as_bytes()).unwrap();
        assert_eq!(dates, vec![d(2024, 1, 1), d(2024, 1, 29)]);
    }
}
