//! The canonical collection of recorded period starts.
//!
//! Records are kept strictly ascending by date with no duplicates. Every
//! mutation goes through [`CycleDataset::add`], [`CycleDataset::bulk_import`]
//! or [`CycleDataset::clear`], so readers never observe a partially ordered
//! view.

mod import;

pub use import::{parse_period_date, ImportSummary};

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{PeriodRecord, Symptom};
use crate::{log_debug, log_info};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleDataset {
    records: Vec<PeriodRecord>,
}

impl CycleDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dataset from arbitrary dates, dropping repeats.
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let mut dataset = Self::new();
        dataset.bulk_import(dates);
        dataset
    }

    /// Records a period start.
    ///
    /// `today` is the caller's reference date; anything after it is rejected.
    /// A rejected add leaves the dataset untouched.
    pub fn add(
        &mut self,
        date: NaiveDate,
        symptoms: impl IntoIterator<Item = Symptom>,
        notes: Option<String>,
        today: NaiveDate,
    ) -> TrackerResult<()> {
        let slot = match self.position(date) {
            Ok(_) => return Err(TrackerError::DuplicateDate { date }),
            Err(slot) => slot,
        };

        if date > today {
            return Err(TrackerError::FutureDate { date, today });
        }

        let record = PeriodRecord::new(date)
            .with_symptoms(symptoms)
            .with_notes(notes);
        self.records.insert(slot, record);

        log_info!("Recorded period start {} ({} total)", date, self.records.len());
        Ok(())
    }

    /// Merges plain dates into the dataset. Dates already present, or
    /// repeated within `dates`, are skipped silently.
    pub fn bulk_import(&mut self, dates: impl IntoIterator<Item = NaiveDate>) -> ImportSummary {
        let mut summary = ImportSummary::default();

        for date in dates {
            summary.received += 1;
            match self.position(date) {
                Ok(_) => {
                    summary.skipped += 1;
                    log_debug!("Import skipped already recorded {}", date);
                }
                Err(slot) => {
                    self.records.insert(slot, PeriodRecord::new(date));
                    summary.added += 1;
                }
            }
        }

        log_info!(
            "Imported {} new period starts ({} received, {} skipped)",
            summary.added,
            summary.received,
            summary.skipped
        );
        summary
    }

    /// Parses every raw entry before touching the dataset; the first
    /// unparsable entry aborts the import with nothing committed.
    pub fn import_raw<S: AsRef<str>>(&mut self, raw_dates: &[S]) -> TrackerResult<ImportSummary> {
        let dates = raw_dates
            .iter()
            .enumerate()
            .map(|(index, raw)| parse_period_date(raw.as_ref(), index + 1))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(self.bulk_import(dates))
    }

    pub fn clear(&mut self) {
        log_info!("Clearing {} recorded period starts", self.records.len());
        self.records.clear();
    }

    /// Ascending snapshot of every record.
    pub fn to_sorted_sequence(&self) -> &[PeriodRecord] {
        &self.records
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.records.iter().map(|record| record.date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&PeriodRecord> {
        self.position(date).ok().map(|index| &self.records[index])
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date).is_ok()
    }

    pub fn first(&self) -> Option<&PeriodRecord> {
        self.records.first()
    }

    pub fn last(&self) -> Option<&PeriodRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position(&self, date: NaiveDate) -> Result<usize, usize> {
        self.records.binary_search_by_key(&date, |record| record.date)
    }
}
