use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use cyclesync_lib::calendar::{self, CalendarCell};
use cyclesync_lib::{prediction, stats, CycleDataset};
use proptest::prelude::*;

fn base() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
}

proptest! {
    #[test]
    fn dataset_is_strictly_ascending(offsets in proptest::collection::vec(0i64..2000, 0..60)) {
        let dates: Vec<NaiveDate> = offsets.iter().map(|d| base() + Duration::days(*d)).collect();
        let dataset = CycleDataset::from_dates(dates.iter().copied());

        let stored: Vec<NaiveDate> = dataset.dates().collect();
        prop_assert!(stored.windows(2).all(|pair| pair[0] < pair[1]));

        let distinct: BTreeSet<NaiveDate> = dates.into_iter().collect();
        prop_assert_eq!(stored, distinct.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn repeated_import_adds_nothing(offsets in proptest::collection::vec(0i64..2000, 1..40)) {
        let dates: Vec<NaiveDate> = offsets.iter().map(|d| base() + Duration::days(*d)).collect();
        let mut dataset = CycleDataset::from_dates(dates.iter().copied());
        let before = dataset.len();

        let summary = dataset.bulk_import(dates.iter().copied());
        prop_assert_eq!(summary.added, 0);
        prop_assert_eq!(summary.skipped, dates.len());
        prop_assert_eq!(dataset.len(), before);
    }

    #[test]
    fn interval_count_is_records_minus_one(
        offsets in proptest::collection::vec(0i64..2000, 2..40)
    ) {
        let dataset =
            CycleDataset::from_dates(offsets.iter().map(|d| base() + Duration::days(*d)));
        prop_assume!(dataset.len() >= 2);

        let summary = stats::summary(&dataset);
        prop_assert_eq!(summary.interval_count, dataset.len() - 1);
        let lengths = summary.lengths.unwrap();
        prop_assert!(lengths.shortest as f64 <= lengths.average);
        prop_assert!(lengths.average <= lengths.longest as f64);
    }

    #[test]
    fn forecast_never_moves_backwards(
        offsets in proptest::collection::vec(0i64..2000, 2..20),
        count in 1usize..15,
    ) {
        let dataset = CycleDataset::from_dates(offsets.iter().map(|d| base() + Duration::days(*d)));
        prop_assume!(dataset.len() >= 2);

        let dates = prediction::predict_future(&dataset, count).unwrap();
        prop_assert_eq!(dates.len(), count);
        let last = dataset.last().unwrap().date;
        prop_assert!(dates[0] > last);
        prop_assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn calendar_lays_out_every_day_once(year in 1970i32..2100, month in 1u32..=12) {
        let grid = calendar::build(year, month, None).unwrap();
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

        let cells: Vec<&CalendarCell> = grid.weeks.iter().flat_map(|week| week.iter()).collect();
        let lead = first.weekday().num_days_from_monday() as usize;
        prop_assert!(cells[..lead].iter().all(|cell| **cell == CalendarCell::Empty));
        prop_assert_eq!(cells[lead].date(), Some(first));

        let days: Vec<NaiveDate> = grid.days().filter_map(CalendarCell::date).collect();
        prop_assert!(days.iter().all(|date| date.month() == month && date.year() == year));
        prop_assert!(days.windows(2).all(|pair| pair[1] - pair[0] == Duration::days(1)));
        prop_assert!(grid.weeks.last().unwrap().iter().any(|cell| cell.date().is_some()));
    }
}
