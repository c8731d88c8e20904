mod cycle;
mod prediction;
mod record;

pub use cycle::{CycleInterval, CycleSummary, HistoryRow, LengthStats, MonthlyCount};
pub use prediction::{Prediction, UpcomingCycle};
pub use record::{PeriodRecord, Symptom};
