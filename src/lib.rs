pub mod calendar;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod models;
pub mod prediction;
pub mod settings;
pub mod stats;
pub mod transfer;
mod utils;

use std::path::Path;

use anyhow::Result;

pub use calendar::{CalendarCell, CalendarGrid, CellState};
pub use dataset::{CycleDataset, ImportSummary};
pub use error::{ImportError, TrackerError, TrackerResult};
pub use models::{
    CycleInterval, CycleSummary, HistoryRow, LengthStats, MonthlyCount, PeriodRecord, Prediction,
    Symptom, UpcomingCycle,
};
use settings::SettingsStore;

/// Everything one tracking session owns. The host keeps a single instance
/// and serializes access to it.
pub struct TrackerState {
    pub(crate) dataset: CycleDataset,
    pub(crate) settings: SettingsStore,
}

impl TrackerState {
    /// Opens preferences under `data_dir`, creating the directory if needed.
    /// The dataset starts empty; hosts restore it through a CSV import.
    pub fn new(data_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(data_dir)?;
        let settings = SettingsStore::new(data_dir.join("settings.json"))?;

        Ok(Self {
            dataset: CycleDataset::new(),
            settings,
        })
    }

    pub fn dataset(&self) -> &CycleDataset {
        &self.dataset
    }
}

/// Installs `env_logger`, honouring `RUST_LOG` and defaulting to info.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();

    log::info!("CycleSync core ready");
}
