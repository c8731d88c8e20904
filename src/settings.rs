use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::prediction::REMINDER_DAYS_RANGE;
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    pub enabled: bool,
    /// Days ahead of the predicted start, 1 to 7.
    pub days_before: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            days_before: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    SystemDefault,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackerPreferences {
    pub reminder: ReminderSettings,
    pub theme: Theme,
}

/// Preferences persisted as JSON next to the host's data.
pub struct SettingsStore {
    path: PathBuf,
    data: TrackerPreferences,
}

impl SettingsStore {
    /// Loads `path` if present. A file that does not parse falls back to
    /// defaults; an unreadable one is an error.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                log_warn!("Ignoring malformed settings at {}: {}", path.display(), err);
                TrackerPreferences::default()
            })
        } else {
            TrackerPreferences::default()
        };

        Ok(Self { path, data })
    }

    pub fn preferences(&self) -> &TrackerPreferences {
        &self.data
    }

    pub fn update_preferences(&mut self, preferences: TrackerPreferences) -> Result<()> {
        let days = preferences.reminder.days_before;
        if !REMINDER_DAYS_RANGE.contains(&days) {
            bail!("reminder days_before must be between 1 and 7, got {days}");
        }

        self.persist(&preferences)?;
        self.data = preferences;
        log_info!("Saved preferences to {}", self.path.display());
        Ok(())
    }

    pub fn reload(&mut self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read settings from {}", self.path.display()))?;
        self.data = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed settings in {}", self.path.display()))?;
        Ok(())
    }

    fn persist(&self, data: &TrackerPreferences) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
