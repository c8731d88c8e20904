use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Symptom tag attached to a period start. The fixed vocabulary mirrors the
/// tracker's checkbox list; anything else goes into `Other`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Symptom {
    Cramping,
    Headache,
    Bloating,
    Fatigue,
    MoodSwings,
    Acne,
    Other(String),
}

impl Symptom {
    /// The fixed vocabulary, in display order.
    pub const VOCABULARY: [Symptom; 6] = [
        Symptom::Cramping,
        Symptom::Headache,
        Symptom::Bloating,
        Symptom::Fatigue,
        Symptom::MoodSwings,
        Symptom::Acne,
    ];

    pub fn label(&self) -> &str {
        match self {
            Symptom::Cramping => "Cramping",
            Symptom::Headache => "Headache",
            Symptom::Bloating => "Bloating",
            Symptom::Fatigue => "Fatigue",
            Symptom::MoodSwings => "Mood Swings",
            Symptom::Acne => "Acne",
            Symptom::Other(text) => text.as_str(),
        }
    }

    /// Maps a label back onto the vocabulary; unknown text becomes `Other`.
    /// Returns `None` for blank input.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return None;
        }

        let symptom = Self::VOCABULARY
            .into_iter()
            .find(|symptom| symptom.label().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| Symptom::Other(trimmed.to_string()));
        Some(symptom)
    }
}

impl fmt::Display for Symptom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One recorded period start. `date` is the natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRecord {
    pub date: NaiveDate,
    pub symptoms: BTreeSet<Symptom>,
    pub notes: Option<String>,
}

impl PeriodRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            symptoms: BTreeSet::new(),
            notes: None,
        }
    }

    pub fn with_symptoms(mut self, symptoms: impl IntoIterator<Item = Symptom>) -> Self {
        self.symptoms.extend(symptoms);
        self
    }

    /// Blank notes are stored as absent.
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes.filter(|text| !text.trim().is_empty());
        self
    }

    /// Symptoms joined the way the export and history views show them.
    pub fn symptoms_label(&self) -> String {
        self.symptoms
            .iter()
            .map(Symptom::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn notes_label(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}
