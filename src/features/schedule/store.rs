//! Schedule store: loads the dated schedule list and answers date lookups
//!
//! The schedule file is a JSON array of per-day entries keyed by ISO date.
//! It is read once at startup and treated as immutable afterwards, so the
//! store can be shared across tasks without locking.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

use anyhow::{Context, Result};
use chrono::NaiveDate;
use log::info;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One scheduled appointment within a day.
#[derive(Debug, Clone, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub what: String,
    #[serde(default, rename = "where")]
    pub location: Option<String>,
}

/// One medication dose within a day.
///
/// The three flags mark course boundaries: `is_start` for the first day of a
/// course, `is_stop` for the last, `is_trigger` for a one-off trigger dose.
#[derive(Debug, Clone, Deserialize)]
pub struct Medication {
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_stop: bool,
    #[serde(default)]
    pub is_trigger: bool,
}

/// One calendar day's plan: optional milestone plus ordered appointment and
/// medication lists. Unknown fields in the source file are ignored; missing
/// fields default to absent/empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleEntry {
    /// `YYYY-MM-DD`, unique within the schedule.
    pub date: String,
    #[serde(default)]
    pub milestone: Option<String>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub medications: Vec<Medication>,
}

impl ScheduleEntry {
    /// True when the day has nothing to report at all.
    pub fn is_empty(&self) -> bool {
        self.milestone.is_none() && self.appointments.is_empty() && self.medications.is_empty()
    }
}

/// Immutable collection of schedule entries with lookup by calendar date.
#[derive(Debug, Clone)]
pub struct ScheduleStore {
    entries: Vec<ScheduleEntry>,
}

impl ScheduleStore {
    /// Load the schedule from a JSON file.
    ///
    /// A missing or malformed file is a hard error: the caller must halt
    /// rather than operate on an empty schedule.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Schedule file not found at {}", path.display()))?;
        let entries: Vec<ScheduleEntry> = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid schedule JSON in {}", path.display()))?;

        info!("Loaded {} schedule entries from {}", entries.len(), path.display());
        Ok(Self { entries })
    }

    /// Build a store directly from entries (tests and embedding).
    pub fn from_entries(entries: Vec<ScheduleEntry>) -> Self {
        Self { entries }
    }

    /// Exact-match lookup by calendar date.
    pub fn find(&self, date: NaiveDate) -> Option<&ScheduleEntry> {
        let key = date.format("%Y-%m-%d").to_string();
        self.entries.iter().find(|entry| entry.date == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
