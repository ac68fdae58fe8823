//! Year file model
//!
//! All entries of one calendar year keyed by `YYYY-MM-DD`. Keys are kept as
//! strings so a hand-edited file still loads; `dated_entries` parses them.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::entry::DailyEntry;

/// Date key format used in year files
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a date as a year-file key
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Entries of one calendar year
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearFile {
    entries: BTreeMap<String, DailyEntry>,
}

impl YearFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.entries.get(&date_key(date))
    }

    /// Insert or overwrite the entry for `date`, returning the previous one
    pub fn insert(&mut self, date: NaiveDate, entry: DailyEntry) -> Option<DailyEntry> {
        self.entries.insert(date_key(date), entry)
    }

    /// Insert under a raw key without validating it
    pub fn insert_raw(&mut self, key: impl Into<String>, entry: DailyEntry) -> Option<DailyEntry> {
        self.entries.insert(key.into(), entry)
    }

    /// All entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DailyEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Entries whose key parses as a date, with the key that failed otherwise
    pub fn dated_entries(&self) -> impl Iterator<Item = Result<(NaiveDate, &DailyEntry), &str>> {
        self.entries.iter().map(|(key, entry)| {
            NaiveDate::parse_from_str(key, DATE_KEY_FORMAT)
                .map(|date| (date, entry))
                .map_err(|_| key.as_str())
        })
    }
}

impl FromIterator<(NaiveDate, DailyEntry)> for YearFile {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, DailyEntry)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(date, entry)| (date_key(date), entry))
                .collect(),
        }
    }
}
