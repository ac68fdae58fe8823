//! Entry service
//!
//! Provides the read-modify-write flow behind the daily form: load a day into
//! a form snapshot, validate a submitted snapshot, store it and audit it.

use chrono::NaiveDate;
use tracing::debug;

use crate::audit::{generate_diff, EntityType};
use crate::error::HabitResult;
use crate::models::{date_key, DailyEntry, DateSelection, EntryForm};
use crate::storage::Storage;

/// Result of a successful save
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEntry {
    pub date: NaiveDate,
    pub entry: DailyEntry,
    /// Whether the day had no entry before this save
    pub created: bool,
    /// Field changes relative to the previous entry
    pub changes: Option<String>,
}

/// Service for daily entry management
pub struct EntryService<'a> {
    storage: &'a Storage,
}

impl<'a> EntryService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Stored entry for `date`, empty when nothing was saved
    pub fn get_entry(&self, date: NaiveDate) -> DailyEntry {
        self.storage.years.get_entry(date)
    }

    /// Form prefilled with the stored entry for `date`
    pub fn form_for_date(&self, date: NaiveDate) -> EntryForm {
        EntryForm::from_entry(&self.get_entry(date))
    }

    /// Form for a user's date selection
    ///
    /// An impossible selection (April 31st) yields a cleared form.
    pub fn load_form(&self, selection: DateSelection) -> EntryForm {
        match selection.resolve() {
            Some(date) => self.form_for_date(date),
            None => {
                debug!(?selection, "date selection does not exist, clearing form");
                EntryForm::cleared()
            }
        }
    }

    /// Validate `form` and store it as the entry for `date`
    ///
    /// Nothing is written when any field fails validation.
    pub fn save_form(&self, date: NaiveDate, form: &EntryForm) -> HabitResult<SavedEntry> {
        let entry = form.validate()?;
        self.save_entry(date, entry)
    }

    /// Store an already validated entry for `date`
    pub fn save_entry(&self, date: NaiveDate, entry: DailyEntry) -> HabitResult<SavedEntry> {
        let previous = self.storage.years.save_entry(date, entry.clone())?;
        let key = date_key(date);

        let (created, changes) = match previous {
            None => {
                self.storage
                    .log_create(EntityType::DailyEntry, key, &entry)?;
                (true, None)
            }
            Some(before) => {
                let changes = generate_diff(
                    &serde_json::to_value(&before)?,
                    &serde_json::to_value(&entry)?,
                );
                if changes.is_some() {
                    self.storage.log_update(
                        EntityType::DailyEntry,
                        key,
                        &before,
                        &entry,
                        changes.clone(),
                    )?;
                }
                (false, changes)
            }
        };

        Ok(SavedEntry {
            date,
            entry,
            created,
            changes,
        })
    }
}
