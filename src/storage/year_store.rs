//! Year file repository
//!
//! One JSON file per calendar year, each a full `YearFile`. Every save is a
//! read-modify-write of the whole year. There is no locking: two processes
//! saving the same year race and the last write wins.

use std::fs;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, info, warn};

use crate::error::HabitError;
use crate::models::{DailyEntry, YearFile};

use super::file_io::{quarantine, read_json, write_json_atomic};

/// Outcome of reading a year file from disk
#[derive(Debug)]
enum YearRead {
    Missing,
    Loaded(YearFile),
    Corrupt(HabitError),
}

/// Repository for per-year entry files
pub struct YearStore {
    data_dir: PathBuf,
    quarantine_corrupt: bool,
}

impl YearStore {
    /// Create a store rooted at `data_dir`
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            quarantine_corrupt: true,
        }
    }

    /// Whether an unparseable file is moved aside before a save replaces it
    pub fn with_quarantine(mut self, enabled: bool) -> Self {
        self.quarantine_corrupt = enabled;
        self
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    /// Path of the file for `year`
    pub fn year_path(&self, year: i32) -> PathBuf {
        self.data_dir.join(format!("{}.json", year))
    }

    fn read_year(&self, year: i32) -> YearRead {
        let path = self.year_path(year);
        if !path.exists() {
            return YearRead::Missing;
        }
        match read_json::<YearFile, _>(&path) {
            Ok(file) => YearRead::Loaded(file),
            Err(e) => YearRead::Corrupt(e),
        }
    }

    /// Load all entries for `year`
    ///
    /// A missing or unparseable file yields an empty year; this never fails.
    pub fn load_year(&self, year: i32) -> YearFile {
        match self.read_year(year) {
            YearRead::Missing => YearFile::new(),
            YearRead::Loaded(file) => {
                debug!(year, entries = file.len(), "loaded year file");
                file
            }
            YearRead::Corrupt(e) => {
                warn!(year, error = %e, "year file is unreadable, treating as empty");
                YearFile::new()
            }
        }
    }

    /// Get the entry for `date`, or an empty entry if none was saved
    pub fn get_entry(&self, date: NaiveDate) -> DailyEntry {
        self.load_year(date.year())
            .get(date)
            .cloned()
            .unwrap_or_default()
    }

    /// Store `entry` under `date`, keeping every other day of that year
    ///
    /// Returns the entry previously stored for `date`, if any.
    pub fn save_entry(
        &self,
        date: NaiveDate,
        entry: DailyEntry,
    ) -> Result<Option<DailyEntry>, HabitError> {
        let year = date.year();
        let path = self.year_path(year);

        let mut file = match self.read_year(year) {
            YearRead::Missing => YearFile::new(),
            YearRead::Loaded(file) => file,
            YearRead::Corrupt(e) => {
                warn!(year, error = %e, "overwriting unreadable year file");
                if self.quarantine_corrupt {
                    let moved = quarantine(&path)?;
                    info!(year, path = %moved.display(), "moved unreadable year file aside");
                }
                YearFile::new()
            }
        };

        let previous = file.insert(date, entry);
        write_json_atomic(&path, &file)?;
        debug!(%date, entries = file.len(), "saved entry");

        Ok(previous)
    }

    /// Years that have a file on disk, ascending
    pub fn list_years(&self) -> Result<Vec<i32>, HabitError> {
        if !self.data_dir.exists() {
            return Ok(Vec::new());
        }

        let mut years = Vec::new();
        for entry in fs::read_dir(&self.data_dir)
            .map_err(|e| HabitError::Io(format!("Failed to read data directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| HabitError::Io(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(year) = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .and_then(|s| s.parse::<i32>().ok())
                {
                    years.push(year);
                }
            }
        }

        years.sort_unstable();
        Ok(years)
    }
}
