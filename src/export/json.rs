//! JSON Export functionality
//!
//! Exports a year's entries with schema versioning and metadata.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{HabitError, HabitResult};
use crate::models::YearFile;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Export of one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub year: i32,

    pub metadata: ExportMetadata,

    pub entries: YearFile,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub entry_count: usize,
    pub earliest_entry: Option<String>,
    pub latest_entry: Option<String>,
}

impl YearExport {
    pub fn new(year: i32, entries: YearFile) -> Self {
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k).collect();
        let metadata = ExportMetadata {
            entry_count: entries.len(),
            earliest_entry: keys.first().map(|k| k.to_string()),
            latest_entry: keys.last().map(|k| k.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            year,
            metadata,
            entries,
        }
    }
}

/// Export a year to pretty-printed JSON
pub fn export_year_json<W: Write>(year: i32, year_file: &YearFile, writer: &mut W) -> HabitResult<()> {
    let export = YearExport::new(year, year_file.clone());
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| HabitError::Export(format!("Failed to serialize export: {}", e)))?;
    writeln!(writer).map_err(|e| HabitError::Export(e.to_string()))?;
    Ok(())
}
