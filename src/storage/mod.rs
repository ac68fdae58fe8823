//! Storage layer for the habit tracker
//!
//! Provides per-year JSON file storage with atomic writes and automatic
//! directory creation, plus the audit trail of saves.

pub mod file_io;
pub mod year_store;

pub use file_io::{read_json, write_json_atomic};
pub use year_store::YearStore;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::HabitPaths;
use crate::config::settings::Settings;
use crate::error::HabitError;

/// Main storage coordinator
pub struct Storage {
    paths: HabitPaths,
    pub years: YearStore,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: HabitPaths, settings: &Settings) -> Result<Self, HabitError> {
        paths.ensure_directories()?;

        Ok(Self {
            years: YearStore::new(paths.data_dir()).with_quarantine(settings.quarantine_corrupt),
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: settings.audit_enabled,
            paths,
        })
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Record a first save
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Result<(), HabitError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity))
    }

    /// Record an overwrite
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), HabitError> {
        if !self.audit_enabled {
            return Ok(());
        }
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            before,
            after,
            diff_summary,
        ))
    }
}
