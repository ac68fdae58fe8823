//! Records written to the audit log
//!
//! One record per save of a day: whether the day was new or overwritten,
//! the date it belongs to, and the entry as stored before and after.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a save did to the year file
///
/// Days are never removed, so a save either adds a day or overwrites one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// The date had no entry yet
    Create,
    /// The date already had an entry and it changed
    Update,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Create => "CREATE",
            Operation::Update => "UPDATE",
        })
    }
}

/// Kind of record a log line refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    DailyEntry,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityType::DailyEntry => "DailyEntry",
        })
    }
}

/// One line of the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Time of the save (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// `YYYY-MM-DD` of the saved day
    pub entity_id: String,

    /// The day as it was stored before an overwrite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The day as it is stored now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Changed fields, e.g. `water_intake: 2 -> 3`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn record(
        operation: Operation,
        entity_type: EntityType,
        entity_id: String,
        before: Option<serde_json::Value>,
        after: Option<serde_json::Value>,
        diff_summary: Option<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id,
            before,
            after,
            diff_summary,
        }
    }

    /// A day saved for the first time
    pub fn create<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity: &T,
    ) -> Self {
        Self::record(
            Operation::Create,
            entity_type,
            entity_id.into(),
            None,
            serde_json::to_value(entity).ok(),
            None,
        )
    }

    /// A day overwritten with different values
    pub fn update<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Self {
        Self::record(
            Operation::Update,
            entity_type,
            entity_id.into(),
            serde_json::to_value(before).ok(),
            serde_json::to_value(after).ok(),
            diff_summary,
        )
    }

    /// `[timestamp] OPERATION DailyEntry date`, with the changes on a second line
    pub fn format_human_readable(&self) -> String {
        let header = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        match &self.diff_summary {
            Some(diff) => format!("{}\n  Changes: {}", header, diff),
            None => header,
        }
    }
}
