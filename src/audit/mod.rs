//! Audit logging system for the habit tracker
//!
//! Records every save of a daily entry with before/after values in an
//! append-only audit log.
//!
//! # Architecture
//!
//! - `AuditEntry`: a single log entry with timestamp, operation, the saved
//!   date and optional before/after values.
//! - `AuditLogger`: appends entries to the log file as JSON lines (JSONL).
//! - `generate_diff`: field-level summary of what changed between saves.

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
