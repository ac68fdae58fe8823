//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod entry;
pub mod export;
pub mod report;

pub use audit::{handle_audit_command, AuditArgs};
pub use entry::{handle_log_command, handle_show_command, FieldArgs, LogArgs, ShowArgs};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportArgs};
