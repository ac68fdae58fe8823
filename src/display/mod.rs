//! Display formatting for terminal output
//!
//! Provides utilities for formatting entries and reports for terminal display.

pub mod entry;
pub mod report;

pub use entry::format_entry_details;
pub use report::{format_bar, format_money, separator};
