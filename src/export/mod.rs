//! Export module for the habit tracker
//!
//! Writes a year's entries as CSV (one row per day) or as a versioned JSON
//! document.

pub mod csv;
pub mod json;

pub use self::csv::export_year_csv;
pub use self::json::{export_year_json, YearExport, EXPORT_SCHEMA_VERSION};
