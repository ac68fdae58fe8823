//! Reports module for the habit tracker
//!
//! Provides the summary aggregation over a year's entries and the reports
//! built on it: the monthly/yearly analysis and the annual breakdown.

pub mod analysis;
pub mod breakdown;
pub mod summary;

pub use analysis::AnalysisReport;
pub use breakdown::AnnualBreakdown;
pub use summary::{aggregate, month_name, ReportPeriod, Summary};
