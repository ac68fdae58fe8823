//! Habit Tracker - daily habit and personal finance journal
//!
//! This library provides the core functionality for the `habits` CLI. Each
//! day gets one entry of habit metrics (juice, water, sleep, study time,
//! social media activity) and money earned/spent, stored in one JSON file
//! per year. Reports summarise a month or a whole year.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Daily entries, form fields and year files
//! - `storage`: Per-year JSON file storage
//! - `services`: Loading and saving entries through the form
//! - `reports`: Monthly/yearly analysis and annual breakdown
//! - `audit`: Audit logging of saves
//! - `export`: CSV and JSON export of a year
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `habits` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use habit_tracker::config::{paths::HabitPaths, settings::Settings};
//! use habit_tracker::storage::Storage;
//!
//! let paths = HabitPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths, &settings)?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::HabitError;
pub use logging::init_tracing;
