//! Core data models for the habit tracker
//!
//! This module contains the data structures for a tracked day, the per-year
//! collection of days and the raw form snapshot users fill in.

pub mod entry;
pub mod field;
pub mod form;
pub mod quantity;
pub mod year;

pub use entry::{DailyEntry, MorningJuice};
pub use field::{Field, FieldKind};
pub use form::{parse_date, DateSelection, EntryForm};
pub use quantity::{Quantity, QuantityError};
pub use year::{date_key, YearFile};
