//! Service layer for the habit tracker
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation and auditing of saves.

pub mod entry;

pub use entry::{EntryService, SavedEntry};
