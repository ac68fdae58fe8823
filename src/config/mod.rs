//! Configuration module for the habit tracker
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::HabitPaths;
pub use settings::Settings;
