#![forbid(unsafe_code)]

//! Workout metric computation for running, walking and swimming.
//!
//! This crate provides:
//! - Domain types (activity kinds, workout records, computed summaries)
//! - Pure metric calculators (distance, mean speed, calories burned)
//! - A fixed-format textual workout report
//! - Athlete configuration defaults (TOML)

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use report::{summarize, training_info, UNKNOWN_TRAINING_TYPE};
