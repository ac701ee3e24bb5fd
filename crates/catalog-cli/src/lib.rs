//! CLI library components for the media catalog cleaner.

pub mod commands;
pub mod logging;
pub mod summary;
mod types;

pub use types::{CleanOptions, CleanRun};
