//! Output writers for cleaned catalog tables.
//!
//! The cleaned table is written as comma-separated UTF-8 text with a header
//! row and no index column. Missing parent directories are created first.

mod csv;
mod error;

pub use csv::{ensure_parent_dir, write_csv_table};
pub use error::{OutputError, Result};
