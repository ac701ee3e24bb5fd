//! Catalog data ingestion.
//!
//! Loads a media catalog export (UTF-8 CSV with a header row) into a Polars
//! [`DataFrame`](polars::prelude::DataFrame). Column types are inferred over
//! the whole file; empty fields load as nulls.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use catalog_ingest::read_csv_table;
//!
//! let df = read_csv_table(Path::new("raw/netflix1.csv"))?;
//! println!("{} rows", df.height());
//! ```

mod csv;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{read_csv_table, validate_encoding};
