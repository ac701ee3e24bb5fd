//! Media catalog cleaning.
//!
//! Turns a raw catalog export, loaded as a Polars [`DataFrame`], into a cleaned
//! table by applying a fixed, ordered sequence of column rules. Later rules
//! consume columns created by earlier ones, so the order is part of the
//! contract.
//!
//! # Overview
//!
//! - **Normalization functions**: pure per-value rules (headers, dates,
//!   durations, cast lists, ratings)
//! - **Executors**: apply one rule to a whole column of a `DataFrame`
//! - **Pipeline**: runs every [`CleanStep`] in order, skipping a step when its
//!   column is absent, and records a [`CleanReport`]
//!
//! # Example
//!
//! ```ignore
//! use catalog_transform::clean_dataset;
//!
//! let cleaned = clean_dataset(raw_df)?;
//! let (rows, columns) = cleaned.report.output_shape();
//! ```
//!
//! [`DataFrame`]: polars::prelude::DataFrame

pub mod columns;
pub mod data_utils;
pub mod executors;
pub mod normalization;

mod error;
mod pipeline;
mod types;

pub use error::{Result, TransformError};
pub use pipeline::{CleanedDataset, clean_dataset};
pub use types::{CleanReport, CleanStep, StepOutcome, StepStatus};
