//! Ordered cleaning pipeline.

use polars::prelude::DataFrame;
use tracing::{debug, info, info_span};

use crate::data_utils::has_column;
use crate::error::Result;
use crate::executors;
use crate::types::{CleanReport, CleanStep, StepOutcome};

/// A cleaned table together with the report of how it was produced.
#[derive(Debug, Clone)]
pub struct CleanedDataset {
    pub data: DataFrame,
    pub report: CleanReport,
}

/// Run every [`CleanStep`] over a raw catalog table.
///
/// Steps run in [`CleanStep::ALL`] order. Before each step the table is
/// checked for the step's column; an absent column skips the step and is
/// recorded in the report rather than treated as an error.
///
/// # Errors
///
/// Only structural DataFrame failures are returned; dirty cell values become
/// nulls.
pub fn clean_dataset(mut df: DataFrame) -> Result<CleanedDataset> {
    let span = info_span!("clean");
    let _guard = span.enter();

    let (input_rows, input_columns) = df.shape();
    info!(rows = input_rows, columns = input_columns, "cleaning dataset");

    let mut steps = Vec::with_capacity(CleanStep::ALL.len());
    for step in CleanStep::ALL {
        steps.push(run_step(&mut df, step)?);
    }

    let (output_rows, output_columns) = df.shape();
    info!(rows = output_rows, columns = output_columns, "dataset cleaned");

    Ok(CleanedDataset {
        data: df,
        report: CleanReport {
            input_rows,
            input_columns,
            output_rows,
            output_columns,
            steps,
        },
    })
}

fn run_step(df: &mut DataFrame, step: CleanStep) -> Result<StepOutcome> {
    if let Some(column) = step.required_column()
        && !has_column(df, column)
    {
        debug!(step = step.label(), column, "column absent, step skipped");
        return Ok(StepOutcome::skipped(step, column));
    }

    let affected = match step {
        CleanStep::NormalizeHeaders => executors::normalize_column_names(df)?,
        CleanStep::TrimText => executors::trim_text_columns(df)?,
        CleanStep::DropDuplicates => executors::drop_duplicate_rows(df)?,
        CleanStep::DropMissingTitles => executors::drop_missing_titles(df)?,
        CleanStep::ParseDateAdded => executors::derive_date_added(df)?,
        CleanStep::ParseDuration => executors::derive_duration(df)?,
        CleanStep::CountCast => executors::derive_cast_count(df)?,
        CleanStep::FillRating => executors::fill_missing_ratings(df)?,
        CleanStep::CoerceReleaseYear => executors::coerce_release_year(df)?,
        // rating and release_year rewrites can make distinct rows identical
        CleanStep::DropNormalizedDuplicates => executors::drop_duplicate_rows(df)?,
        CleanStep::ReorderColumns => executors::reorder_columns(df)?,
    };

    info!(
        step = step.label(),
        affected,
        unit = step.affected_unit(),
        "step applied"
    );
    Ok(StepOutcome::applied(step, affected))
}
