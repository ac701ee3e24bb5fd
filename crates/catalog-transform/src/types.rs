//! Pipeline step and report types.

use serde::Serialize;

use crate::columns::{CAST, DATE_ADDED, DURATION, RATING, RELEASE_YEAR, TITLE};

/// One rule of the cleaning pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CleanStep {
    NormalizeHeaders,
    TrimText,
    DropDuplicates,
    DropMissingTitles,
    ParseDateAdded,
    ParseDuration,
    CountCast,
    FillRating,
    CoerceReleaseYear,
    DropNormalizedDuplicates,
    ReorderColumns,
}

impl CleanStep {
    /// Every step, in the order the pipeline runs them.
    pub const ALL: [CleanStep; 11] = [
        CleanStep::NormalizeHeaders,
        CleanStep::TrimText,
        CleanStep::DropDuplicates,
        CleanStep::DropMissingTitles,
        CleanStep::ParseDateAdded,
        CleanStep::ParseDuration,
        CleanStep::CountCast,
        CleanStep::FillRating,
        CleanStep::CoerceReleaseYear,
        CleanStep::DropNormalizedDuplicates,
        CleanStep::ReorderColumns,
    ];

    /// Short human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            CleanStep::NormalizeHeaders => "normalize headers",
            CleanStep::TrimText => "trim text",
            CleanStep::DropDuplicates => "drop duplicates",
            CleanStep::DropMissingTitles => "drop missing titles",
            CleanStep::ParseDateAdded => "parse date_added",
            CleanStep::ParseDuration => "parse duration",
            CleanStep::CountCast => "count cast",
            CleanStep::FillRating => "fill rating",
            CleanStep::CoerceReleaseYear => "coerce release_year",
            CleanStep::DropNormalizedDuplicates => "drop normalized duplicates",
            CleanStep::ReorderColumns => "reorder columns",
        }
    }

    /// Column the step depends on; the step is skipped when it is absent.
    pub fn required_column(self) -> Option<&'static str> {
        match self {
            CleanStep::DropMissingTitles => Some(TITLE),
            CleanStep::ParseDateAdded => Some(DATE_ADDED),
            CleanStep::ParseDuration => Some(DURATION),
            CleanStep::CountCast => Some(CAST),
            CleanStep::FillRating => Some(RATING),
            CleanStep::CoerceReleaseYear => Some(RELEASE_YEAR),
            CleanStep::NormalizeHeaders
            | CleanStep::TrimText
            | CleanStep::DropDuplicates
            | CleanStep::DropNormalizedDuplicates
            | CleanStep::ReorderColumns => None,
        }
    }

    /// What the affected count of this step measures.
    pub fn affected_unit(self) -> &'static str {
        match self {
            CleanStep::NormalizeHeaders | CleanStep::ReorderColumns => "columns renamed or moved",
            CleanStep::TrimText => "cells trimmed",
            CleanStep::DropDuplicates
            | CleanStep::DropMissingTitles
            | CleanStep::DropNormalizedDuplicates => "rows dropped",
            CleanStep::ParseDateAdded => "dates unparsed",
            CleanStep::ParseDuration => "durations without count",
            CleanStep::CountCast => "rows with cast",
            CleanStep::FillRating => "ratings filled",
            CleanStep::CoerceReleaseYear => "years nulled",
        }
    }
}

/// Whether a step ran.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    /// The step ran and changed `affected` columns, rows or cells.
    Applied { affected: usize },
    /// The step's column was absent.
    Skipped { missing_column: &'static str },
}

/// Result of one pipeline step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: CleanStep,
    #[serde(flatten)]
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn applied(step: CleanStep, affected: usize) -> Self {
        Self {
            step,
            status: StepStatus::Applied { affected },
        }
    }

    pub fn skipped(step: CleanStep, missing_column: &'static str) -> Self {
        Self {
            step,
            status: StepStatus::Skipped { missing_column },
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self.status, StepStatus::Applied { .. })
    }

    /// Affected count, or `None` when the step was skipped.
    pub fn affected(&self) -> Option<usize> {
        match self.status {
            StepStatus::Applied { affected } => Some(affected),
            StepStatus::Skipped { .. } => None,
        }
    }
}

/// Summary of a cleaning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanReport {
    pub input_rows: usize,
    pub input_columns: usize,
    pub output_rows: usize,
    pub output_columns: usize,
    pub steps: Vec<StepOutcome>,
}

impl CleanReport {
    /// Final (rows, columns).
    pub fn output_shape(&self) -> (usize, usize) {
        (self.output_rows, self.output_columns)
    }

    pub fn outcome(&self, step: CleanStep) -> Option<&StepOutcome> {
        self.steps.iter().find(|outcome| outcome.step == step)
    }
}
