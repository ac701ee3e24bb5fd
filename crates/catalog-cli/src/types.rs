use std::path::PathBuf;

use catalog_transform::CleanReport;

/// Inputs of a single cleaning run.
#[derive(Debug, Clone)]
pub struct CleanOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Run the pipeline without writing the output file.
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct CleanRun {
    pub output: PathBuf,
    /// False for dry runs.
    pub written: bool,
    pub report: CleanReport,
}
