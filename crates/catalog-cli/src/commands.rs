//! Command implementations.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use catalog_ingest::read_csv_table;
use catalog_output::write_csv_table;
use catalog_transform::{CleanedDataset, clean_dataset};

use crate::types::{CleanOptions, CleanRun};

/// Read, clean and write one catalog export.
///
/// Nothing is written when the input cannot be read or parsed. With
/// `dry_run` set the pipeline still runs in full but the output file is left
/// untouched.
pub fn run_clean(options: &CleanOptions) -> Result<CleanRun> {
    let span = info_span!(
        "run",
        input = %options.input.display(),
        output = %options.output.display()
    );
    let _guard = span.enter();

    let raw = read_csv_table(&options.input)
        .with_context(|| format!("failed to load {}", options.input.display()))?;
    let CleanedDataset { mut data, report } =
        clean_dataset(raw).context("failed to clean dataset")?;

    let written = if options.dry_run {
        info!("dry run, output not written");
        false
    } else {
        write_csv_table(&mut data, &options.output)
            .with_context(|| format!("failed to save {}", options.output.display()))?;
        true
    };

    Ok(CleanRun {
        output: options.output.clone(),
        written,
        report,
    })
}
