//! CLI argument definitions for the catalog cleaner.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "catalog-cleaner",
    version,
    about = "Clean and normalize a media catalog CSV export",
    long_about = "Clean and normalize a media catalog CSV export.\n\n\
                  Normalizes headers, trims text, drops duplicate and untitled rows,\n\
                  derives date, duration and cast columns, and writes the result as CSV."
)]
pub struct Cli {
    /// Raw catalog CSV to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Destination for the cleaned CSV (parent directories are created).
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Print a per-step report after the confirmation line.
    #[arg(
        long = "summary",
        value_enum,
        num_args = 0..=1,
        default_missing_value = "table",
        value_name = "FORMAT"
    )]
    pub summary: Option<SummaryFormatArg>,

    /// Run every step but do not write the output file.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Step report formats.
#[derive(Clone, Copy, ValueEnum)]
pub enum SummaryFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
