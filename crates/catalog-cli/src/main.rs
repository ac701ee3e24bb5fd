//! Media catalog cleaner CLI.

use std::io::{self, IsTerminal};

use clap::error::ErrorKind;
use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use catalog_cli::commands::run_clean;
use catalog_cli::logging::{LogConfig, LogFormat, init_logging};
use catalog_cli::summary::{print_confirmation, print_step_json, print_step_table};
use catalog_cli::{CleanOptions, CleanRun};

mod cli;

use crate::cli::{Cli, LogFormatArg, LogLevelArg, SummaryFormatArg};

fn main() {
    let cli = parse_cli();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let options = CleanOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        dry_run: cli.dry_run,
    };
    let exit_code = match run_clean(&options) {
        Ok(run) => report_run(&run, cli.summary),
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

/// Parse arguments; usage errors exit with status 1.
fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                let _ = error.print();
                std::process::exit(1);
            }
        },
    }
}

fn report_run(run: &CleanRun, summary: Option<SummaryFormatArg>) -> i32 {
    print_confirmation(run);
    match summary {
        None => 0,
        Some(SummaryFormatArg::Table) => {
            print_step_table(&run.report);
            0
        }
        Some(SummaryFormatArg::Json) => match print_step_json(&run.report) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: failed to serialize summary: {error}");
                1
            }
        },
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
