//! End-to-end tests: raw CSV file in, cleaned CSV file out.

use std::fs;
use std::path::Path;

use catalog_cli::CleanOptions;
use catalog_cli::commands::run_clean;
use catalog_cli::summary::confirmation_line;
use catalog_transform::{CleanStep, StepStatus};

const RAW_CATALOG: &str = "\
Show ID,Type,Title,Date Added,Release Year,Rating,Duration,Cast
s1,Movie, Zodiac ,\"September 9, 2021\",2007,R,157 min,\"Jake Gyllenhaal, Mark Ruffalo\"
s2,TV Show,Blood & Water,\"September 24, 2021\",2021,,2 Seasons,
s1,Movie,Zodiac,\"September 9, 2021\",2007,R,157 min,\"Jake Gyllenhaal, Mark Ruffalo\"
s3,Movie,,\"September 1, 2021\",1999,PG,90 min,
";

fn options(input: &Path, output: &Path) -> CleanOptions {
    CleanOptions {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        dry_run: false,
    }
}

#[test]
fn test_clean_writes_expected_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw").join("netflix1.csv");
    fs::create_dir_all(input.parent().unwrap()).unwrap();
    fs::write(&input, RAW_CATALOG).unwrap();
    let output = dir.path().join("processed").join("netflix_cleaned.csv");

    let run = run_clean(&options(&input, &output)).unwrap();

    assert!(run.written);
    assert_eq!(run.report.output_shape(), (2, 14));
    assert_eq!(
        confirmation_line(&run),
        format!(
            "Saved cleaned dataset to {}. Shape: (2, 14)",
            output.display()
        )
    );

    let written = fs::read_to_string(&output).unwrap();
    insta::assert_snapshot!(written.trim_end(), @r#"
    show_id,title,type,release_year,date_added_parsed,year_added,month_added,rating,duration,duration_int,duration_type,cast,cast_count,date_added
    s1,Zodiac,Movie,2007,2021-09-09,2021,9,R,157 min,157,minutes,"Jake Gyllenhaal, Mark Ruffalo",2,"September 9, 2021"
    s2,Blood & Water,TV Show,2021,2021-09-24,2021,9,Unknown,2 Seasons,2,seasons,,0,"September 24, 2021"
    "#);
}

#[test]
fn test_recleaning_output_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, RAW_CATALOG).unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    run_clean(&options(&input, &first)).unwrap();
    let rerun = run_clean(&options(&first, &second)).unwrap();

    assert_eq!(rerun.report.output_shape(), (2, 14));
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        fs::read_to_string(&second).unwrap()
    );
    let dedupe = rerun.report.outcome(CleanStep::DropDuplicates).unwrap();
    assert_eq!(dedupe.status, StepStatus::Applied { affected: 0 });
}

#[test]
fn test_dry_run_leaves_output_absent() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, RAW_CATALOG).unwrap();
    let output = dir.path().join("processed").join("clean.csv");

    let run = run_clean(&CleanOptions {
        dry_run: true,
        ..options(&input, &output)
    })
    .unwrap();

    assert!(!run.written);
    assert_eq!(run.report.output_shape(), (2, 14));
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.csv");
    let output = dir.path().join("clean.csv");

    let error = run_clean(&options(&input, &output)).unwrap_err();

    let message = format!("{error:#}");
    assert!(message.starts_with("failed to load"));
    assert!(message.contains("CSV file not found"));
    assert!(!output.exists());
}

#[test]
fn test_unparseable_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, [0xFF, 0xFE, b'a', 0x00]).unwrap();
    let output = dir.path().join("clean.csv");

    let error = run_clean(&options(&input, &output)).unwrap_err();

    assert!(format!("{error:#}").contains("unsupported encoding"));
    assert!(!output.exists());
}

#[test]
fn test_catalog_without_optional_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("raw.csv");
    fs::write(&input, "Title,Notes\nHeat,a\nHeat,a\n,b\n").unwrap();
    let output = dir.path().join("clean.csv");

    let run = run_clean(&options(&input, &output)).unwrap();

    assert_eq!(run.report.output_shape(), (1, 2));
    assert_eq!(fs::read_to_string(&output).unwrap(), "title,notes\nHeat,a\n");
    let skipped = run
        .report
        .steps
        .iter()
        .filter(|outcome| !outcome.is_applied())
        .count();
    assert_eq!(skipped, 5);
}
