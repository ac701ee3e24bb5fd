//! End-to-end tests for the ordered cleaning pipeline.

use polars::prelude::*;

use catalog_transform::{CleanStep, StepStatus, clean_dataset};

fn text_df(columns: Vec<(&str, Vec<Option<&str>>)>) -> DataFrame {
    let cols: Vec<Column> = columns
        .into_iter()
        .map(|(name, values)| Series::new(name.into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

fn raw_catalog() -> DataFrame {
    text_df(vec![
        (
            " Show ID ",
            vec![Some("s1"), Some("s2"), Some("s1"), Some("s3"), Some("s4")],
        ),
        (
            "Type",
            vec![
                Some("Movie"),
                Some("TV Show"),
                Some("Movie"),
                Some("Movie"),
                Some("Movie"),
            ],
        ),
        (
            "Title",
            vec![
                Some(" Zodiac "),
                Some("Blood & Water"),
                Some("Zodiac"),
                None,
                Some("Heat"),
            ],
        ),
        (
            "Date Added",
            vec![
                Some("September 9, 2021"),
                Some("September 24, 2021"),
                Some("September 9, 2021"),
                Some("September 1, 2021"),
                Some("not a date"),
            ],
        ),
        (
            "Duration",
            vec![Some("90 min"), Some("3 Seasons"), Some("90 min"), Some("1 min"), Some("")],
        ),
        (
            "Cast",
            vec![
                Some("Tom Hanks, , Meg Ryan"),
                Some("Ama Qamata, Khosi Ngema"),
                Some("Tom Hanks, , Meg Ryan"),
                None,
                None,
            ],
        ),
        (
            "Rating",
            vec![Some("R"), Some("nan"), Some("R"), Some("PG"), None],
        ),
        (
            "Release Year",
            vec![Some("2007"), Some("2021"), Some("2007"), Some("1999"), Some("n/a")],
        ),
        (
            "Notes",
            vec![Some("a"), Some("b"), Some("a"), Some("c"), Some("d")],
        ),
    ])
}

#[test]
fn test_clean_dataset_full_catalog() {
    let cleaned = clean_dataset(raw_catalog()).unwrap();
    let df = &cleaned.data;

    // Row 3 duplicates row 1 once trimmed; the untitled row is dropped.
    assert_eq!(df.height(), 3);
    assert_eq!(
        names(df),
        vec![
            "show_id",
            "title",
            "type",
            "release_year",
            "date_added_parsed",
            "year_added",
            "month_added",
            "rating",
            "duration",
            "duration_int",
            "duration_type",
            "cast",
            "cast_count",
            "date_added",
            "notes",
        ]
    );

    let titles = df.column("title").unwrap().str().unwrap();
    assert_eq!(
        titles.iter().collect::<Vec<_>>(),
        vec![Some("Zodiac"), Some("Blood & Water"), Some("Heat")]
    );

    let years = df.column("year_added").unwrap().i32().unwrap();
    assert_eq!(
        years.iter().collect::<Vec<_>>(),
        vec![Some(2021), Some(2021), None]
    );
    let months = df.column("month_added").unwrap().i32().unwrap();
    assert_eq!(
        months.iter().collect::<Vec<_>>(),
        vec![Some(9), Some(9), None]
    );

    let ints = df.column("duration_int").unwrap().i64().unwrap();
    assert_eq!(ints.iter().collect::<Vec<_>>(), vec![Some(90), Some(3), None]);
    let types = df.column("duration_type").unwrap().str().unwrap();
    assert_eq!(
        types.iter().collect::<Vec<_>>(),
        vec![Some("minutes"), Some("seasons"), None]
    );

    let cast_count = df.column("cast_count").unwrap().u32().unwrap();
    assert_eq!(
        cast_count.iter().collect::<Vec<_>>(),
        vec![Some(2), Some(2), Some(0)]
    );

    let ratings = df.column("rating").unwrap().str().unwrap();
    assert_eq!(
        ratings.iter().collect::<Vec<_>>(),
        vec![Some("R"), Some("Unknown"), Some("Unknown")]
    );

    let release = df.column("release_year").unwrap().i64().unwrap();
    assert_eq!(
        release.iter().collect::<Vec<_>>(),
        vec![Some(2007), Some(2021), None]
    );
}

#[test]
fn test_clean_dataset_report() {
    let cleaned = clean_dataset(raw_catalog()).unwrap();
    let report = &cleaned.report;

    assert_eq!(report.input_rows, 5);
    assert_eq!(report.input_columns, 9);
    assert_eq!(report.output_shape(), (3, 15));
    assert_eq!(report.steps.len(), CleanStep::ALL.len());
    assert!(report.steps.iter().all(|outcome| outcome.is_applied()));

    let affected = |step| report.outcome(step).and_then(|o| o.affected());
    assert_eq!(affected(CleanStep::NormalizeHeaders), Some(9));
    assert_eq!(affected(CleanStep::TrimText), Some(1));
    assert_eq!(affected(CleanStep::DropDuplicates), Some(1));
    assert_eq!(affected(CleanStep::DropMissingTitles), Some(1));
    assert_eq!(affected(CleanStep::ParseDateAdded), Some(1));
    assert_eq!(affected(CleanStep::FillRating), Some(2));
    assert_eq!(affected(CleanStep::CoerceReleaseYear), Some(1));
}

#[test]
fn test_clean_dataset_skips_absent_columns() {
    let df = text_df(vec![("Notes", vec![Some("x"), Some("x"), Some(" y")])]);

    let cleaned = clean_dataset(df).unwrap();

    assert_eq!(cleaned.report.output_shape(), (2, 1));
    assert_eq!(names(&cleaned.data), vec!["notes"]);
    let skipped: Vec<CleanStep> = cleaned
        .report
        .steps
        .iter()
        .filter(|outcome| !outcome.is_applied())
        .map(|outcome| outcome.step)
        .collect();
    assert_eq!(
        skipped,
        vec![
            CleanStep::DropMissingTitles,
            CleanStep::ParseDateAdded,
            CleanStep::ParseDuration,
            CleanStep::CountCast,
            CleanStep::FillRating,
            CleanStep::CoerceReleaseYear,
        ]
    );
    assert_eq!(
        cleaned.report.outcome(CleanStep::ParseDuration).unwrap().status,
        StepStatus::Skipped {
            missing_column: "duration"
        }
    );
}

#[test]
fn test_clean_dataset_duplicate_keeps_first_position() {
    let df = text_df(vec![
        ("title", vec![Some("B"), Some("A"), Some("C"), Some("A")]),
        ("notes", vec![Some("1"), Some("2"), Some("3"), Some("2")]),
    ]);

    let cleaned = clean_dataset(df).unwrap();

    let titles = cleaned.data.column("title").unwrap().str().unwrap();
    assert_eq!(
        titles.iter().collect::<Vec<_>>(),
        vec![Some("B"), Some("A"), Some("C")]
    );
}

#[test]
fn test_clean_dataset_empty_table() {
    let df = text_df(vec![("title", vec![]), ("duration", vec![])]);

    let cleaned = clean_dataset(df).unwrap();

    assert_eq!(cleaned.report.output_shape(), (0, 4));
    assert_eq!(
        names(&cleaned.data),
        vec!["title", "duration", "duration_int", "duration_type"]
    );
}

#[test]
fn test_clean_dataset_second_pass_is_stable() {
    let first = clean_dataset(raw_catalog()).unwrap();
    let second = clean_dataset(first.data.clone()).unwrap();

    assert_eq!(first.data.shape(), second.data.shape());
    assert_eq!(names(&first.data), names(&second.data));
    assert!(first.data.equals_missing(&second.data));
    assert_eq!(
        second
            .report
            .outcome(CleanStep::DropDuplicates)
            .and_then(|o| o.affected()),
        Some(0)
    );
}

#[test]
fn test_clean_dataset_drops_duplicates_created_by_normalization() {
    let df = text_df(vec![
        ("title", vec![Some("Zodiac"), Some("Zodiac"), Some("Heat")]),
        ("rating", vec![None, Some("nan"), Some("R")]),
        ("release_year", vec![Some("unknown"), Some("n/a"), Some("1995")]),
    ]);

    let cleaned = clean_dataset(df).unwrap();

    assert_eq!(cleaned.data.height(), 2);
    assert_eq!(
        cleaned
            .report
            .outcome(CleanStep::DropDuplicates)
            .and_then(|o| o.affected()),
        Some(0)
    );
    assert_eq!(
        cleaned
            .report
            .outcome(CleanStep::DropNormalizedDuplicates)
            .and_then(|o| o.affected()),
        Some(1)
    );
    let titles = cleaned.data.column("title").unwrap().str().unwrap();
    assert_eq!(
        titles.iter().collect::<Vec<_>>(),
        vec![Some("Zodiac"), Some("Heat")]
    );
}
