use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use catalog_transform::{CleanReport, StepOutcome, StepStatus};

use crate::types::CleanRun;

/// The single stdout line printed after a run.
pub fn confirmation_line(run: &CleanRun) -> String {
    let (rows, columns) = run.report.output_shape();
    if run.written {
        format!(
            "Saved cleaned dataset to {}. Shape: ({rows}, {columns})",
            run.output.display()
        )
    } else {
        format!(
            "Dry run: cleaned dataset not written to {}. Shape: ({rows}, {columns})",
            run.output.display()
        )
    }
}

pub fn print_confirmation(run: &CleanRun) {
    println!("{}", confirmation_line(run));
}

/// Build the per-step report table.
pub fn step_table(report: &CleanReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Step"),
        header_cell("Status"),
        header_cell("Affected"),
        header_cell("Measure"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for (index, outcome) in report.steps.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(outcome.step.label()),
            status_cell(outcome),
            affected_cell(outcome.affected()),
            dim_cell(outcome.step.affected_unit()),
        ]);
    }
    table
}

pub fn print_step_table(report: &CleanReport) {
    println!(
        "Input: ({}, {})  Output: ({}, {})",
        report.input_rows, report.input_columns, report.output_rows, report.output_columns
    );
    println!("{}", step_table(report));
}

/// Print the report as pretty JSON.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn print_step_json(report: &CleanReport) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn status_cell(outcome: &StepOutcome) -> Cell {
    match &outcome.status {
        StepStatus::Applied { .. } => Cell::new("applied").fg(Color::Green),
        StepStatus::Skipped { missing_column } => {
            Cell::new(format!("skipped (no {missing_column})")).fg(Color::Yellow)
        }
    }
}

fn affected_cell(affected: Option<usize>) -> Cell {
    match affected {
        Some(value) if value > 0 => Cell::new(value).add_attribute(Attribute::Bold),
        Some(value) => dim_cell(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
