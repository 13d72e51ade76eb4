use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use cbc_engine::TriageReport;
use cbc_model::{Classification, Status};
use cbc_standards::StandardsRegistry;

/// Print the selected sections of a triage run, preceded by the
/// classification table when the clinical summary was selected.
pub fn print_report(report: &TriageReport) {
    if report.response.clinical_summary.is_some()
        && !report.analysis.classifications.is_empty()
    {
        print_classification_table(&report.analysis.classifications);
    }
    print!("{}", cbc_cli::render::render_sections(&report.response));
}

/// Print the built-in CBC panel.
pub fn print_panel(registry: &StandardsRegistry) {
    let summary = registry.summary();
    println!(
        "Panel: {} ({} parameters)",
        summary.panel_pin, summary.parameter_count
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Low"),
        header_cell("High"),
        header_cell("Unit"),
        header_cell("Low implication"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for spec in registry.panel() {
        table.add_row(vec![
            Cell::new(&spec.name),
            Cell::new(spec.low),
            Cell::new(spec.high),
            Cell::new(&spec.unit),
            match &spec.low_implication {
                Some(implication) => Cell::new(implication),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

fn print_classification_table(classifications: &[Classification]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Parameter"),
        header_cell("Value"),
        header_cell("Unit"),
        header_cell("Reference"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for classification in classifications {
        table.add_row(vec![
            Cell::new(&classification.parameter),
            Cell::new(classification.value),
            Cell::new(&classification.unit),
            Cell::new(format!("{}–{}", classification.low, classification.high)),
            status_cell(classification.status),
        ]);
    }
    println!("{table}");
}

fn status_cell(status: Status) -> Cell {
    match status {
        Status::Normal => Cell::new("Normal").fg(Color::Green),
        Status::Low => Cell::new("Low")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold),
        Status::High => Cell::new("High")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Dim)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
