//! Terminal rendering with `comfy-table`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use algebra_catalog::column_definition;
use algebra_core::{AnnotationPanel, SectionKind, TableState};
use algebra_model::{Column, StructureRecord};

/// Build the comparison table for `records`, already in display order.
///
/// The sorted column's header carries the direction arrow.
pub fn comparison_table(state: &TableState, records: &[StructureRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        Column::ALL
            .into_iter()
            .map(|column| header_cell(state, column)),
    );
    for record in records {
        table.add_row(
            record
                .values()
                .map(|(column, value)| value_cell(column, value)),
        );
    }
    table
}

/// Build the column glossary: key, header label and definition.
pub fn columns_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        plain_header("Key"),
        plain_header("Header"),
        plain_header("Definition"),
    ]);
    for column in Column::ALL {
        let definition = match column_definition(column) {
            Some(text) => Cell::new(text),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(column.key()),
            Cell::new(column.header_label()),
            definition,
        ]);
    }
    table
}

/// Plain-text annotation panel.
///
/// Returns `None` when nothing is hovered. A visible panel without sections
/// renders as an explicit placeholder so the user sees the lookup missed.
pub fn panel_text(panel: &AnnotationPanel) -> Option<String> {
    if !panel.visible {
        return None;
    }
    if panel.sections.is_empty() {
        return Some("(no annotation)".to_string());
    }
    let mut out = String::new();
    for (index, section) in panel.sections.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(section_marker(section.kind));
        out.push(' ');
        out.push_str(&section.title);
        out.push('\n');
        if let Some(body) = &section.body {
            out.push_str("  ");
            out.push_str(body);
            out.push('\n');
        }
    }
    Some(out)
}

fn section_marker(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Summary => "■",
        SectionKind::TypeDefinition
        | SectionKind::ColumnDefinition
        | SectionKind::RelationDefinition => "□",
    }
}

fn header_cell(state: &TableState, column: Column) -> Cell {
    let cell = Cell::new(state.header_text(column)).add_attribute(Attribute::Bold);
    match state.sort {
        Some(sort) if sort.column == column => cell.fg(Color::Cyan),
        _ => cell,
    }
}

fn plain_header(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn value_cell(column: Column, value: &str) -> Cell {
    match column {
        Column::Name => Cell::new(value).add_attribute(Attribute::Bold),
        Column::Abelian | Column::Finite | Column::Ordered | Column::ZeroDiv | Column::Unique => {
            flag_cell(value)
        }
        Column::Type | Column::Generators | Column::Relations | Column::Examples => {
            Cell::new(value)
        }
    }
}

/// Yes/No style cells get a color; anything qualified ("No (n>1)") stays plain.
fn flag_cell(value: &str) -> Cell {
    match value {
        "Yes" => Cell::new(value).fg(Color::Green),
        "No" => Cell::new(value).fg(Color::Red),
        "N/A" => dim_cell(value),
        _ => Cell::new(value),
    }
}

fn dim_cell(value: &str) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
