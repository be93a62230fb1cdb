use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use prodsheet_core::format_numeric;
use prodsheet_model::ReportSection;

/// Builds the interactive table for one location: ordered
/// (product, quantity to prepare) pairs, no computation beyond projection.
pub fn section_table(section: &ReportSection) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Product"),
        header_cell("Quantity to Prepare"),
    ]);
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for row in &section.rows {
        table.add_row(vec![
            Cell::new(&row.product),
            Cell::new(format_numeric(row.quantity_to_prepare)),
        ]);
    }
    table
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
