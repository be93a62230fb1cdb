use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};

use prodsheet_model::ReportSection;
use prodsheet_report::section_table;

use crate::types::RunOutcome;

/// Prints the per-location tables.
///
/// Called before document rendering, so a render failure still leaves the
/// interactive output on screen.
pub fn print_sections(sections: &[ReportSection]) {
    for section in sections {
        println!("Location: {}", section.location);
        println!("{}", section_table(section));
        println!();
    }
    if sections.is_empty() {
        println!("No summary rows were produced.");
    }
}

/// Prints the run diagnostics: output paths to stdout, recoverable
/// conditions (fallback warnings, excluded rows) to stderr.
pub fn print_run(outcome: &RunOutcome) {
    if let Some(path) = &outcome.pdf_path {
        println!("Checklist document: {}", path.display());
    }
    if let Some(path) = &outcome.summary_json {
        println!("Summary JSON: {}", path.display());
    }
    for warning in &outcome.warnings {
        eprintln!("warning: {warning}");
    }
    if outcome.has_failures() {
        eprintln!("Rows excluded from aggregation:");
        for failure in &outcome.failures {
            eprintln!("- {failure}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}
