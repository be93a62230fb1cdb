use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use prodsheet_model::Table;

use crate::error::IngestError;

fn clean_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn is_blank(row: &[String]) -> bool {
    row.iter().all(|cell| cell.is_empty())
}

/// Reads a CSV file into a [`Table`].
///
/// The first non-blank row is taken as the header; later blank rows are
/// skipped. Data rows are padded or truncated to the header width so that
/// ragged exports still produce a rectangular table.
pub fn read_table(path: &Path) -> Result<Table, IngestError> {
    let file = File::open(path).map_err(|error| IngestError::Io {
        path: path.to_path_buf(),
        source: error,
    })?;
    read_table_from_reader(file, path)
}

/// Reads CSV from any reader; `source` is used for error reporting only.
pub fn read_table_from_reader<R: Read>(reader: R, source: &Path) -> Result<Table, IngestError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut table: Option<Table> = None;
    for record in csv_reader.records() {
        let record = record.map_err(|error| IngestError::Csv {
            path: source.to_path_buf(),
            source: error,
        })?;
        let cells: Vec<String> = record.iter().map(clean_cell).collect();
        if is_blank(&cells) {
            continue;
        }
        match table.as_mut() {
            None => {
                table = Some(Table::new(cells));
            }
            Some(table) => {
                let width = table.width();
                let mut row = cells;
                row.resize(width, String::new());
                table.push_row(row);
            }
        }
    }

    let table = table.ok_or_else(|| IngestError::EmptyTable(source.to_path_buf()))?;
    debug!(
        source = %source.display(),
        columns = table.width(),
        rows = table.height(),
        "csv table loaded"
    );
    Ok(table)
}
