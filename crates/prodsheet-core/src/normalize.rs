use prodsheet_model::Table;

/// Canonical form of a column name: BOM stripped, trimmed, lowercased.
pub fn canonical_name(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_lowercase()
}

/// Canonicalizes every column name of a table.
///
/// Pure and applied uniformly to both inputs before any lookup, so no later
/// stage depends on input casing or spacing. Two raw names that collapse to
/// the same canonical form are not guarded against; lookups resolve to the
/// leftmost match.
pub fn normalize_columns(table: Table) -> Table {
    Table {
        columns: table
            .columns
            .iter()
            .map(|column| canonical_name(column))
            .collect(),
        rows: table.rows,
    }
}
