/// An in-memory tabular input: named columns over rows of string cells.
///
/// Both pipeline inputs arrive in this shape, already parsed out of whatever
/// file format the caller handles. Cells are kept as raw strings; numeric
/// interpretation happens in the derivation stage so that bad values surface
/// as row-level failures instead of parse-time aborts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Index of the first column with the given name.
    ///
    /// If two raw headers collapsed to the same canonical name during
    /// normalization, the leftmost one wins.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    /// Cell at (row, column index), empty for short rows.
    pub fn cell(&self, row: usize, column: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .map(String::as_str)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    fn sample() -> Table {
        let mut table = Table::new(vec!["product".to_string(), "quantity".to_string()]);
        table.push_row(vec!["A".to_string(), "10".to_string()]);
        table.push_row(vec!["B".to_string()]);
        table
    }

    #[test]
    fn column_lookup() {
        let table = sample();
        assert_eq!(table.column_index("quantity"), Some(1));
        assert_eq!(table.column_index("factor"), None);
        assert!(table.has_column("product"));
    }

    #[test]
    fn short_rows_read_as_empty() {
        let table = sample();
        assert_eq!(table.cell(0, 1), "10");
        assert_eq!(table.cell(1, 1), "");
        assert_eq!(table.cell(9, 0), "");
    }

    #[test]
    fn duplicate_column_first_wins() {
        let table = Table::new(vec!["product".to_string(), "product".to_string()]);
        assert_eq!(table.column_index("product"), Some(0));
    }
}
