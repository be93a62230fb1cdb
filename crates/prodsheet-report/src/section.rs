use std::collections::HashMap;

use prodsheet_model::{ReportSection, SummaryRow};

/// Partitions the summary into per-location report sections.
///
/// Locations appear in first-seen order while iterating the summary, and
/// each section keeps its rows in summary order; no re-sorting happens
/// anywhere in rendering.
pub fn sections(summary: &[SummaryRow]) -> Vec<ReportSection> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut sections: Vec<ReportSection> = Vec::new();
    for row in summary {
        match index.get(&row.location) {
            Some(&slot) => sections[slot].rows.push(row.clone()),
            None => {
                index.insert(row.location.clone(), sections.len());
                sections.push(ReportSection {
                    location: row.location.clone(),
                    rows: vec![row.clone()],
                });
            }
        }
    }
    sections
}

#[cfg(test)]
mod tests {
    use prodsheet_model::SummaryRow;

    use super::sections;

    fn row(location: &str, product: &str) -> SummaryRow {
        SummaryRow {
            location: location.to_string(),
            product: product.to_string(),
            quantity_to_prepare: 1.0,
        }
    }

    #[test]
    fn partitions_in_first_seen_order() {
        let summary = vec![
            row("L2", "A"),
            row("L1", "B"),
            row("L2", "C"),
        ];
        let sections = sections(&summary);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].location, "L2");
        assert_eq!(sections[0].rows.len(), 2);
        assert_eq!(sections[0].rows[1].product, "C");
        assert_eq!(sections[1].location, "L1");
    }

    #[test]
    fn empty_summary_has_no_sections() {
        assert!(sections(&[]).is_empty());
    }
}
