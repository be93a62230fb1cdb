use std::collections::HashMap;

use prodsheet_model::{DerivedRecord, SummaryRow};

/// Groups derived rows by (location, product) and sums the prepared
/// quantity.
///
/// Exactly one summary row per distinct pair, in first-seen order, so the
/// report layout is reproducible. Join fan-out duplicates contribute to the
/// same sum; empty input yields an empty summary.
pub fn aggregate(derived: &[DerivedRecord]) -> Vec<SummaryRow> {
    let mut index: HashMap<(String, String), usize> = HashMap::new();
    let mut summary: Vec<SummaryRow> = Vec::new();
    for record in derived {
        let key = (record.location.clone(), record.product.clone());
        match index.get(&key) {
            Some(&slot) => summary[slot].quantity_to_prepare += record.quantity_to_prepare,
            None => {
                index.insert(key, summary.len());
                summary.push(SummaryRow {
                    location: record.location.clone(),
                    product: record.product.clone(),
                    quantity_to_prepare: record.quantity_to_prepare,
                });
            }
        }
    }
    summary
}
