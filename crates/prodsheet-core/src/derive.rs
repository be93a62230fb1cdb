use prodsheet_model::{DerivationFailure, DerivedRecord, NumericField, ResolvedRecord};

use crate::numeric::parse_f64;

/// Computes `quantity_to_prepare = quantity × factor` per resolved row.
///
/// The inputs are external and untrusted, so a non-numeric quantity or
/// factor fails only that row: it is excluded from aggregation and reported
/// as a [`DerivationFailure`] while the run continues. No rounding is
/// applied.
pub fn derive(resolved: Vec<ResolvedRecord>) -> (Vec<DerivedRecord>, Vec<DerivationFailure>) {
    let mut derived = Vec::with_capacity(resolved.len());
    let mut failures = Vec::new();
    for record in resolved {
        let Some(quantity) = parse_f64(&record.quantity) else {
            failures.push(DerivationFailure {
                row: record.row,
                product: record.product,
                field: NumericField::Quantity,
                value: record.quantity,
            });
            continue;
        };
        let Some(factor) = parse_f64(&record.factor) else {
            failures.push(DerivationFailure {
                row: record.row,
                product: record.product,
                field: NumericField::Factor,
                value: record.factor,
            });
            continue;
        };
        derived.push(DerivedRecord {
            row: record.row,
            product: record.product,
            location: record.location,
            quantity,
            factor,
            quantity_to_prepare: quantity * factor,
        });
    }
    (derived, failures)
}
