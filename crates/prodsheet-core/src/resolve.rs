use std::collections::HashSet;

use prodsheet_model::{EnrichedRecord, ResolvedRecord, RunWarning};

/// Sentinel location for quantity rows without a usable registry location.
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Identity multiplier substituted for an absent production factor.
pub const IDENTITY_FACTOR: &str = "1";

/// Applies the missing-data fallback policy to the join output.
///
/// A row missing only one of the two fields receives exactly that one
/// substitution; a present field is never touched. The distinct products
/// that triggered at least one substitution are collected, in first-seen
/// order, into a single consolidated warning. Non-fatal: processing
/// continues with the resolved rows.
pub fn resolve(enriched: Vec<EnrichedRecord>) -> (Vec<ResolvedRecord>, Option<RunWarning>) {
    let mut affected: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let resolved = enriched
        .into_iter()
        .map(|record| {
            if record.is_incomplete() && seen.insert(record.product.clone()) {
                affected.push(record.product.clone());
            }
            ResolvedRecord {
                row: record.row,
                product: record.product,
                quantity: record.quantity,
                location: record
                    .location
                    .unwrap_or_else(|| UNKNOWN_LOCATION.to_string()),
                factor: record.factor.unwrap_or_else(|| IDENTITY_FACTOR.to_string()),
            }
        })
        .collect();
    let warning = if affected.is_empty() {
        None
    } else {
        Some(RunWarning::UnmatchedProducts(affected))
    };
    (resolved, warning)
}

#[cfg(test)]
mod tests {
    use prodsheet_model::{EnrichedRecord, RunWarning};

    use super::{IDENTITY_FACTOR, UNKNOWN_LOCATION, resolve};

    fn enriched(
        product: &str,
        location: Option<&str>,
        factor: Option<&str>,
    ) -> EnrichedRecord {
        EnrichedRecord {
            row: 0,
            product: product.to_string(),
            quantity: "4".to_string(),
            location: location.map(str::to_string),
            factor: factor.map(str::to_string),
        }
    }

    #[test]
    fn complete_rows_pass_through() {
        let (resolved, warning) = resolve(vec![enriched("A", Some("L1"), Some("2"))]);
        assert!(warning.is_none());
        assert_eq!(resolved[0].location, "L1");
        assert_eq!(resolved[0].factor, "2");
    }

    #[test]
    fn each_absent_field_gets_its_own_substitution() {
        let (resolved, warning) = resolve(vec![
            enriched("A", None, Some("2")),
            enriched("B", Some("L1"), None),
            enriched("C", None, None),
        ]);
        assert_eq!(resolved[0].location, UNKNOWN_LOCATION);
        assert_eq!(resolved[0].factor, "2");
        assert_eq!(resolved[1].location, "L1");
        assert_eq!(resolved[1].factor, IDENTITY_FACTOR);
        assert_eq!(resolved[2].location, UNKNOWN_LOCATION);
        assert_eq!(resolved[2].factor, IDENTITY_FACTOR);
        assert_eq!(
            warning,
            Some(RunWarning::UnmatchedProducts(vec![
                "A".to_string(),
                "B".to_string(),
                "C".to_string(),
            ]))
        );
    }

    #[test]
    fn warning_lists_each_product_once() {
        let (_, warning) = resolve(vec![
            enriched("C", None, None),
            enriched("C", None, None),
            enriched("A", None, Some("2")),
        ]);
        assert_eq!(
            warning,
            Some(RunWarning::UnmatchedProducts(vec![
                "C".to_string(),
                "A".to_string(),
            ]))
        );
    }
}
