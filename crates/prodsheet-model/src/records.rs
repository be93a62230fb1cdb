use serde::{Deserialize, Serialize};

/// One row of the quantity input, exactly as read.
///
/// `row` is the zero-based data row index in the source table; duplicates of
/// the same product are legal and processed independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityRecord {
    pub row: usize,
    pub product: String,
    pub quantity: String,
}

/// One row of the product registry.
///
/// Location and factor are optional because a registry row may carry partial
/// data; an empty cell counts as absent and takes the fallback downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryEntry {
    pub product: String,
    pub location: Option<String>,
    pub factor: Option<String>,
}

/// A quantity record after the registry join.
///
/// `location`/`factor` are `None` when the product had no registry match or
/// the matched entry left the field blank. Fan-out duplicates share `row`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub row: usize,
    pub product: String,
    pub quantity: String,
    pub location: Option<String>,
    pub factor: Option<String>,
}

impl EnrichedRecord {
    /// True when the fallback resolver will have to substitute something.
    pub fn is_incomplete(&self) -> bool {
        self.location.is_none() || self.factor.is_none()
    }
}

/// An enriched record with the fallback policy applied: both fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRecord {
    pub row: usize,
    pub product: String,
    pub quantity: String,
    pub location: String,
    pub factor: String,
}

/// A resolved record with the prepared quantity computed.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedRecord {
    pub row: usize,
    pub product: String,
    pub location: String,
    pub quantity: f64,
    pub factor: f64,
    pub quantity_to_prepare: f64,
}

/// Which numeric field failed to parse at derivation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericField {
    Quantity,
    Factor,
}

impl NumericField {
    pub fn as_str(self) -> &'static str {
        match self {
            NumericField::Quantity => "quantity",
            NumericField::Factor => "factor",
        }
    }
}

/// A row excluded from aggregation because a numeric value did not parse.
///
/// Recoverable and row-level: the run continues for all other rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationFailure {
    pub row: usize,
    pub product: String,
    pub field: NumericField,
    pub value: String,
}

impl std::fmt::Display for DerivationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {}: product {:?} has non-numeric {} value {:?}",
            self.row + 1,
            self.product,
            self.field.as_str(),
            self.value
        )
    }
}

/// One aggregated result: the total quantity to prepare for a product at a
/// location. The terminal data entity of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub location: String,
    pub product: String,
    pub quantity_to_prepare: f64,
}

/// The summary rows for a single location, in aggregation order.
///
/// Rendering-only view over the summary; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub location: String,
    pub rows: Vec<SummaryRow>,
}

#[cfg(test)]
mod tests {
    use super::{EnrichedRecord, NumericField, SummaryRow};

    #[test]
    fn incomplete_when_either_field_absent() {
        let base = EnrichedRecord {
            row: 0,
            product: "A".to_string(),
            quantity: "3".to_string(),
            location: Some("L1".to_string()),
            factor: Some("2".to_string()),
        };
        assert!(!base.is_incomplete());
        assert!(
            EnrichedRecord {
                factor: None,
                ..base.clone()
            }
            .is_incomplete()
        );
        assert!(
            EnrichedRecord {
                location: None,
                ..base
            }
            .is_incomplete()
        );
    }

    #[test]
    fn summary_row_serializes() {
        let row = SummaryRow {
            location: "L1".to_string(),
            product: "A".to_string(),
            quantity_to_prepare: 20.0,
        };
        let json = serde_json::to_string(&row).expect("serialize summary row");
        assert!(json.contains("\"quantity_to_prepare\":20.0"));
    }

    #[test]
    fn numeric_field_labels() {
        assert_eq!(NumericField::Quantity.as_str(), "quantity");
        assert_eq!(NumericField::Factor.as_str(), "factor");
    }
}
