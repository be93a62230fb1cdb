use std::collections::HashMap;

use prodsheet_model::{EnrichedRecord, QuantityRecord, QuantitySchema, RegistryEntry, RegistrySchema, Table};

use crate::normalize::canonical_name;

/// Extracts one [`QuantityRecord`] per data row of the quantity table.
///
/// Duplicate products are kept; there is no implicit dedup before the join.
pub fn quantity_records(table: &Table, schema: &QuantitySchema) -> Vec<QuantityRecord> {
    let Some(product) = table.column_index(&canonical_name(&schema.product)) else {
        return Vec::new();
    };
    let Some(quantity) = table.column_index(&canonical_name(&schema.quantity)) else {
        return Vec::new();
    };
    (0..table.height())
        .map(|row| QuantityRecord {
            row,
            product: table.cell(row, product).to_string(),
            quantity: table.cell(row, quantity).to_string(),
        })
        .collect()
}

/// Extracts registry entries, projecting the table to product, location and
/// factor. Rows without a product key can never match and are dropped; empty
/// location/factor cells become `None` so the fallback stage treats a
/// half-filled entry the same as a missing one.
pub fn registry_entries(table: &Table, schema: &RegistrySchema) -> Vec<RegistryEntry> {
    let Some(product) = table.column_index(&canonical_name(&schema.product)) else {
        return Vec::new();
    };
    let Some(location) = table.column_index(&canonical_name(&schema.location)) else {
        return Vec::new();
    };
    let Some(factor) = table.column_index(&canonical_name(&schema.factor)) else {
        return Vec::new();
    };
    (0..table.height())
        .filter_map(|row| {
            let key = table.cell(row, product);
            if key.is_empty() {
                return None;
            }
            Some(RegistryEntry {
                product: key.to_string(),
                location: non_empty(table.cell(row, location)),
                factor: non_empty(table.cell(row, factor)),
            })
        })
        .collect()
}

fn non_empty(cell: &str) -> Option<String> {
    if cell.is_empty() {
        None
    } else {
        Some(cell.to_string())
    }
}

/// Left outer join of quantity records against the registry on the product
/// key.
///
/// Every quantity record is preserved in input order. A product with several
/// registry entries fans out into adjacent enriched rows, one per entry in
/// registry order; a product with none carries `None` for location and
/// factor.
pub fn enrich(quantities: Vec<QuantityRecord>, registry: &[RegistryEntry]) -> Vec<EnrichedRecord> {
    let mut by_product: HashMap<&str, Vec<&RegistryEntry>> = HashMap::new();
    for entry in registry {
        by_product.entry(entry.product.as_str()).or_default().push(entry);
    }

    let mut enriched = Vec::with_capacity(quantities.len());
    for record in quantities {
        match by_product.get(record.product.as_str()) {
            Some(entries) => {
                for entry in entries {
                    enriched.push(EnrichedRecord {
                        row: record.row,
                        product: record.product.clone(),
                        quantity: record.quantity.clone(),
                        location: entry.location.clone(),
                        factor: entry.factor.clone(),
                    });
                }
            }
            None => enriched.push(EnrichedRecord {
                row: record.row,
                product: record.product,
                quantity: record.quantity,
                location: None,
                factor: None,
            }),
        }
    }
    enriched
}
