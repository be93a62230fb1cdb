use prodsheet_model::{SchemaConfig, SchemaFailure, Table, TableAudit};

use crate::normalize::canonical_name;

/// Confirms both normalized tables carry their required columns.
///
/// The required sets come from configuration, compared in canonical form. On
/// any miss this is a hard stop: the failure enumerates, per table, exactly
/// which required columns are absent plus the full observed column list of
/// both tables, and no partial processing happens past this point.
pub fn validate_schema(
    quantity: &Table,
    registry: &Table,
    config: &SchemaConfig,
) -> Result<(), SchemaFailure> {
    let quantity_audit = audit(quantity, &config.quantity.required());
    let registry_audit = audit(registry, &config.registry.required());
    if quantity_audit.is_complete() && registry_audit.is_complete() {
        Ok(())
    } else {
        Err(SchemaFailure {
            quantity: quantity_audit,
            registry: registry_audit,
        })
    }
}

fn audit(table: &Table, required: &[&str]) -> TableAudit {
    TableAudit {
        missing: required
            .iter()
            .map(|name| canonical_name(name))
            .filter(|name| !table.has_column(name))
            .collect(),
        present: table.columns.clone(),
    }
}
