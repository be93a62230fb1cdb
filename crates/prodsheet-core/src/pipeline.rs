use std::time::Instant;

use tracing::{info, warn};

use prodsheet_model::{
    DerivationFailure, PipelineError, Result, RunWarning, SchemaConfig, SummaryRow, Table,
};

use crate::aggregate::aggregate;
use crate::derive::derive;
use crate::join::{enrich, quantity_records, registry_entries};
use crate::normalize::normalize_columns;
use crate::resolve::resolve;
use crate::validate::validate_schema;

/// Outcome of one batch run.
///
/// Warnings and failures are recoverable and accompany full output; a fatal
/// condition surfaces as [`PipelineError`] instead and carries no partial
/// results.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub summary: Vec<SummaryRow>,
    pub warnings: Vec<RunWarning>,
    pub failures: Vec<DerivationFailure>,
}

/// Runs the whole reconciliation pipeline over two input tables.
///
/// Pure: the result is a function of the inputs alone, no state survives
/// the call, and re-running on identical inputs yields an identical
/// summary. Any calling context (CLI, service endpoint, interactive shell)
/// invokes this once per complete pair of inputs.
pub fn run_pipeline(
    quantity: Table,
    registry: Table,
    config: &SchemaConfig,
) -> Result<PipelineRun> {
    let started = Instant::now();

    let quantity = normalize_columns(quantity);
    let registry = normalize_columns(registry);
    validate_schema(&quantity, &registry, config).map_err(PipelineError::Schema)?;

    let quantities = quantity_records(&quantity, &config.quantity);
    let entries = registry_entries(&registry, &config.registry);
    info!(
        quantity_rows = quantities.len(),
        registry_rows = entries.len(),
        "inputs validated"
    );

    let enriched = enrich(quantities, &entries);
    let (resolved, fallback) = resolve(enriched);
    if let Some(warning) = &fallback {
        warn!(%warning, "incomplete registry data");
    }

    let (derived, failures) = derive(resolved);
    for failure in &failures {
        warn!(%failure, "row excluded from aggregation");
    }

    let summary = aggregate(&derived);
    info!(
        summary_rows = summary.len(),
        excluded_rows = failures.len(),
        duration_ms = started.elapsed().as_millis(),
        "pipeline complete"
    );

    Ok(PipelineRun {
        summary,
        warnings: fallback.into_iter().collect(),
        failures,
    })
}
