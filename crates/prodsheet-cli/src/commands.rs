use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use prodsheet_core::run_pipeline;
use prodsheet_ingest::read_table;
use prodsheet_model::{DerivationFailure, ReportSection, RunWarning, SchemaConfig};
use prodsheet_report::{DOWNLOAD_FILENAME, render_checklist, sections};

use crate::cli::RunArgs;
use crate::summary::{apply_table_style, print_sections};
use crate::types::RunOutcome;

pub fn run_checklist(args: &RunArgs) -> Result<RunOutcome> {
    let span = info_span!(
        "run",
        quantity = %args.quantity_csv.display(),
        registry = %args.registry_csv.display()
    );
    let _guard = span.enter();
    let started = Instant::now();

    // =========================================================================
    // Stage 1: Ingest - load both CSV exports into tables
    // =========================================================================
    let quantity = read_table(&args.quantity_csv)
        .with_context(|| format!("load quantity table {}", args.quantity_csv.display()))?;
    let registry = read_table(&args.registry_csv)
        .with_context(|| format!("load registry table {}", args.registry_csv.display()))?;
    info!(
        quantity_rows = quantity.height(),
        registry_rows = registry.height(),
        "inputs loaded"
    );

    // =========================================================================
    // Stage 2: Reconcile - one pipeline run per complete pair of inputs
    // =========================================================================
    let config = args.schema_config();
    let run = run_pipeline(quantity, registry, &config)?;

    // =========================================================================
    // Stage 3: Display - per-location tables, shown before any rendering so
    // a document failure cannot take the interactive output with it
    // =========================================================================
    let sections = sections(&run.summary);
    print_sections(&sections);

    // =========================================================================
    // Stage 4: Render - PDF document and optional JSON summary
    // =========================================================================
    let pdf_path = if args.no_pdf {
        None
    } else {
        let path = args
            .pdf
            .clone()
            .unwrap_or_else(|| PathBuf::from(DOWNLOAD_FILENAME));
        let bytes =
            render_checklist(&sections, args.date).context("render checklist document")?;
        fs::write(&path, &bytes).with_context(|| format!("write {}", path.display()))?;
        info!(
            path = %path.display(),
            bytes = bytes.len(),
            pages = sections.len(),
            "checklist document written"
        );
        Some(path)
    };

    let summary_json = match &args.summary_json {
        Some(path) => {
            let payload = SummaryFile {
                production_date: args.date.map(|date| date.to_string()),
                locations: &sections,
                warnings: &run.warnings,
                failures: &run.failures,
            };
            let json = serde_json::to_string_pretty(&payload).context("serialize summary")?;
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            Some(path.clone())
        }
        None => None,
    };

    info!(
        locations = sections.len(),
        duration_ms = started.elapsed().as_millis(),
        "run complete"
    );
    Ok(RunOutcome {
        sections,
        warnings: run.warnings,
        failures: run.failures,
        pdf_path,
        summary_json,
    })
}

pub fn run_columns(config: &SchemaConfig) -> Result<()> {
    let mut table = comfy_table::Table::new();
    table.set_header(vec!["Table", "Required columns"]);
    apply_table_style(&mut table);
    table.add_row(vec![
        "quantity".to_string(),
        config.quantity.required().join(", "),
    ]);
    table.add_row(vec![
        "registry".to_string(),
        config.registry.required().join(", "),
    ]);
    println!("{table}");
    Ok(())
}

#[derive(Serialize)]
struct SummaryFile<'a> {
    production_date: Option<String>,
    locations: &'a [ReportSection],
    warnings: &'a [RunWarning],
    failures: &'a [DerivationFailure],
}
