//! End-to-end tests for the reconciliation pipeline.

use prodsheet_core::run_pipeline;
use prodsheet_model::{PipelineError, RunWarning, SchemaConfig, Table};

fn table(columns: &[&str], rows: &[&[&str]]) -> Table {
    let mut table = Table::new(columns.iter().map(|c| (*c).to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|c| (*c).to_string()).collect());
    }
    table
}

fn registry(rows: &[&[&str]]) -> Table {
    table(&["product", "location", "factor"], rows)
}

fn quantities(rows: &[&[&str]]) -> Table {
    table(&["product", "quantity"], rows)
}

#[test]
fn reconciles_two_products_into_one_location() {
    let run = run_pipeline(
        quantities(&[&["A", "10"], &["B", "5"]]),
        registry(&[&["A", "L1", "2"], &["B", "L1", "1"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");

    assert!(run.warnings.is_empty());
    assert!(run.failures.is_empty());
    assert_eq!(run.summary.len(), 2);
    assert_eq!(run.summary[0].location, "L1");
    assert_eq!(run.summary[0].product, "A");
    assert_eq!(run.summary[0].quantity_to_prepare, 20.0);
    assert_eq!(run.summary[1].product, "B");
    assert_eq!(run.summary[1].quantity_to_prepare, 5.0);
}

#[test]
fn missing_registry_entry_falls_back_and_warns() {
    let run = run_pipeline(
        quantities(&[&["C", "4"]]),
        registry(&[&["A", "L1", "2"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");

    assert_eq!(
        run.warnings,
        vec![RunWarning::UnmatchedProducts(vec!["C".to_string()])]
    );
    assert_eq!(run.summary.len(), 1);
    assert_eq!(run.summary[0].location, "Unknown");
    assert_eq!(run.summary[0].product, "C");
    assert_eq!(run.summary[0].quantity_to_prepare, 4.0);
}

#[test]
fn registry_fan_out_yields_one_row_per_location() {
    let run = run_pipeline(
        quantities(&[&["A", "3"]]),
        registry(&[&["A", "L1", "2"], &["A", "L2", "5"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");

    assert_eq!(run.summary.len(), 2);
    assert_eq!(run.summary[0].location, "L1");
    assert_eq!(run.summary[0].quantity_to_prepare, 6.0);
    assert_eq!(run.summary[1].location, "L2");
    assert_eq!(run.summary[1].quantity_to_prepare, 15.0);
}

#[test]
fn duplicate_quantity_rows_accumulate() {
    let run = run_pipeline(
        quantities(&[&["A", "10"], &["A", "5"]]),
        registry(&[&["A", "L1", "2"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");

    assert_eq!(run.summary.len(), 1);
    assert_eq!(run.summary[0].quantity_to_prepare, 30.0);
}

#[test]
fn schema_failure_stops_the_run() {
    let error = run_pipeline(
        table(&["product", "qty"], &[&["A", "10"]]),
        table(&["product", "location"], &[&["A", "L1"]]),
        &SchemaConfig::default(),
    )
    .expect_err("schema failure");

    let PipelineError::Schema(failure) = error else {
        panic!("expected schema error, got {error}");
    };
    assert_eq!(failure.quantity.missing, vec!["quantity"]);
    assert_eq!(failure.registry.missing, vec!["factor"]);
    assert_eq!(failure.quantity.present, vec!["product", "qty"]);
    assert_eq!(failure.registry.present, vec!["product", "location"]);
}

#[test]
fn column_casing_and_padding_are_normalized() {
    let run = run_pipeline(
        table(&["  Product ", "QUANTITY"], &[&["A", "10"]]),
        table(&["Product", " Location", "Factor "], &[&["A", "L1", "2"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");
    assert_eq!(run.summary[0].quantity_to_prepare, 20.0);
}

#[test]
fn renamed_columns_are_a_configuration_change() {
    let mut config = SchemaConfig::default();
    config.registry.location = "site".to_string();
    config.registry.factor = "production factor".to_string();

    let run = run_pipeline(
        quantities(&[&["A", "10"]]),
        table(
            &["product", "site", "Production Factor"],
            &[&["A", "L1", "3"]],
        ),
        &config,
    )
    .expect("pipeline run");
    assert_eq!(run.summary[0].location, "L1");
    assert_eq!(run.summary[0].quantity_to_prepare, 30.0);
}

#[test]
fn non_numeric_rows_are_reported_and_skipped() {
    let run = run_pipeline(
        quantities(&[&["A", "ten"], &["B", "5"]]),
        registry(&[&["A", "L1", "2"], &["B", "L1", "1"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");

    assert_eq!(run.failures.len(), 1);
    assert_eq!(run.failures[0].product, "A");
    assert_eq!(run.failures[0].value, "ten");
    assert_eq!(run.summary.len(), 1);
    assert_eq!(run.summary[0].product, "B");
}

#[test]
fn half_filled_registry_row_substitutes_only_the_absent_field() {
    let run = run_pipeline(
        quantities(&[&["A", "4"]]),
        registry(&[&["A", "L1", ""]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");

    assert_eq!(
        run.warnings,
        vec![RunWarning::UnmatchedProducts(vec!["A".to_string()])]
    );
    assert_eq!(run.summary[0].location, "L1");
    assert_eq!(run.summary[0].quantity_to_prepare, 4.0);
}

#[test]
fn empty_quantity_table_yields_empty_summary() {
    let run = run_pipeline(
        quantities(&[]),
        registry(&[&["A", "L1", "2"]]),
        &SchemaConfig::default(),
    )
    .expect("pipeline run");
    assert!(run.summary.is_empty());
    assert!(run.warnings.is_empty());
    assert!(run.failures.is_empty());
}

#[test]
fn rerun_on_identical_inputs_is_identical() {
    let quantity = quantities(&[&["A", "10"], &["C", "4"], &["A", "2"]]);
    let reference = registry(&[&["A", "L1", "2"], &["A", "L2", "5"]]);

    let first = run_pipeline(quantity.clone(), reference.clone(), &SchemaConfig::default())
        .expect("first run");
    let second =
        run_pipeline(quantity, reference, &SchemaConfig::default()).expect("second run");
    assert_eq!(first, second);
}
