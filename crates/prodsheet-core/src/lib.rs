//! The reconciliation-and-aggregation pipeline.
//!
//! Strictly sequential, leaves first: column normalization → schema
//! validation → left-join enrichment → fallback resolution → quantity
//! derivation → grouped aggregation. Each stage is a pure function over the
//! record types in `prodsheet-model`; [`pipeline::run_pipeline`] composes
//! them for one batch run and holds no state across invocations.

pub mod aggregate;
pub mod derive;
pub mod join;
pub mod normalize;
pub mod numeric;
pub mod pipeline;
pub mod resolve;
pub mod validate;

pub use aggregate::aggregate;
pub use derive::derive;
pub use join::{enrich, quantity_records, registry_entries};
pub use normalize::{canonical_name, normalize_columns};
pub use numeric::{format_numeric, parse_f64};
pub use pipeline::{PipelineRun, run_pipeline};
pub use resolve::{IDENTITY_FACTOR, UNKNOWN_LOCATION, resolve};
pub use validate::validate_schema;
