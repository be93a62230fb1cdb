//! Value types shared by the production checklist pipeline.
//!
//! The pipeline is modeled as a chain of immutable record transformations:
//! `QuantityRecord` → `EnrichedRecord` → `ResolvedRecord` → `DerivedRecord`
//! → `SummaryRow`. Nothing in this crate performs work; the stages live in
//! `prodsheet-core`.

pub mod error;
pub mod records;
pub mod schema;
pub mod table;
pub mod warnings;

pub use error::{PipelineError, Result, SchemaFailure, TableAudit};
pub use records::{
    DerivationFailure, DerivedRecord, EnrichedRecord, NumericField, QuantityRecord, RegistryEntry,
    ReportSection, ResolvedRecord, SummaryRow,
};
pub use schema::{QuantitySchema, RegistrySchema, SchemaConfig};
pub use table::Table;
pub use warnings::RunWarning;
