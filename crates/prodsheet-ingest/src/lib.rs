//! CSV ingestion for the production checklist pipeline.
//!
//! The pipeline itself is file-format agnostic: it consumes
//! [`prodsheet_model::Table`] values. This crate turns CSV exports of the two
//! input spreadsheets into that shape, cleaning cells the way messy
//! spreadsheet exports require (BOM markers, stray whitespace, blank rows).

pub mod csv_table;
pub mod error;

pub use csv_table::{read_table, read_table_from_reader};
pub use error::IngestError;
