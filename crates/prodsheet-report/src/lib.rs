//! Report rendering for the production checklist.
//!
//! Two collaborator-facing outputs derive from the same summary rows: an
//! interactive table per location for on-screen inspection, and a paginated
//! PDF document (one page per location) suitable for download.

pub mod console;
pub mod pdf;
pub mod section;

pub use console::section_table;
pub use pdf::{ChecklistPdf, DOWNLOAD_FILENAME, PDF_MIME_TYPE, render_checklist};
pub use section::sections;
