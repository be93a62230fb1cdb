use std::path::PathBuf;

use prodsheet_model::{DerivationFailure, ReportSection, RunWarning};

/// Outcome of the `run` command: everything the console summary needs.
#[derive(Debug)]
pub struct RunOutcome {
    pub sections: Vec<ReportSection>,
    pub warnings: Vec<RunWarning>,
    pub failures: Vec<DerivationFailure>,
    pub pdf_path: Option<PathBuf>,
    pub summary_json: Option<PathBuf>,
}

impl RunOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
