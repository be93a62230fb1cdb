use std::fmt;

use thiserror::Error;

/// Validation detail for one input table: what was required but absent, and
/// everything that was actually there, for operator diagnosis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAudit {
    pub missing: Vec<String>,
    pub present: Vec<String>,
}

impl TableAudit {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// A required column is absent from at least one input table.
///
/// Fatal and table-level: the run stops before any join or derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaFailure {
    pub quantity: TableAudit,
    pub registry: TableAudit,
}

impl fmt::Display for SchemaFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "missing required columns:")?;
        writeln!(f, "  quantity table: {:?}", self.quantity.missing)?;
        writeln!(f, "  registry table: {:?}", self.registry.missing)?;
        writeln!(
            f,
            "columns in quantity table: {}",
            self.quantity.present.join(", ")
        )?;
        write!(
            f,
            "columns in registry table: {}",
            self.registry.present.join(", ")
        )
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{0}")]
    Schema(SchemaFailure),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
