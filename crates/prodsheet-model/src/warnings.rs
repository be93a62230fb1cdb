use std::fmt;

use serde::{Deserialize, Serialize};

/// A recoverable condition surfaced alongside full output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RunWarning {
    /// Products whose quantity rows had no complete registry entry; the
    /// fallback location and identity factor were substituted where absent.
    UnmatchedProducts(Vec<String>),
}

impl fmt::Display for RunWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunWarning::UnmatchedProducts(products) => write!(
                f,
                "products without a complete registry entry (location or factor missing): {}; \
                 using location=\"Unknown\" and factor=1 where absent",
                products.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RunWarning;

    #[test]
    fn warning_names_every_product() {
        let warning =
            RunWarning::UnmatchedProducts(vec!["C".to_string(), "D".to_string()]);
        let text = warning.to_string();
        assert!(text.contains("C, D"));
        assert!(text.contains("location=\"Unknown\""));
        assert!(text.contains("factor=1"));
    }
}
