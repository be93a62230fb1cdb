//! Required-column configuration for the two input tables.
//!
//! The column sets are data, not code: observed revisions of the inputs
//! disagree on naming and on which table carries the location column, so the
//! validator derives its required sets from this configuration instead of
//! hard-coding them. All names are compared in canonical form (trimmed,
//! lowercased), which the normalizer establishes before validation runs.

/// Canonical column names expected in the quantity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantitySchema {
    pub product: String,
    pub quantity: String,
}

impl Default for QuantitySchema {
    fn default() -> Self {
        Self {
            product: "product".to_string(),
            quantity: "quantity".to_string(),
        }
    }
}

impl QuantitySchema {
    pub fn required(&self) -> Vec<&str> {
        vec![&self.product, &self.quantity]
    }
}

/// Canonical column names expected in the registry table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrySchema {
    pub product: String,
    pub location: String,
    pub factor: String,
}

impl Default for RegistrySchema {
    fn default() -> Self {
        Self {
            product: "product".to_string(),
            location: "location".to_string(),
            factor: "factor".to_string(),
        }
    }
}

impl RegistrySchema {
    pub fn required(&self) -> Vec<&str> {
        vec![&self.product, &self.location, &self.factor]
    }
}

/// Column configuration for one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaConfig {
    pub quantity: QuantitySchema,
    pub registry: RegistrySchema,
}

#[cfg(test)]
mod tests {
    use super::SchemaConfig;

    #[test]
    fn default_required_sets() {
        let config = SchemaConfig::default();
        assert_eq!(config.quantity.required(), vec!["product", "quantity"]);
        assert_eq!(
            config.registry.required(),
            vec!["product", "location", "factor"]
        );
    }

    #[test]
    fn renamed_factor_column() {
        let mut config = SchemaConfig::default();
        config.registry.factor = "production factor".to_string();
        assert!(
            config
                .registry
                .required()
                .contains(&"production factor")
        );
    }
}
