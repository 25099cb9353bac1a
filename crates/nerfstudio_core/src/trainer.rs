//! Trainer configuration record.
//!
//! # Responsibility
//! - Define the configuration object published by each registered method.
//! - Keep the discovery layer decoupled from trainer internals: discovery
//!   only ever reads `method_name`.
//!
//! # Invariants
//! - `method_name` is the map key under which a method is surfaced to the
//!   CLI; it must stay stable across releases of the publishing plugin.

use serde::{Deserialize, Serialize};

/// Configuration for one trainable method.
///
/// Plugins construct this with their own defaults; the discovery layer treats
/// everything except `method_name` as opaque payload for the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerConfig {
    /// Name under which the method is registered and selected.
    pub method_name: String,
    /// Total optimization step budget.
    pub max_num_iterations: u32,
    /// Optional experiment label used for output directories.
    pub experiment_name: Option<String>,
}

impl TrainerConfig {
    /// Creates a config with harness-level defaults for one method name.
    pub fn new(method_name: impl Into<String>) -> Self {
        Self {
            method_name: method_name.into(),
            max_num_iterations: 30_000,
            experiment_name: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TrainerConfig;

    #[test]
    fn new_applies_harness_defaults() {
        let config = TrainerConfig::new("nerfacto");
        assert_eq!(config.method_name, "nerfacto");
        assert_eq!(config.max_num_iterations, 30_000);
        assert!(config.experiment_name.is_none());
    }

    #[test]
    fn serializes_with_snake_case_field_names() {
        let config = TrainerConfig::new("nerfacto");
        let json = serde_json::to_value(&config).expect("config should serialize");
        assert_eq!(json["method_name"], "nerfacto");
        assert_eq!(json["max_num_iterations"], 30_000);
    }
}
